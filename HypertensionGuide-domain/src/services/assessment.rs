use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::entities::assessment::Assessment;
use crate::entities::patient::{BmiCategory, PatientRecord};
use crate::entities::treatment::DrugClassProfile;
use crate::services::{
    classification, knowledge, medication, monitoring, report, risk, screening, target,
};

/// Assessment service errors
#[derive(Debug, Error)]
pub enum AssessmentServiceError {
    /// Drug-class name not present in the knowledge table
    #[error("Unknown drug class: {0}")]
    UnknownDrugClass(String),
}

/// Run every clinical rule over a record in dependency order.
///
/// BP classification feeds risk scoring and the medication plan; the risk
/// band selects the monitoring schedule. Target, screening and medication
/// are independent of each other.
pub fn assess_patient(record: &PatientRecord) -> Assessment {
    let bmi = record.bmi();
    let blood_pressure = classification::classify_blood_pressure(record.systolic, record.diastolic);
    let risk = risk::assess_risk(record);
    let target = target::resolve_target(record);
    let medication = medication::advise_medication(record, blood_pressure.severity);
    let screening = screening::screen_secondary_hypertension(&record.secondary_clues);
    let monitoring = monitoring::monitoring_schedule(risk.category);

    debug!(
        bp_category = %blood_pressure.category,
        risk_score = risk.score,
        risk_category = %risk.category,
        "Assessment complete"
    );

    Assessment {
        record: record.clone(),
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        blood_pressure,
        risk,
        target,
        medication,
        screening,
        monitoring,
    }
}

/// Trait for assessment service operations
pub trait AssessmentServiceTrait {
    /// Evaluate a patient record
    fn assess(&self, record: &PatientRecord) -> Assessment;

    /// Render a completed assessment as plain text
    fn compose_report(&self, assessment: &Assessment, generated_at: DateTime<Utc>) -> String;

    /// All knowledge-table entries, in table order
    fn drug_classes(&self) -> Vec<&'static DrugClassProfile>;

    /// Look up a knowledge-table entry by name
    fn drug_class(&self, name: &str) -> Result<&'static DrugClassProfile, AssessmentServiceError>;
}

/// Stateless assessment service backed by the rule tables
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentService;

impl AssessmentService {
    /// Create a new assessment service
    pub fn new() -> Self {
        Self
    }
}

impl AssessmentServiceTrait for AssessmentService {
    fn assess(&self, record: &PatientRecord) -> Assessment {
        assess_patient(record)
    }

    fn compose_report(&self, assessment: &Assessment, generated_at: DateTime<Utc>) -> String {
        report::compose_report(assessment, generated_at)
    }

    fn drug_classes(&self) -> Vec<&'static DrugClassProfile> {
        knowledge::drug_class_profiles().collect()
    }

    fn drug_class(&self, name: &str) -> Result<&'static DrugClassProfile, AssessmentServiceError> {
        knowledge::find_drug_class(name)
    }
}

/// Create the default assessment service
pub fn create_default_assessment_service() -> impl AssessmentServiceTrait + Send + Sync {
    AssessmentService::new()
}

/// Create a mock assessment service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_assessment_service() -> impl AssessmentServiceTrait + Send + Sync {
    crate::testing::MockAssessmentService::new()
}
