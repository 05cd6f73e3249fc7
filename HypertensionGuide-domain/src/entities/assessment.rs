use serde::Serialize;

use super::blood_pressure::BloodPressureClassification;
use super::monitoring::MonitoringSchedule;
use super::patient::{BmiCategory, PatientRecord};
use super::risk::RiskAssessment;
use super::screening::SecondaryScreening;
use super::treatment::{MedicationPlan, TargetBloodPressure};

/// A patient record together with every value derived from it.
///
/// All derived fields are computed in one pass from `record`, so they can
/// never disagree with the vitals they were computed from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assessment {
    pub record: PatientRecord,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub blood_pressure: BloodPressureClassification,
    pub risk: RiskAssessment,
    pub target: TargetBloodPressure,
    pub medication: MedicationPlan,
    pub screening: SecondaryScreening,
    pub monitoring: MonitoringSchedule,
}
