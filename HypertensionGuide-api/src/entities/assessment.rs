use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use hypertension_guide_domain::entities::{
    Assessment, MedicationRecommendation, SecondaryScreening, TreatmentApproach,
};

/// Blood pressure classification as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicBloodPressure {
    /// e.g. "Stage 1 Hypertension"
    pub category: String,
    /// "low", "moderate" or "high"
    pub severity: String,
    /// Reading is at or above 180/120 and needs urgent referral
    pub emergency_referral: bool,
}

/// Points awarded by one risk factor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicRiskContribution {
    pub factor: String,
    pub points: u32,
}

/// Cardiovascular risk summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicRisk {
    pub score: u32,
    /// e.g. "High Risk"
    pub category: String,
    pub severity: String,
    pub contributions: Vec<PublicRiskContribution>,
}

/// Individualised treatment target
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicTarget {
    pub systolic: u16,
    pub diastolic: u16,
    pub rationale: String,
}

/// One medication recommendation line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicMedicationRecommendation {
    /// Stable identifier, e.g. "ace_inhibitor_or_arb"
    pub code: String,
    pub text: String,
    /// Knowledge-table names of the classes involved
    pub drug_classes: Vec<String>,
}

/// Treatment approach and medication advice
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicTreatment {
    /// "medication_recommended", "lifestyle_first" or "lifestyle_sufficient"
    pub approach: String,
    pub advice: Vec<String>,
    pub recommendations: Vec<PublicMedicationRecommendation>,
}

/// A screening finding with its suggested workup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicClinicalClue {
    pub finding: String,
    pub suggested_workup: String,
}

/// Secondary hypertension screening result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicScreening {
    pub recommended: bool,
    pub triggers: Vec<String>,
    pub acute_rise: bool,
    pub renal_clues: Vec<PublicClinicalClue>,
    pub endocrine_clues: Vec<PublicClinicalClue>,
}

/// A scheduled follow-up visit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicFollowUp {
    pub timepoint: String,
    pub action: String,
}

/// Follow-up plan
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicMonitoring {
    /// "intensive" or "standard"
    pub schedule: String,
    pub visits: Vec<PublicFollowUp>,
}

/// Complete result of an assessment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResponse {
    /// Identifier of this evaluation; nothing is stored under it
    pub assessment_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub bmi: f64,
    pub bmi_category: String,
    pub blood_pressure: PublicBloodPressure,
    pub risk: PublicRisk,
    pub target: PublicTarget,
    pub treatment: PublicTreatment,
    pub screening: PublicScreening,
    pub monitoring: PublicMonitoring,
    /// Plain-text report of the same assessment
    pub report: String,
}

impl AssessmentResponse {
    /// Map a domain assessment onto the public shape
    pub fn from_assessment(
        assessment_id: Uuid,
        generated_at: DateTime<Utc>,
        assessment: &Assessment,
        report: String,
    ) -> Self {
        Self {
            assessment_id,
            generated_at,
            bmi: assessment.bmi,
            bmi_category: assessment.bmi_category.to_string(),
            blood_pressure: PublicBloodPressure {
                category: assessment.blood_pressure.category.label().to_string(),
                severity: assessment.blood_pressure.severity.to_string(),
                emergency_referral: assessment.blood_pressure.emergency_referral,
            },
            risk: PublicRisk {
                score: assessment.risk.score,
                category: assessment.risk.category.label().to_string(),
                severity: assessment.risk.severity.to_string(),
                contributions: assessment
                    .risk
                    .contributions
                    .iter()
                    .map(|c| PublicRiskContribution {
                        factor: c.family.to_string(),
                        points: c.points,
                    })
                    .collect(),
            },
            target: PublicTarget {
                systolic: assessment.target.systolic,
                diastolic: assessment.target.diastolic,
                rationale: assessment.target.rationale.label().to_string(),
            },
            treatment: PublicTreatment {
                approach: approach_code(&assessment.medication.approach).to_string(),
                advice: to_strings(assessment.medication.approach.advice()),
                recommendations: assessment
                    .medication
                    .recommendations
                    .iter()
                    .map(public_recommendation)
                    .collect(),
            },
            screening: public_screening(&assessment.screening),
            monitoring: PublicMonitoring {
                schedule: assessment.monitoring.kind.to_string(),
                visits: assessment
                    .monitoring
                    .visits
                    .iter()
                    .map(|v| PublicFollowUp {
                        timepoint: v.timepoint.to_string(),
                        action: v.action.to_string(),
                    })
                    .collect(),
            },
            report,
        }
    }
}

fn approach_code(approach: &TreatmentApproach) -> &'static str {
    match approach {
        TreatmentApproach::MedicationRecommended { .. } => "medication_recommended",
        TreatmentApproach::LifestyleFirst => "lifestyle_first",
        TreatmentApproach::LifestyleSufficient => "lifestyle_sufficient",
    }
}

fn recommendation_code(recommendation: &MedicationRecommendation) -> &'static str {
    match recommendation {
        MedicationRecommendation::AceInhibitorOrArb => "ace_inhibitor_or_arb",
        MedicationRecommendation::CalciumChannelBlocker => "calcium_channel_blocker",
        MedicationRecommendation::DualTherapy => "dual_therapy",
        MedicationRecommendation::AnyFirstLineAgent => "any_first_line_agent",
    }
}

fn public_recommendation(recommendation: &MedicationRecommendation) -> PublicMedicationRecommendation {
    PublicMedicationRecommendation {
        code: recommendation_code(recommendation).to_string(),
        text: recommendation.text().to_string(),
        drug_classes: recommendation
            .drug_classes()
            .iter()
            .map(|class| class.name().to_string())
            .collect(),
    }
}

fn public_screening(screening: &SecondaryScreening) -> PublicScreening {
    PublicScreening {
        recommended: screening.recommended,
        triggers: screening.triggers.iter().map(|t| t.label().to_string()).collect(),
        acute_rise: screening.acute_rise,
        renal_clues: screening
            .renal_clues
            .iter()
            .map(|c| PublicClinicalClue {
                finding: c.label().to_string(),
                suggested_workup: c.suggested_workup().to_string(),
            })
            .collect(),
        endocrine_clues: screening
            .endocrine_clues
            .iter()
            .map(|c| PublicClinicalClue {
                finding: c.label().to_string(),
                suggested_workup: c.suggested_workup().to_string(),
            })
            .collect(),
    }
}

fn to_strings(lines: Vec<&'static str>) -> Vec<String> {
    lines.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypertension_guide_domain::entities::PatientRecord;
    use hypertension_guide_domain::services::assess_patient;

    #[test]
    fn test_maps_stage2_diabetic_patient() {
        let mut record = PatientRecord {
            age: 60,
            systolic: 165,
            diastolic: 102,
            ..Default::default()
        };
        record.comorbidities.diabetes = true;
        let assessment = assess_patient(&record);

        let response =
            AssessmentResponse::from_assessment(Uuid::new_v4(), Utc::now(), &assessment, String::new());

        assert_eq!(response.blood_pressure.category, "Stage 2 Hypertension");
        assert_eq!(response.blood_pressure.severity, "high");
        assert_eq!(response.treatment.approach, "medication_recommended");
        assert_eq!(response.target.systolic, 130);
        let codes: Vec<&str> = response
            .treatment
            .recommendations
            .iter()
            .map(|r| r.code.as_str())
            .collect();
        assert_eq!(codes, vec!["ace_inhibitor_or_arb", "calcium_channel_blocker", "dual_therapy"]);
    }
}
