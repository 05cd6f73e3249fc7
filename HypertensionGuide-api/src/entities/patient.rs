use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use hypertension_guide_domain::entities::patient::{
    Comorbidities, FamilyHistory, PatientRecord, RiskFactors, SecondaryHtnClues, Sex,
};

/// Request payload for a hypertension assessment.
///
/// Every field is optional; missing values fall back to the normotensive
/// defaults of the domain record (120/80 mmHg, male, no flags set).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
#[validate(schema(function = "validate_pressure_order", skip_on_field_errors = true))]
pub struct AssessmentRequest {
    /// Patient name, printed on the report only
    #[validate(length(max = 200, message = "Name cannot exceed 200 characters"))]
    pub name: Option<String>,

    /// Age in years
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<u16>,

    /// Biological sex (defaults to male)
    pub sex: Option<Sex>,

    /// Weight in kilograms
    #[validate(range(min = 20.0, max = 300.0, message = "Weight must be between 20 and 300 kg"))]
    pub weight_kg: Option<f64>,

    /// Height in centimetres
    #[validate(range(min = 100.0, max = 250.0, message = "Height must be between 100 and 250 cm"))]
    pub height_cm: Option<f64>,

    /// Waist circumference in centimetres
    #[validate(range(min = 50.0, max = 200.0, message = "Waist must be between 50 and 200 cm"))]
    pub waist_cm: Option<f64>,

    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 70, max = 250, message = "Systolic must be between 70 and 250"))]
    pub systolic: Option<u16>,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 40, max = 150, message = "Diastolic must be between 40 and 150"))]
    pub diastolic: Option<u16>,

    /// Heart rate in beats per minute
    #[validate(range(min = 40, max = 200, message = "Heart rate must be between 40 and 200"))]
    pub heart_rate: Option<u16>,

    /// Known duration of hypertension in years
    #[validate(range(max = 50, message = "Duration cannot exceed 50 years"))]
    pub htn_duration_years: Option<u16>,

    pub comorbidities: Comorbidities,
    pub risk_factors: RiskFactors,
    pub secondary_clues: SecondaryHtnClues,
    pub family_history: FamilyHistory,
}

/// Systolic must stay above diastolic when both are supplied
fn validate_pressure_order(request: &AssessmentRequest) -> Result<(), ValidationError> {
    match (request.systolic, request.diastolic) {
        (Some(systolic), Some(diastolic)) if systolic <= diastolic => {
            let mut error = ValidationError::new("pressure_order");
            error.message = Some("Systolic pressure must be greater than diastolic pressure".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

impl AssessmentRequest {
    /// Build the domain record, filling absent fields with its defaults
    pub fn into_record(self) -> PatientRecord {
        let defaults = PatientRecord::default();

        PatientRecord {
            name: self.name.map(|n| n.trim().to_string()).unwrap_or(defaults.name),
            age: self.age.unwrap_or(defaults.age),
            sex: self.sex.unwrap_or(defaults.sex),
            weight_kg: self.weight_kg.unwrap_or(defaults.weight_kg),
            height_cm: self.height_cm.unwrap_or(defaults.height_cm),
            waist_cm: self.waist_cm,
            systolic: self.systolic.unwrap_or(defaults.systolic),
            diastolic: self.diastolic.unwrap_or(defaults.diastolic),
            heart_rate: self.heart_rate,
            htn_duration_years: self.htn_duration_years.unwrap_or(defaults.htn_duration_years),
            comorbidities: self.comorbidities,
            risk_factors: self.risk_factors,
            secondary_clues: self.secondary_clues,
            family_history: self.family_history,
        }
    }
}
