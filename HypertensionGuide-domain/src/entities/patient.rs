use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Biological sex as captured on the assessment form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (first option on the form, used when the field is absent)
    #[default]
    Male,

    /// Female
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Established diagnoses and target organ damage
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(default)]
pub struct Comorbidities {
    /// Diabetes mellitus
    pub diabetes: bool,

    /// Coronary artery disease
    pub cad: bool,

    /// Chronic kidney disease
    pub ckd: bool,

    /// Stroke or TIA
    pub cva: bool,

    /// Dyslipidemia
    pub dyslipidemia: bool,

    /// Thyroid disorder
    pub thyroid_disorder: bool,

    /// Left ventricular hypertrophy
    pub lvh: bool,

    /// Heart failure
    pub heart_failure: bool,

    /// Peripheral arterial disease
    pub pad: bool,

    /// Hypertensive retinopathy
    pub retinopathy: bool,

    /// Microalbuminuria or proteinuria
    pub microalbuminuria: bool,

    /// eGFR below 60 mL/min/1.73m²
    pub reduced_gfr: bool,
}

/// Modifiable lifestyle risk factors
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(default)]
pub struct RiskFactors {
    pub smoking: bool,
    pub physical_inactivity: bool,
    pub alcohol: bool,
    pub high_salt: bool,
    pub poor_diet: bool,
    pub stress: bool,
    pub sleep_deprivation: bool,
    pub sleep_apnea_symptoms: bool,
}

/// Clinical clues pointing at an identifiable cause of hypertension
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(default)]
pub struct SecondaryHtnClues {
    /// BP uncontrolled on three or more agents including a diuretic
    pub resistant_htn: bool,

    /// Abrupt rise of previously stable BP
    pub acute_rise: bool,

    /// Malignant or accelerated hypertension
    pub malignant_htn: bool,

    /// Onset before 30 years of age
    pub early_onset: bool,

    // Renal / renovascular
    pub abdominal_bruit: bool,
    pub asymmetric_kidneys: bool,
    pub elevated_creatinine: bool,
    pub abnormal_urinalysis: bool,

    // Endocrine
    pub hypokalemia: bool,
    pub cushings_features: bool,
    pub pheo_triad: bool,
}

/// First-degree family history
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(default)]
pub struct FamilyHistory {
    pub hypertension: bool,
    /// Men under 55, women under 65
    pub premature_cad: bool,
    pub stroke: bool,
    pub kidney_disease: bool,
    pub diabetes: bool,
    pub sudden_cardiac_death: bool,
}

/// The single patient aggregate consumed by every clinical rule.
///
/// Constructed once per assessment by the caller and only ever read by the
/// domain services. Absent fields take the normotensive defaults from
/// [`PatientRecord::default`], so a partially filled form still yields an answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PatientRecord {
    /// Patient name, only used by the report
    pub name: String,

    /// Age in years
    pub age: u16,

    pub sex: Sex,

    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in centimetres
    pub height_cm: f64,

    /// Waist circumference in centimetres
    pub waist_cm: Option<f64>,

    /// Office systolic pressure in mmHg
    pub systolic: u16,

    /// Office diastolic pressure in mmHg
    pub diastolic: u16,

    /// Heart rate in beats per minute
    pub heart_rate: Option<u16>,

    /// Known duration of hypertension in years
    pub htn_duration_years: u16,

    pub comorbidities: Comorbidities,
    pub risk_factors: RiskFactors,
    pub secondary_clues: SecondaryHtnClues,
    pub family_history: FamilyHistory,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            sex: Sex::default(),
            weight_kg: 0.0,
            height_cm: 0.0,
            waist_cm: None,
            systolic: 120,
            diastolic: 80,
            heart_rate: None,
            htn_duration_years: 0,
            comorbidities: Comorbidities::default(),
            risk_factors: RiskFactors::default(),
            secondary_clues: SecondaryHtnClues::default(),
            family_history: FamilyHistory::default(),
        }
    }
}

impl PatientRecord {
    /// Body mass index rounded to two decimals.
    ///
    /// Always derived from weight and height; returns 0.0 when either is missing.
    pub fn bmi(&self) -> f64 {
        calculate_bmi(self.weight_kg, self.height_cm)
    }
}

/// Compute BMI from weight (kg) and height (cm), rounded to two decimals
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 100.0).round() / 100.0
}

/// Weight band derived from BMI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::NormalWeight => write!(f, "Normal weight"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}
