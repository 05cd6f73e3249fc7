use serde::{Deserialize, Serialize};

use super::blood_pressure::Severity;

/// Cardiovascular risk band derived from the additive score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Moderate => "Moderate Risk",
            RiskCategory::High => "High Risk",
            RiskCategory::VeryHigh => "Very High Risk",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RiskCategory::Low => Severity::Low,
            RiskCategory::Moderate => Severity::Moderate,
            RiskCategory::High | RiskCategory::VeryHigh => Severity::High,
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Factor family contributing to the risk score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorFamily {
    Age,
    Bmi,
    Diabetes,
    CoronaryArteryDisease,
    ChronicKidneyDisease,
    Smoking,
    BloodPressure,
}

impl std::fmt::Display for RiskFactorFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskFactorFamily::Age => write!(f, "Age"),
            RiskFactorFamily::Bmi => write!(f, "BMI"),
            RiskFactorFamily::Diabetes => write!(f, "Diabetes"),
            RiskFactorFamily::CoronaryArteryDisease => write!(f, "Coronary artery disease"),
            RiskFactorFamily::ChronicKidneyDisease => write!(f, "Chronic kidney disease"),
            RiskFactorFamily::Smoking => write!(f, "Smoking"),
            RiskFactorFamily::BloodPressure => write!(f, "Blood pressure"),
        }
    }
}

/// Points awarded by one factor family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskContribution {
    pub family: RiskFactorFamily,
    pub points: u32,
}

/// Score together with its band
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    pub score: u32,
    pub category: RiskCategory,
    pub severity: Severity,

    /// Non-zero contributions, in evaluation order
    pub contributions: Vec<RiskContribution>,
}
