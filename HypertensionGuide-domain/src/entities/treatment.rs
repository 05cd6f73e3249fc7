use serde::{Deserialize, Serialize};

use super::blood_pressure::Severity;

/// Why a particular BP goal was chosen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetRationale {
    /// Diabetes or chronic kidney disease
    Intensive,
    /// Age 65 and over
    StandardElderly,
    StandardAdult,
}

impl TargetRationale {
    pub fn label(&self) -> &'static str {
        match self {
            TargetRationale::Intensive => "intensive target",
            TargetRationale::StandardElderly => "standard elderly target",
            TargetRationale::StandardAdult => "standard adult target",
        }
    }
}

/// Treatment goal, read as "below systolic/diastolic"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetBloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
    pub rationale: TargetRationale,
}

impl std::fmt::Display for TargetBloodPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}/{} mmHg ({})", self.systolic, self.diastolic, self.rationale.label())
    }
}

/// Antihypertensive drug classes held in the knowledge table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrugClass {
    AceInhibitor,
    AngiotensinReceptorBlocker,
    CalciumChannelBlocker,
    ThiazideDiuretic,
    BetaBlocker,
}

impl DrugClass {
    pub const ALL: [DrugClass; 5] = [
        DrugClass::AceInhibitor,
        DrugClass::AngiotensinReceptorBlocker,
        DrugClass::CalciumChannelBlocker,
        DrugClass::ThiazideDiuretic,
        DrugClass::BetaBlocker,
    ];

    /// Table key
    pub fn name(&self) -> &'static str {
        match self {
            DrugClass::AceInhibitor => "ACE Inhibitors",
            DrugClass::AngiotensinReceptorBlocker => "ARBs",
            DrugClass::CalciumChannelBlocker => "Calcium Channel Blockers",
            DrugClass::ThiazideDiuretic => "Thiazide Diuretics",
            DrugClass::BetaBlocker => "Beta Blockers",
        }
    }
}

impl std::fmt::Display for DrugClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single agent and its usual daily dose range
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DrugDose {
    pub drug: &'static str,
    pub dose_range: &'static str,
}

/// Static reference facts for one drug class
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DrugClassProfile {
    pub class: DrugClass,
    pub drugs: &'static [DrugDose],
    pub indications: &'static [&'static str],
    pub contraindications: &'static [&'static str],
    pub side_effects: &'static [&'static str],
    pub monitoring: &'static [&'static str],
}

/// One line of the medication advice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MedicationRecommendation {
    /// Diabetes or CKD present
    AceInhibitorOrArb,
    /// Age over 55 or male
    CalciumChannelBlocker,
    /// Reading at or above 160/100
    DualTherapy,
    /// Nothing more specific applied
    AnyFirstLineAgent,
}

impl MedicationRecommendation {
    pub fn text(&self) -> &'static str {
        match self {
            MedicationRecommendation::AceInhibitorOrArb => {
                "ACE Inhibitor or ARB (renal and cardiovascular protection in diabetes/CKD)"
            }
            MedicationRecommendation::CalciumChannelBlocker => {
                "Calcium Channel Blocker (effective in patients over 55 and in men)"
            }
            MedicationRecommendation::DualTherapy => {
                "Consider dual therapy (BP ≥160/100 mmHg, >20/10 mmHg above target)"
            }
            MedicationRecommendation::AnyFirstLineAgent => {
                "Any first-line agent: ACE Inhibitor, ARB, Calcium Channel Blocker or Thiazide Diuretic"
            }
        }
    }

    /// Knowledge-table entries backing this recommendation
    pub fn drug_classes(&self) -> &'static [DrugClass] {
        match self {
            MedicationRecommendation::AceInhibitorOrArb => {
                &[DrugClass::AceInhibitor, DrugClass::AngiotensinReceptorBlocker]
            }
            MedicationRecommendation::CalciumChannelBlocker => &[DrugClass::CalciumChannelBlocker],
            MedicationRecommendation::DualTherapy => &[],
            MedicationRecommendation::AnyFirstLineAgent => &[
                DrugClass::AceInhibitor,
                DrugClass::AngiotensinReceptorBlocker,
                DrugClass::CalciumChannelBlocker,
                DrugClass::ThiazideDiuretic,
            ],
        }
    }
}

impl std::fmt::Display for MedicationRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Agents to prioritise once medication is indicated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FirstLinePreference {
    /// ACE inhibitor or ARB, for diabetes/CKD
    RenalProtective,
    AnyFirstLine,
}

/// How urgently pharmacotherapy is needed for the current reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "approach", rename_all = "snake_case")]
pub enum TreatmentApproach {
    /// Reading at or above 140/90
    MedicationRecommended {
        preference: FirstLinePreference,
        dual_therapy: bool,
    },
    /// Reading in the 130-139 / 80-89 band
    LifestyleFirst,
    LifestyleSufficient,
}

impl TreatmentApproach {
    /// Advice lines in display order
    pub fn advice(&self) -> Vec<&'static str> {
        match self {
            TreatmentApproach::MedicationRecommended { preference, dual_therapy } => {
                let mut lines = vec!["Pharmacological treatment recommended"];
                lines.push(match preference {
                    FirstLinePreference::RenalProtective => {
                        "Prioritise ACE Inhibitor or ARB for renal protection"
                    }
                    FirstLinePreference::AnyFirstLine => "Start any first-line agent",
                });
                if *dual_therapy {
                    lines.push("Consider starting with dual therapy (single-pill combination preferred)");
                }
                lines
            }
            TreatmentApproach::LifestyleFirst => vec![
                "Lifestyle modification first",
                "Consider medication if high cardiovascular risk, target organ damage, or BP uncontrolled after 3-6 months",
            ],
            TreatmentApproach::LifestyleSufficient => {
                vec!["Lifestyle modification sufficient; no medication indicated"]
            }
        }
    }
}

/// Full output of the medication advisor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationPlan {
    /// Severity of the BP classification the plan was built from
    pub bp_severity: Severity,
    pub approach: TreatmentApproach,
    /// All matching recommendations, in rule order
    pub recommendations: Vec<MedicationRecommendation>,
}
