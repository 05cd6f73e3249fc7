use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use hypertension_guide_domain::entities::{DrugClass, DrugClassProfile};

/// A representative agent and its usual daily dose
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicDrugDose {
    pub drug: String,
    pub dose_range: String,
}

/// Knowledge-table entry for one antihypertensive class
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicDrugClass {
    /// Path-friendly key, e.g. "calcium_channel_blocker"
    pub key: String,
    /// Display name, e.g. "Calcium Channel Blockers"
    pub name: String,
    pub drugs: Vec<PublicDrugDose>,
    pub indications: Vec<String>,
    pub contraindications: Vec<String>,
    pub side_effects: Vec<String>,
    pub monitoring: Vec<String>,
}

fn class_key(class: DrugClass) -> &'static str {
    match class {
        DrugClass::AceInhibitor => "ace_inhibitor",
        DrugClass::AngiotensinReceptorBlocker => "angiotensin_receptor_blocker",
        DrugClass::CalciumChannelBlocker => "calcium_channel_blocker",
        DrugClass::ThiazideDiuretic => "thiazide_diuretic",
        DrugClass::BetaBlocker => "beta_blocker",
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

impl From<&DrugClassProfile> for PublicDrugClass {
    fn from(profile: &DrugClassProfile) -> Self {
        Self {
            key: class_key(profile.class).to_string(),
            name: profile.class.name().to_string(),
            drugs: profile
                .drugs
                .iter()
                .map(|dose| PublicDrugDose {
                    drug: dose.drug.to_string(),
                    dose_range: dose.dose_range.to_string(),
                })
                .collect(),
            indications: owned(profile.indications),
            contraindications: owned(profile.contraindications),
            side_effects: owned(profile.side_effects),
            monitoring: owned(profile.monitoring),
        }
    }
}
