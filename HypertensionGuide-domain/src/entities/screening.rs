use serde::{Deserialize, Serialize};

/// History findings that on their own justify a secondary workup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningTrigger {
    ResistantHypertension,
    EarlyOnset,
    MalignantHypertension,
}

impl ScreeningTrigger {
    pub fn label(&self) -> &'static str {
        match self {
            ScreeningTrigger::ResistantHypertension => "Resistant hypertension",
            ScreeningTrigger::EarlyOnset => "Onset before age 30",
            ScreeningTrigger::MalignantHypertension => "Malignant/accelerated hypertension",
        }
    }
}

/// Renal and renovascular clues
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RenalClue {
    AbdominalBruit,
    AsymmetricKidneys,
    ElevatedCreatinine,
    AbnormalUrinalysis,
}

impl RenalClue {
    pub fn label(&self) -> &'static str {
        match self {
            RenalClue::AbdominalBruit => "Abdominal bruit",
            RenalClue::AsymmetricKidneys => "Asymmetric kidney size",
            RenalClue::ElevatedCreatinine => "Elevated creatinine",
            RenalClue::AbnormalUrinalysis => "Abnormal urinalysis",
        }
    }

    pub fn suggested_workup(&self) -> &'static str {
        match self {
            RenalClue::AbdominalBruit => "Renal artery duplex ultrasound or CT/MR angiography",
            RenalClue::AsymmetricKidneys => "Renal ultrasound and renal artery imaging",
            RenalClue::ElevatedCreatinine => "Repeat creatinine with eGFR, renal ultrasound",
            RenalClue::AbnormalUrinalysis => "Urine albumin-to-creatinine ratio and microscopy",
        }
    }
}

/// Endocrine clues
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndocrineClue {
    Hypokalemia,
    CushingsFeatures,
    PheochromocytomaTriad,
}

impl EndocrineClue {
    pub fn label(&self) -> &'static str {
        match self {
            EndocrineClue::Hypokalemia => "Unprovoked hypokalemia",
            EndocrineClue::CushingsFeatures => "Cushingoid features",
            EndocrineClue::PheochromocytomaTriad => "Headache, palpitations and sweating",
        }
    }

    pub fn suggested_workup(&self) -> &'static str {
        match self {
            EndocrineClue::Hypokalemia => "Plasma aldosterone-to-renin ratio",
            EndocrineClue::CushingsFeatures => {
                "Overnight dexamethasone suppression test or 24h urinary free cortisol"
            }
            EndocrineClue::PheochromocytomaTriad => "Plasma free metanephrines",
        }
    }
}

/// Outcome of screening for secondary causes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SecondaryScreening {
    /// Resistant, early-onset or malignant hypertension present
    pub recommended: bool,
    pub triggers: Vec<ScreeningTrigger>,

    /// Abrupt rise of previously stable BP. Reported, does not set `recommended`.
    pub acute_rise: bool,

    pub renal_clues: Vec<RenalClue>,
    pub endocrine_clues: Vec<EndocrineClue>,
}

impl SecondaryScreening {
    /// Any clue group matched or any trigger present
    pub fn has_findings(&self) -> bool {
        self.recommended
            || self.acute_rise
            || !self.renal_clues.is_empty()
            || !self.endocrine_clues.is_empty()
    }
}
