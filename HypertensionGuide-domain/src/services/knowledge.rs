//! Static drug-class reference table.
//!
//! Built once on first access and never mutated afterwards.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::entities::treatment::{DrugClass, DrugClassProfile, DrugDose};
use crate::services::AssessmentServiceError;

static DRUG_CLASS_TABLE: Lazy<IndexMap<DrugClass, DrugClassProfile>> = Lazy::new(|| {
    [
        DrugClassProfile {
            class: DrugClass::AceInhibitor,
            drugs: &[
                DrugDose { drug: "Lisinopril", dose_range: "10-40 mg once daily" },
                DrugDose { drug: "Enalapril", dose_range: "5-40 mg daily in 1-2 doses" },
                DrugDose { drug: "Ramipril", dose_range: "2.5-20 mg daily in 1-2 doses" },
                DrugDose { drug: "Perindopril", dose_range: "4-16 mg once daily" },
            ],
            indications: &[
                "Diabetes mellitus",
                "Chronic kidney disease with albuminuria",
                "Heart failure with reduced ejection fraction",
                "Post myocardial infarction",
            ],
            contraindications: &[
                "Pregnancy",
                "History of angioedema",
                "Bilateral renal artery stenosis",
                "Hyperkalemia",
            ],
            side_effects: &["Dry cough", "Hyperkalemia", "Angioedema", "Acute rise in creatinine"],
            monitoring: &["Serum potassium and creatinine 1-2 weeks after initiation or dose change"],
        },
        DrugClassProfile {
            class: DrugClass::AngiotensinReceptorBlocker,
            drugs: &[
                DrugDose { drug: "Losartan", dose_range: "50-100 mg daily in 1-2 doses" },
                DrugDose { drug: "Valsartan", dose_range: "80-320 mg once daily" },
                DrugDose { drug: "Telmisartan", dose_range: "20-80 mg once daily" },
                DrugDose { drug: "Olmesartan", dose_range: "20-40 mg once daily" },
            ],
            indications: &[
                "Diabetes mellitus",
                "Chronic kidney disease with albuminuria",
                "Heart failure",
                "ACE inhibitor intolerance (cough)",
            ],
            contraindications: &[
                "Pregnancy",
                "Bilateral renal artery stenosis",
                "Hyperkalemia",
                "Combination with an ACE inhibitor",
            ],
            side_effects: &["Hyperkalemia", "Dizziness", "Acute rise in creatinine"],
            monitoring: &["Serum potassium and creatinine 1-2 weeks after initiation or dose change"],
        },
        DrugClassProfile {
            class: DrugClass::CalciumChannelBlocker,
            drugs: &[
                DrugDose { drug: "Amlodipine", dose_range: "2.5-10 mg once daily" },
                DrugDose { drug: "Nifedipine XL", dose_range: "30-90 mg once daily" },
                DrugDose { drug: "Diltiazem ER", dose_range: "120-360 mg once daily" },
            ],
            indications: &[
                "Age over 55 years",
                "Isolated systolic hypertension",
                "Stable angina",
            ],
            contraindications: &[
                "Heart failure with reduced ejection fraction (non-dihydropyridines)",
                "Second or third degree heart block (non-dihydropyridines)",
            ],
            side_effects: &["Peripheral edema", "Headache", "Flushing", "Constipation (verapamil)"],
            monitoring: &["Ankle edema", "Heart rate with non-dihydropyridines"],
        },
        DrugClassProfile {
            class: DrugClass::ThiazideDiuretic,
            drugs: &[
                DrugDose { drug: "Chlorthalidone", dose_range: "12.5-25 mg once daily" },
                DrugDose { drug: "Hydrochlorothiazide", dose_range: "12.5-50 mg once daily" },
                DrugDose { drug: "Indapamide", dose_range: "1.25-2.5 mg once daily" },
            ],
            indications: &[
                "Uncomplicated hypertension",
                "Elderly patients",
                "Heart failure",
                "Resistant hypertension as add-on",
            ],
            contraindications: &["History of gout", "Hyponatremia", "Hypokalemia"],
            side_effects: &[
                "Hypokalemia",
                "Hyponatremia",
                "Hyperuricemia",
                "Hyperglycemia",
            ],
            monitoring: &["Electrolytes, uric acid and glucose at baseline and periodically"],
        },
        DrugClassProfile {
            class: DrugClass::BetaBlocker,
            drugs: &[
                DrugDose { drug: "Metoprolol succinate", dose_range: "25-200 mg once daily" },
                DrugDose { drug: "Bisoprolol", dose_range: "2.5-10 mg once daily" },
                DrugDose { drug: "Carvedilol", dose_range: "6.25-25 mg twice daily" },
                DrugDose { drug: "Nebivolol", dose_range: "5-40 mg once daily" },
            ],
            indications: &[
                "Coronary artery disease or post myocardial infarction",
                "Heart failure with reduced ejection fraction",
                "Rate control in atrial fibrillation",
            ],
            contraindications: &[
                "Asthma (non-selective agents)",
                "Second or third degree heart block",
                "Severe bradycardia",
            ],
            side_effects: &["Fatigue", "Bradycardia", "Erectile dysfunction", "Masked hypoglycemia"],
            monitoring: &["Heart rate", "Symptoms of bronchospasm", "Glucose in diabetics"],
        },
    ]
    .into_iter()
    .map(|profile| (profile.class, profile))
    .collect()
});

/// Knowledge-table entry for a drug class
pub fn drug_class_profile(class: DrugClass) -> &'static DrugClassProfile {
    // Every DrugClass variant has an entry
    &DRUG_CLASS_TABLE[&class]
}

/// All entries, in table order
pub fn drug_class_profiles() -> impl Iterator<Item = &'static DrugClassProfile> {
    DRUG_CLASS_TABLE.values()
}

/// Look up an entry by name.
///
/// Accepts the table key ("ACE Inhibitors"), the snake_case identifier
/// ("ace_inhibitor") and common abbreviations, case-insensitively.
pub fn find_drug_class(name: &str) -> Result<&'static DrugClassProfile, AssessmentServiceError> {
    let wanted = name.trim().to_lowercase();
    let class = match wanted.as_str() {
        "ace inhibitors" | "ace inhibitor" | "ace_inhibitor" | "acei" | "ace-i" => {
            DrugClass::AceInhibitor
        }
        "arbs" | "arb" | "angiotensin_receptor_blocker" | "angiotensin receptor blockers" => {
            DrugClass::AngiotensinReceptorBlocker
        }
        "calcium channel blockers" | "calcium channel blocker" | "calcium_channel_blocker"
        | "ccb" => DrugClass::CalciumChannelBlocker,
        "thiazide diuretics" | "thiazide diuretic" | "thiazide_diuretic" | "thiazide" => {
            DrugClass::ThiazideDiuretic
        }
        "beta blockers" | "beta blocker" | "beta_blocker" | "bb" => DrugClass::BetaBlocker,
        _ => return Err(AssessmentServiceError::UnknownDrugClass(name.to_string())),
    };
    Ok(drug_class_profile(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_five_classes_in_order() {
        let classes: Vec<DrugClass> = drug_class_profiles().map(|p| p.class).collect();
        assert_eq!(classes, DrugClass::ALL.to_vec());
    }

    #[test]
    fn test_every_entry_is_populated() {
        for profile in drug_class_profiles() {
            assert!(!profile.drugs.is_empty(), "{} has no drugs", profile.class);
            assert!(!profile.indications.is_empty());
            assert!(!profile.contraindications.is_empty());
            assert!(!profile.side_effects.is_empty());
            assert!(!profile.monitoring.is_empty());
        }
    }

    #[test]
    fn test_find_by_name_and_alias() {
        assert_eq!(find_drug_class("ACE Inhibitors").unwrap().class, DrugClass::AceInhibitor);
        assert_eq!(find_drug_class("arb").unwrap().class, DrugClass::AngiotensinReceptorBlocker);
        assert_eq!(find_drug_class("  CCB ").unwrap().class, DrugClass::CalciumChannelBlocker);
        assert_eq!(find_drug_class("thiazide_diuretic").unwrap().class, DrugClass::ThiazideDiuretic);
    }

    #[test]
    fn test_find_by_every_table_key() {
        for class in DrugClass::ALL {
            assert_eq!(find_drug_class(class.name()).unwrap().class, class);
        }
    }

    #[test]
    fn test_unknown_drug_class() {
        let result = find_drug_class("statins");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("statins"));
    }

    #[test]
    fn test_ace_inhibitor_contraindicated_in_pregnancy() {
        let profile = drug_class_profile(DrugClass::AceInhibitor);
        assert!(profile.contraindications.contains(&"Pregnancy"));
    }
}
