use tracing::debug;

use crate::entities::blood_pressure::Severity;
use crate::entities::patient::{PatientRecord, Sex};
use crate::entities::treatment::{
    FirstLinePreference, MedicationPlan, MedicationRecommendation, TreatmentApproach,
};

/// Additive recommendation rule: every matching rule contributes its recommendation
pub type MedicationRule = (fn(&PatientRecord) -> bool, MedicationRecommendation);

/// Recommendation rules in emission order
pub static MEDICATION_RULES: &[MedicationRule] = &[
    (
        |r| r.comorbidities.diabetes || r.comorbidities.ckd,
        MedicationRecommendation::AceInhibitorOrArb,
    ),
    (
        |r| r.age > 55 || r.sex == Sex::Male,
        MedicationRecommendation::CalciumChannelBlocker,
    ),
    (
        |r| needs_dual_therapy(r.systolic, r.diastolic),
        MedicationRecommendation::DualTherapy,
    ),
];

fn needs_dual_therapy(systolic: u16, diastolic: u16) -> bool {
    systolic >= 160 || diastolic >= 100
}

fn needs_renal_protection(record: &PatientRecord) -> bool {
    record.comorbidities.diabetes || record.comorbidities.ckd
}

/// Ordered drug-class recommendations, falling back to any first-line agent
pub fn recommend_medications(record: &PatientRecord) -> Vec<MedicationRecommendation> {
    let mut recommendations: Vec<MedicationRecommendation> = MEDICATION_RULES
        .iter()
        .filter(|(applies, _)| applies(record))
        .map(|(_, recommendation)| *recommendation)
        .collect();

    if recommendations.is_empty() {
        recommendations.push(MedicationRecommendation::AnyFirstLineAgent);
    }
    recommendations
}

/// Decide how urgently medication is needed for the current reading
pub fn treatment_approach(record: &PatientRecord) -> TreatmentApproach {
    let (systolic, diastolic) = (record.systolic, record.diastolic);

    if systolic >= 140 || diastolic >= 90 {
        let preference = if needs_renal_protection(record) {
            FirstLinePreference::RenalProtective
        } else {
            FirstLinePreference::AnyFirstLine
        };
        TreatmentApproach::MedicationRecommended {
            preference,
            dual_therapy: needs_dual_therapy(systolic, diastolic),
        }
    } else if systolic >= 130 || diastolic >= 80 {
        TreatmentApproach::LifestyleFirst
    } else {
        TreatmentApproach::LifestyleSufficient
    }
}

/// Build the complete medication plan
pub fn advise_medication(record: &PatientRecord, bp_severity: Severity) -> MedicationPlan {
    let approach = treatment_approach(record);
    let recommendations = recommend_medications(record);
    debug!(?approach, count = recommendations.len(), "Built medication plan");

    MedicationPlan {
        bp_severity,
        approach,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn female(age: u16, systolic: u16, diastolic: u16) -> PatientRecord {
        PatientRecord {
            age,
            sex: Sex::Female,
            systolic,
            diastolic,
            ..PatientRecord::default()
        }
    }

    #[test]
    fn test_documented_diabetic_elderly_scenario() {
        let mut record = female(70, 150, 95);
        record.sex = Sex::Male;
        record.comorbidities.diabetes = true;

        assert_eq!(
            recommend_medications(&record),
            vec![
                MedicationRecommendation::AceInhibitorOrArb,
                MedicationRecommendation::CalciumChannelBlocker,
            ]
        );
    }

    #[test]
    fn test_fallback_only_when_nothing_matches() {
        assert_eq!(
            recommend_medications(&female(55, 159, 99)),
            vec![MedicationRecommendation::AnyFirstLineAgent]
        );

        // Each condition on its own removes the fallback
        let mut diabetic = female(40, 120, 80);
        diabetic.comorbidities.diabetes = true;
        let mut with_ckd = female(40, 120, 80);
        with_ckd.comorbidities.ckd = true;
        let mut male = female(40, 120, 80);
        male.sex = Sex::Male;

        for record in [diabetic, with_ckd, male, female(56, 120, 80), female(40, 160, 80), female(40, 120, 100)] {
            assert!(!recommend_medications(&record).contains(&MedicationRecommendation::AnyFirstLineAgent));
        }
    }

    #[test]
    fn test_rules_are_additive() {
        let mut record = female(60, 170, 105);
        record.comorbidities.ckd = true;
        assert_eq!(
            recommend_medications(&record),
            vec![
                MedicationRecommendation::AceInhibitorOrArb,
                MedicationRecommendation::CalciumChannelBlocker,
                MedicationRecommendation::DualTherapy,
            ]
        );
    }

    #[test]
    fn test_treatment_approach_thresholds() {
        assert_eq!(treatment_approach(&female(40, 129, 79)), TreatmentApproach::LifestyleSufficient);
        assert_eq!(treatment_approach(&female(40, 130, 70)), TreatmentApproach::LifestyleFirst);
        assert_eq!(treatment_approach(&female(40, 120, 89)), TreatmentApproach::LifestyleFirst);
        assert_eq!(
            treatment_approach(&female(40, 140, 70)),
            TreatmentApproach::MedicationRecommended {
                preference: FirstLinePreference::AnyFirstLine,
                dual_therapy: false,
            }
        );
    }

    #[test]
    fn test_renal_protection_prioritised_with_dual_therapy() {
        let mut record = female(40, 165, 95);
        record.comorbidities.diabetes = true;
        assert_eq!(
            treatment_approach(&record),
            TreatmentApproach::MedicationRecommended {
                preference: FirstLinePreference::RenalProtective,
                dual_therapy: true,
            }
        );
    }

    #[test]
    fn test_plan_carries_bp_severity() {
        let plan = advise_medication(&female(40, 115, 75), Severity::Low);
        assert_eq!(plan.bp_severity, Severity::Low);
        assert_eq!(plan.approach, TreatmentApproach::LifestyleSufficient);
        assert_eq!(plan.recommendations, vec![MedicationRecommendation::AnyFirstLineAgent]);
    }
}
