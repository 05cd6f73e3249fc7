use tracing::debug;

use crate::entities::blood_pressure::BloodPressureCategory;
use crate::entities::patient::PatientRecord;
use crate::entities::risk::{RiskAssessment, RiskCategory, RiskContribution, RiskFactorFamily};
use crate::services::classification::categorize_blood_pressure;

/// Age tiers, highest first: (exclusive lower bound, points)
const AGE_TIERS: &[(u16, u32)] = &[(65, 3), (55, 2), (45, 1)];

/// BMI tiers, highest first: (inclusive lower bound, points)
const BMI_TIERS: &[(f64, u32)] = &[(30.0, 2), (25.0, 1)];

/// Upper bound (inclusive) of each risk band, lowest first
const RISK_BANDS: &[(u32, RiskCategory)] = &[
    (3, RiskCategory::Low),
    (7, RiskCategory::Moderate),
    (12, RiskCategory::High),
];

fn age_points(age: u16) -> u32 {
    AGE_TIERS
        .iter()
        .find(|(above, _)| age > *above)
        .map_or(0, |(_, points)| *points)
}

fn bmi_points(bmi: f64) -> u32 {
    BMI_TIERS
        .iter()
        .find(|(at_least, _)| bmi >= *at_least)
        .map_or(0, |(_, points)| *points)
}

fn blood_pressure_points(category: BloodPressureCategory) -> u32 {
    match category {
        BloodPressureCategory::HypertensiveCrisis => 5,
        BloodPressureCategory::Hypertension2 => 3,
        BloodPressureCategory::Hypertension1 => 2,
        _ => 0,
    }
}

/// Per-family contributions to the cardiovascular risk score.
///
/// Only the best tier counts inside a family. The BP category is always
/// re-derived from the current vitals.
pub fn score_contributions(record: &PatientRecord) -> Vec<RiskContribution> {
    let (bp_category, _) = categorize_blood_pressure(record.systolic, record.diastolic);
    let comorbidities = &record.comorbidities;

    let candidates = [
        (RiskFactorFamily::Age, age_points(record.age)),
        (RiskFactorFamily::Bmi, bmi_points(record.bmi())),
        (RiskFactorFamily::Diabetes, if comorbidities.diabetes { 3 } else { 0 }),
        (RiskFactorFamily::CoronaryArteryDisease, if comorbidities.cad { 3 } else { 0 }),
        (RiskFactorFamily::ChronicKidneyDisease, if comorbidities.ckd { 2 } else { 0 }),
        (RiskFactorFamily::Smoking, if record.risk_factors.smoking { 2 } else { 0 }),
        (RiskFactorFamily::BloodPressure, blood_pressure_points(bp_category)),
    ];

    candidates
        .into_iter()
        .filter(|(_, points)| *points > 0)
        .map(|(family, points)| RiskContribution { family, points })
        .collect()
}

/// Additive cardiovascular risk score
pub fn calculate_risk_score(record: &PatientRecord) -> u32 {
    score_contributions(record).iter().map(|c| c.points).sum()
}

/// Map a score onto its risk band
pub fn categorize_risk(score: u32) -> RiskCategory {
    RISK_BANDS
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map_or(RiskCategory::VeryHigh, |(_, category)| *category)
}

/// Score a record and band the result
pub fn assess_risk(record: &PatientRecord) -> RiskAssessment {
    let contributions = score_contributions(record);
    let score = contributions.iter().map(|c| c.points).sum();
    let category = categorize_risk(score);
    debug!(score, %category, "Calculated cardiovascular risk");

    RiskAssessment {
        score,
        category,
        severity: category.severity(),
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::blood_pressure::Severity;
    use crate::entities::patient::Comorbidities;

    /// Record with a chosen age, BMI (via 100 cm height) and BP
    fn record(age: u16, bmi: f64, systolic: u16, diastolic: u16) -> PatientRecord {
        PatientRecord {
            age,
            weight_kg: bmi,
            height_cm: 100.0,
            systolic,
            diastolic,
            ..PatientRecord::default()
        }
    }

    #[test]
    fn test_documented_high_risk_scenario() {
        let mut patient = record(70, 31.0, 150, 95);
        patient.comorbidities.diabetes = true;
        patient.risk_factors.smoking = true;

        let risk = assess_risk(&patient);
        assert_eq!(risk.score, 13);
        assert_eq!(risk.category, RiskCategory::VeryHigh);
        assert_eq!(risk.severity, Severity::High);
        assert_eq!(
            risk.contributions,
            vec![
                RiskContribution { family: RiskFactorFamily::Age, points: 3 },
                RiskContribution { family: RiskFactorFamily::Bmi, points: 2 },
                RiskContribution { family: RiskFactorFamily::Diabetes, points: 3 },
                RiskContribution { family: RiskFactorFamily::Smoking, points: 2 },
                RiskContribution { family: RiskFactorFamily::BloodPressure, points: 3 },
            ]
        );
    }

    #[test]
    fn test_documented_low_risk_scenario() {
        let risk = assess_risk(&record(30, 22.0, 115, 75));
        assert_eq!(risk.score, 0);
        assert_eq!(risk.category, RiskCategory::Low);
        assert!(risk.contributions.is_empty());
    }

    #[test]
    fn test_age_tiers_are_exclusive() {
        assert_eq!(age_points(45), 0);
        assert_eq!(age_points(46), 1);
        assert_eq!(age_points(55), 1);
        assert_eq!(age_points(56), 2);
        assert_eq!(age_points(65), 2);
        assert_eq!(age_points(66), 3);
    }

    #[test]
    fn test_bmi_tiers_are_inclusive() {
        assert_eq!(bmi_points(24.99), 0);
        assert_eq!(bmi_points(25.0), 1);
        assert_eq!(bmi_points(30.0), 2);
        assert_eq!(bmi_points(0.0), 0);
    }

    #[test]
    fn test_all_comorbidities_add_up() {
        let mut patient = record(30, 22.0, 115, 75);
        patient.comorbidities = Comorbidities {
            diabetes: true,
            cad: true,
            ckd: true,
            ..Comorbidities::default()
        };
        patient.risk_factors.smoking = true;
        assert_eq!(calculate_risk_score(&patient), 10);
    }

    #[test]
    fn test_crisis_reading_scores_five() {
        assert_eq!(calculate_risk_score(&record(30, 22.0, 190, 130)), 5);
        assert_eq!(calculate_risk_score(&record(30, 22.0, 135, 75)), 2);
    }

    #[test]
    fn test_score_monotonic_in_age() {
        let mut previous = 0;
        for age in [30, 50, 60, 70, 90] {
            let score = calculate_risk_score(&record(age, 22.0, 115, 75));
            assert!(score >= previous, "score dropped at age {}", age);
            previous = score;
        }
    }

    #[test]
    fn test_score_monotonic_in_bp() {
        let mut previous = 0;
        for (systolic, diastolic) in [(115, 75), (125, 75), (135, 75), (150, 95), (185, 125)] {
            let score = calculate_risk_score(&record(50, 27.0, systolic, diastolic));
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_diastolic_in_stage1_band_outranks_stage2_systolic() {
        // Stage 1 diastolic rule is evaluated before Stage 2
        assert_eq!(calculate_risk_score(&record(30, 22.0, 150, 75)), 3);
        assert_eq!(calculate_risk_score(&record(30, 22.0, 150, 85)), 2);
    }

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(categorize_risk(0), RiskCategory::Low);
        assert_eq!(categorize_risk(3), RiskCategory::Low);
        assert_eq!(categorize_risk(4), RiskCategory::Moderate);
        assert_eq!(categorize_risk(7), RiskCategory::Moderate);
        assert_eq!(categorize_risk(8), RiskCategory::High);
        assert_eq!(categorize_risk(12), RiskCategory::High);
        assert_eq!(categorize_risk(13), RiskCategory::VeryHigh);
        assert_eq!(categorize_risk(40), RiskCategory::VeryHigh);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let mut patient = record(58, 28.0, 142, 88);
        patient.comorbidities.cad = true;
        assert_eq!(assess_risk(&patient), assess_risk(&patient));
    }
}
