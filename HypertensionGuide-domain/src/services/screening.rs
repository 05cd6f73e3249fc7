use tracing::debug;

use crate::entities::patient::SecondaryHtnClues;
use crate::entities::screening::{EndocrineClue, RenalClue, ScreeningTrigger, SecondaryScreening};

/// Collect the variants whose flag is set, preserving order
fn matched<T: Copy>(flags: &[(bool, T)]) -> Vec<T> {
    flags
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, item)| *item)
        .collect()
}

/// Screen for secondary causes of hypertension.
///
/// Screening is recommended for resistant, early-onset or malignant
/// hypertension. Clue groups are reported independently of that decision.
pub fn screen_secondary_hypertension(clues: &SecondaryHtnClues) -> SecondaryScreening {
    let triggers = matched(&[
        (clues.resistant_htn, ScreeningTrigger::ResistantHypertension),
        (clues.early_onset, ScreeningTrigger::EarlyOnset),
        (clues.malignant_htn, ScreeningTrigger::MalignantHypertension),
    ]);
    let renal_clues = matched(&[
        (clues.abdominal_bruit, RenalClue::AbdominalBruit),
        (clues.asymmetric_kidneys, RenalClue::AsymmetricKidneys),
        (clues.elevated_creatinine, RenalClue::ElevatedCreatinine),
        (clues.abnormal_urinalysis, RenalClue::AbnormalUrinalysis),
    ]);
    let endocrine_clues = matched(&[
        (clues.hypokalemia, EndocrineClue::Hypokalemia),
        (clues.cushings_features, EndocrineClue::CushingsFeatures),
        (clues.pheo_triad, EndocrineClue::PheochromocytomaTriad),
    ]);

    let screening = SecondaryScreening {
        recommended: !triggers.is_empty(),
        triggers,
        acute_rise: clues.acute_rise,
        renal_clues,
        endocrine_clues,
    };
    debug!(
        recommended = screening.recommended,
        renal = screening.renal_clues.len(),
        endocrine = screening.endocrine_clues.len(),
        "Screened for secondary hypertension"
    );
    screening
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_clues_no_screening() {
        let screening = screen_secondary_hypertension(&SecondaryHtnClues::default());
        assert!(!screening.recommended);
        assert!(!screening.has_findings());
    }

    #[test]
    fn test_each_trigger_recommends_screening() {
        for clues in [
            SecondaryHtnClues { resistant_htn: true, ..Default::default() },
            SecondaryHtnClues { early_onset: true, ..Default::default() },
            SecondaryHtnClues { malignant_htn: true, ..Default::default() },
        ] {
            let screening = screen_secondary_hypertension(&clues);
            assert!(screening.recommended);
            assert_eq!(screening.triggers.len(), 1);
        }
    }

    #[test]
    fn test_acute_rise_alone_does_not_recommend() {
        let screening = screen_secondary_hypertension(&SecondaryHtnClues {
            acute_rise: true,
            ..Default::default()
        });
        assert!(!screening.recommended);
        assert!(screening.acute_rise);
        assert!(screening.has_findings());
    }

    #[test]
    fn test_clue_groups_are_independent() {
        let clues = SecondaryHtnClues {
            abdominal_bruit: true,
            abnormal_urinalysis: true,
            pheo_triad: true,
            ..Default::default()
        };
        let screening = screen_secondary_hypertension(&clues);
        assert!(!screening.recommended);
        assert_eq!(
            screening.renal_clues,
            vec![RenalClue::AbdominalBruit, RenalClue::AbnormalUrinalysis]
        );
        assert_eq!(screening.endocrine_clues, vec![EndocrineClue::PheochromocytomaTriad]);
    }
}
