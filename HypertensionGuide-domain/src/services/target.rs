use crate::entities::patient::PatientRecord;
use crate::entities::treatment::{TargetBloodPressure, TargetRationale};

/// Determine the BP goal. Diabetes/CKD take precedence over age.
pub fn resolve_target(record: &PatientRecord) -> TargetBloodPressure {
    let comorbidities = &record.comorbidities;
    if comorbidities.diabetes || comorbidities.ckd {
        TargetBloodPressure {
            systolic: 130,
            diastolic: 80,
            rationale: TargetRationale::Intensive,
        }
    } else if record.age >= 65 {
        TargetBloodPressure {
            systolic: 140,
            diastolic: 90,
            rationale: TargetRationale::StandardElderly,
        }
    } else {
        TargetBloodPressure {
            systolic: 130,
            diastolic: 80,
            rationale: TargetRationale::StandardAdult,
        }
    }
}
