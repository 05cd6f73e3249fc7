// Domain entities and value objects
pub mod assessment;
pub mod blood_pressure;
pub mod monitoring;
pub mod patient;
pub mod risk;
pub mod screening;
pub mod treatment;

// Re-export common types for easier imports
pub use assessment::Assessment;
pub use blood_pressure::{BloodPressureCategory, BloodPressureClassification, Severity};
pub use monitoring::{FollowUp, MonitoringSchedule, ScheduleKind};
pub use patient::{
    BmiCategory, Comorbidities, FamilyHistory, PatientRecord, RiskFactors, SecondaryHtnClues, Sex,
};
pub use risk::{RiskAssessment, RiskCategory, RiskContribution, RiskFactorFamily};
pub use screening::{EndocrineClue, RenalClue, ScreeningTrigger, SecondaryScreening};
pub use treatment::{
    DrugClass, DrugClassProfile, DrugDose, FirstLinePreference, MedicationPlan,
    MedicationRecommendation, TargetBloodPressure, TargetRationale, TreatmentApproach,
};
