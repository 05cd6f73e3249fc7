pub mod assessment;
pub mod classification;
pub mod knowledge;
pub mod medication;
pub mod monitoring;
pub mod report;
pub mod risk;
pub mod screening;
pub mod target;

// Domain services
// Each clinical rule set is a pure function over a PatientRecord;
// the assessment service runs them in dependency order.

// Re-export service traits and factory functions
pub use assessment::{
    assess_patient, create_default_assessment_service, AssessmentService,
    AssessmentServiceError, AssessmentServiceTrait,
};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use assessment::create_mock_assessment_service;
