// Public entities for the HypertensionGuide API
// These are the wire shapes; the clinical types live in the domain crate

// Assessment request payload
pub mod patient;

// Assessment results
pub mod assessment;

// Drug class reference data
pub mod drug_class;

// Error envelope shared by all handlers
pub mod common;
