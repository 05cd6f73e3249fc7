pub mod assessment;
pub mod drug_classes;
pub mod health;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use assessment::{create_assessment, create_assessment_report};
pub use drug_classes::{get_drug_class, list_drug_classes};
pub use health::health_check;
