// HypertensionGuide Domain
// This crate contains the clinical decision logic for the HypertensionGuide application

// Services that implement the clinical rules
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
