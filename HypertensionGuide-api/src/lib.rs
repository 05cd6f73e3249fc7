// HypertensionGuide-api lib.rs
//
// HTTP surface for the HypertensionGuide clinical decision core.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
