//! Domain layer health check functionality
//! This module provides health check services for the application

use async_trait::async_trait;
use std::collections::HashMap;

use crate::entities::treatment::DrugClass;
use crate::services::{classification, knowledge};

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced capability
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Knowledge base status: Ok(true) when complete, Ok(false) when an entry is missing
    async fn check_knowledge_base(&self) -> Result<bool, String>;
}

/// Report on the compiled-in rule and reference tables.
///
/// Both tables are static, so a running binary always reports Ok(true).
/// Ok(false) and Err only surface if a build ships a truncated table.
pub async fn check_knowledge_base() -> Result<bool, String> {
    if classification::BLOOD_PRESSURE_RULES.is_empty() {
        return Err("Blood pressure classification rules are missing".to_string());
    }

    let loaded = knowledge::drug_class_profiles().count();
    Ok(loaded == DrugClass::ALL.len())
}

/// Get overall system health
pub async fn get_system_health() -> SystemHealth {
    let knowledge_component = match check_knowledge_base().await {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Drug class knowledge table is incomplete".to_string()),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    let overall_status = match knowledge_component.status {
        ComponentStatus::Unhealthy => SystemStatus::Unhealthy,
        ComponentStatus::Degraded => SystemStatus::Degraded,
        ComponentStatus::Healthy => SystemStatus::Healthy,
    };

    SystemHealth {
        status: overall_status,
        components: vec![("knowledge_base".to_string(), knowledge_component)]
            .into_iter()
            .collect(),
    }
}
