// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::entities::assessment::Assessment;
use crate::entities::patient::PatientRecord;
use crate::entities::treatment::DrugClassProfile;
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::{knowledge, AssessmentServiceError, AssessmentServiceTrait};

/// Mock implementation of the AssessmentServiceTrait for testing
///
/// Delegates to the real rules but counts calls and can be told to return a
/// canned report or to fail drug-class lookups.
#[derive(Debug, Default)]
pub struct MockAssessmentService {
    assess_calls: AtomicUsize,
    canned_report: Option<String>,
    should_fail_lookup: bool,
}

impl MockAssessmentService {
    /// Create a new mock assessment service
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return a fixed report body
    pub fn with_report(mut self, report: &str) -> Self {
        self.canned_report = Some(report.to_string());
        self
    }

    /// Configure the mock to fail every drug-class lookup
    pub fn with_lookup_failure(mut self) -> Self {
        self.should_fail_lookup = true;
        self
    }

    /// Number of times `assess` has been called
    pub fn assess_calls(&self) -> usize {
        self.assess_calls.load(Ordering::SeqCst)
    }
}

impl AssessmentServiceTrait for MockAssessmentService {
    fn assess(&self, record: &PatientRecord) -> Assessment {
        self.assess_calls.fetch_add(1, Ordering::SeqCst);
        crate::services::assess_patient(record)
    }

    fn compose_report(&self, assessment: &Assessment, generated_at: DateTime<Utc>) -> String {
        match &self.canned_report {
            Some(report) => report.clone(),
            None => crate::services::report::compose_report(assessment, generated_at),
        }
    }

    fn drug_classes(&self) -> Vec<&'static DrugClassProfile> {
        knowledge::drug_class_profiles().collect()
    }

    fn drug_class(&self, name: &str) -> Result<&'static DrugClassProfile, AssessmentServiceError> {
        if self.should_fail_lookup {
            return Err(AssessmentServiceError::UnknownDrugClass(name.to_string()));
        }
        knowledge::find_drug_class(name)
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Knowledge base component status
    knowledge_status: ComponentStatus,
    /// System status
    system_status: SystemStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            knowledge_status: ComponentStatus::Healthy,
            system_status: SystemStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with a partially loaded knowledge base
    pub fn with_degraded_knowledge_base(mut self) -> Self {
        self.knowledge_status = ComponentStatus::Degraded;
        self.system_status = SystemStatus::Degraded;
        self
    }

    /// Configure the mock with a missing knowledge base
    pub fn with_unhealthy_knowledge_base(mut self) -> Self {
        self.knowledge_status = ComponentStatus::Unhealthy;
        self.system_status = SystemStatus::Unhealthy;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components.insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "knowledge_base".to_string(),
            HealthComponent {
                status: self.knowledge_status.clone(),
                details: match self.knowledge_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => Some("Drug class knowledge table is incomplete".to_string()),
                    ComponentStatus::Unhealthy => Some("Classification rules are missing".to_string()),
                },
            },
        );

        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }

    async fn check_knowledge_base(&self) -> Result<bool, String> {
        match self.knowledge_status {
            ComponentStatus::Healthy => Ok(true),
            ComponentStatus::Degraded => Ok(false),
            ComponentStatus::Unhealthy => Err("Classification rules are missing".to_string()),
        }
    }
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> impl HealthServiceTrait {
    MockHealthService::new()
}
