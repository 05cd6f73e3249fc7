use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Assessment endpoints
        crate::api::handlers::assessment::create_assessment,
        crate::api::handlers::assessment::create_assessment_report,

        // Drug class reference
        crate::api::handlers::drug_classes::list_drug_classes,
        crate::api::handlers::drug_classes::get_drug_class,
    ),
    components(
        schemas(
            // Request
            crate::entities::patient::AssessmentRequest,
            hypertension_guide_domain::entities::patient::Sex,
            hypertension_guide_domain::entities::patient::Comorbidities,
            hypertension_guide_domain::entities::patient::RiskFactors,
            hypertension_guide_domain::entities::patient::SecondaryHtnClues,
            hypertension_guide_domain::entities::patient::FamilyHistory,

            // Assessment result
            crate::entities::assessment::AssessmentResponse,
            crate::entities::assessment::PublicBloodPressure,
            crate::entities::assessment::PublicRisk,
            crate::entities::assessment::PublicRiskContribution,
            crate::entities::assessment::PublicTarget,
            crate::entities::assessment::PublicTreatment,
            crate::entities::assessment::PublicMedicationRecommendation,
            crate::entities::assessment::PublicScreening,
            crate::entities::assessment::PublicClinicalClue,
            crate::entities::assessment::PublicMonitoring,
            crate::entities::assessment::PublicFollowUp,

            // Drug classes
            crate::entities::drug_class::PublicDrugClass,
            crate::entities::drug_class::PublicDrugDose,

            // Errors
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "assessment", description = "Hypertension assessment and report generation"),
        (name = "drug_classes", description = "Antihypertensive drug class reference")
    ),
    info(
        title = "HypertensionGuide API",
        version = "0.1.0",
        description = "Clinical decision support for hypertension: classification, risk scoring, treatment and follow-up",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
