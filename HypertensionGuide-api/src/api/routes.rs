use axum::{
    routing::{get, post},
    Extension, Router,
};
use hypertension_guide_domain::health::HealthServiceTrait;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::{assessment, drug_classes, health};
use crate::config::ApiConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router with the default services
pub fn create_app(config: &ApiConfig) -> Router {
    create_app_with_services(
        config,
        assessment::create_service(),
        health::create_health_service(),
    )
}

/// Create the application router around the given services
pub fn create_app_with_services(
    config: &ApiConfig,
    assessment_service: assessment::AssessmentService,
    health_service: Arc<dyn HealthServiceTrait + Send + Sync>,
) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route("/assessments", post(assessment::create_assessment))
        .route("/assessments/report", post(assessment::create_assessment_report))
        .route("/drug-classes", get(drug_classes::list_drug_classes))
        .route("/drug-classes/:name", get(drug_classes::get_drug_class))
        .with_state(assessment_service);

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(Arc::new(config.clone())));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .merge(configure_swagger_routes());

    debug!("Swagger UI merged");

    let app = app.layer(TraceLayer::new_for_http());

    let app = if config.cors_allow_any {
        debug!("Permissive CORS enabled");
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    health::initialize_server_start_time();

    app
}
