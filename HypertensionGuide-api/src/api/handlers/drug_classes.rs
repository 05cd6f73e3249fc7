use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use tracing::{debug, info, instrument};

use hypertension_guide_domain::services::AssessmentServiceError;

use super::assessment::AssessmentService;
use crate::entities::common::ErrorResponse;
use crate::entities::drug_class::PublicDrugClass;

/// List the antihypertensive knowledge table
#[utoipa::path(
    get,
    path = "/api/v1/drug-classes",
    responses(
        (status = 200, description = "All drug classes in table order", body = [PublicDrugClass]),
    ),
    tag = "drug_classes"
)]
#[instrument(skip(service))]
pub async fn list_drug_classes(State(service): State<AssessmentService>) -> impl IntoResponse {
    let classes: Vec<PublicDrugClass> = service
        .drug_classes()
        .into_iter()
        .map(PublicDrugClass::from)
        .collect();
    debug!("Returning {} drug classes", classes.len());
    Json(classes)
}

/// Fetch one drug class by name, key or common abbreviation
#[utoipa::path(
    get,
    path = "/api/v1/drug-classes/{name}",
    params(
        ("name" = String, Path, description = "Drug class name, key or abbreviation (e.g. \"ccb\")")
    ),
    responses(
        (status = 200, description = "Drug class found", body = PublicDrugClass),
        (status = 404, description = "Unknown drug class", body = ErrorResponse),
    ),
    tag = "drug_classes"
)]
#[instrument(skip(service))]
pub async fn get_drug_class(
    State(service): State<AssessmentService>,
    Path(name): Path<String>,
) -> Result<Json<PublicDrugClass>, ErrorResponse> {
    match service.drug_class(&name) {
        Ok(profile) => Ok(Json(PublicDrugClass::from(profile))),
        Err(AssessmentServiceError::UnknownDrugClass(_)) => {
            info!("Drug class not found: {}", name);
            Err(ErrorResponse::not_found("drug class"))
        }
    }
}
