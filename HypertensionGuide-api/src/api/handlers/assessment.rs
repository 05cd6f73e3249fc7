use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use hypertension_guide_domain::services::{
    create_default_assessment_service, AssessmentServiceTrait,
};

use crate::entities::assessment::AssessmentResponse;
use crate::entities::common::ErrorResponse;
use crate::entities::patient::AssessmentRequest;

/// Service type for dependency injection
pub type AssessmentService = Arc<dyn AssessmentServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> AssessmentService {
    Arc::new(create_default_assessment_service())
}

/// Collapse validator output into the API error envelope.
/// `details` maps each failing field to its messages.
pub(crate) fn validation_failure(errors: &ValidationErrors) -> ErrorResponse {
    let mut fields: Vec<(&str, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field, messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let message = fields
        .iter()
        .flat_map(|(field, messages)| {
            messages.iter().map(move |m| match *field {
                // struct-level checks
                "__all__" => m.clone(),
                _ => format!("{}: {}", field, m),
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    let details = fields
        .into_iter()
        .map(|(field, messages)| (field.to_string(), serde_json::json!(messages)))
        .collect::<serde_json::Map<String, serde_json::Value>>();

    ErrorResponse::validation_error(&message, Some(details.into()))
}

/// Unwrap the JSON body, reporting malformed payloads in the error envelope
fn request_body(
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<AssessmentRequest, ErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            warn!("Rejected malformed request body: {}", rejection.body_text());
            Err(ErrorResponse::validation_error(&rejection.body_text(), None))
        }
    }
}

/// Evaluate a patient and return every derived result plus the text report
#[utoipa::path(
    post,
    path = "/api/v1/assessments",
    request_body = AssessmentRequest,
    responses(
        (status = 200, description = "Assessment completed", body = AssessmentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "assessment"
)]
#[instrument(skip(service, payload))]
pub async fn create_assessment(
    State(service): State<AssessmentService>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let request = request_body(payload)?;
    if let Err(errors) = request.validate() {
        warn!("Rejected assessment request: {}", errors);
        return Err(validation_failure(&errors));
    }

    let record = request.into_record();
    let assessment = service.assess(&record);
    let generated_at = Utc::now();
    let report = service.compose_report(&assessment, generated_at);

    let assessment_id = Uuid::new_v4();
    info!(
        %assessment_id,
        category = assessment.blood_pressure.category.label(),
        risk_score = assessment.risk.score,
        "Assessment completed"
    );

    let response = AssessmentResponse::from_assessment(assessment_id, generated_at, &assessment, report);
    Ok((StatusCode::OK, Json(response)))
}

/// Evaluate a patient and return only the plain-text report as a download
#[utoipa::path(
    post,
    path = "/api/v1/assessments/report",
    request_body = AssessmentRequest,
    responses(
        (status = 200, description = "Report generated", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "assessment"
)]
#[instrument(skip(service, payload))]
pub async fn create_assessment_report(
    State(service): State<AssessmentService>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let request = request_body(payload)?;
    if let Err(errors) = request.validate() {
        warn!("Rejected report request: {}", errors);
        return Err(validation_failure(&errors));
    }

    let record = request.into_record();
    let assessment = service.assess(&record);
    let report = service.compose_report(&assessment, Utc::now());
    info!(bytes = report.len(), "Report generated");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"hypertension_report.txt\"",
            ),
        ],
        report,
    ))
}
