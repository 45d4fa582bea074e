use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use super::error::{ApiError, ApiResult};
use crate::error::ReceiptError;
use crate::id::is_valid_id;
use crate::receipt::Receipt;
use crate::service::ReceiptService;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub health: &'static str,
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(body),
    )
        .into_response()
}

pub async fn health() -> Response {
    json_response(StatusCode::OK, HealthResponse { health: "ok" })
}

/// POST /v1/receipts/process
///
/// The body is decoded regardless of content type; `null` reaches the
/// service as a missing receipt.
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    body: Bytes,
) -> ApiResult<Response> {
    let receipt: Option<Receipt> =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let (response, result) = service.submit_detailed(receipt.as_ref())?;

    info!(id = %response.id, points = result.points, "Receipt processed");
    for contribution in &result.breakdown {
        debug!(
            id = %response.id,
            rule = contribution.rule.label(),
            points = contribution.points,
            "{}",
            contribution.description
        );
    }

    Ok(json_response(StatusCode::CREATED, response))
}

/// GET /v1/receipts/{id}/points
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult<Response> {
    if query.is_some_and(|q| !q.is_empty()) {
        return Err(ApiError::UnexpectedQuery);
    }
    if !is_valid_id(&id) {
        return Err(ReceiptError::invalid("id").into());
    }

    let response = service.lookup(&id)?;
    Ok(json_response(StatusCode::OK, response))
}
