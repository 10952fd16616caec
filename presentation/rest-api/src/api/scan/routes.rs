use std::sync::Arc;

use poem::error::MethodNotAllowedError;
use poem::http::StatusCode;
use poem::web::{Data, Json};
use poem::{Body, IntoResponse, Response, handler};

use business::domain::card::errors::CardError;
use business::domain::card::use_cases::scan::{ScanCardParams, ScanCardUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scan::dto::{ScanCardRequest, ScanCardResponse};

/// Handles `POST /scan-card`.
///
/// The body is read manually so that a payload the decoder cannot handle
/// falls into the catch-all 500 path with the decoder's message, matching
/// the scan contract rather than the framework's 400.
#[handler]
pub async fn scan_card(use_case: Data<&Arc<dyn ScanCardUseCase>>, body: Body) -> Response {
    let bytes = match body.into_bytes().await {
        Ok(bytes) => bytes,
        Err(err) => return failure(CardError::unexpected(err.to_string())),
    };

    let request: ScanCardRequest = match serde_json::from_slice(&bytes) {
        Ok(request) => request,
        Err(err) => return failure(CardError::unexpected(err.to_string())),
    };

    let params = ScanCardParams {
        image: request.image.unwrap_or_default(),
        mime_type: request.mime_type.unwrap_or_default(),
    };

    match use_case.0.execute(params).await {
        Ok(record) => Json(ScanCardResponse {
            success: true,
            data: record,
        })
        .into_response(),
        Err(err) => failure(err),
    }
}

/// Maps a rejected verb on a routed path to the contract's 405 body.
pub async fn method_not_allowed(_: MethodNotAllowedError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::warn!("Scan error: method not allowed");
    let body = ErrorResponse::new("Method not allowed. Use POST.");
    (StatusCode::METHOD_NOT_ALLOWED, Json(body))
}

fn failure(err: CardError) -> Response {
    tracing::error!("Scan error: {}", err);
    let (status, body) = err.into_error_response();
    (status, body).into_response()
}
