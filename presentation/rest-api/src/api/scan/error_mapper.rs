use poem::http::StatusCode;
use poem::web::Json;

use business::domain::card::errors::CardError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CardError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            CardError::MissingInput => StatusCode::BAD_REQUEST,
            CardError::UpstreamStatus(_)
            | CardError::EmptyResponse
            | CardError::UnparsableResponse
            | CardError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}
