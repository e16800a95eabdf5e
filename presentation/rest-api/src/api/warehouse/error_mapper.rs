use poem::http::StatusCode;
use poem_openapi::payload::Json;
use tracing::error;

use business::domain::warehouse::errors::WarehouseError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WarehouseError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WarehouseError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "warehouse.not_found")
            }
            WarehouseError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "warehouse.product_not_found",
            ),
            WarehouseError::Repository(source) => {
                error!(error = %source, "Request failed in persistence layer");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "repository.persistence",
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
