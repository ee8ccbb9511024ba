//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - invalid body, or the operation failed (details are logged server-side)",
    content_type = "application/json",
    example = json!({
        "code": 1012,
        "error": "REQUEST_REJECTED",
        "message": "The request could not be processed"
    })
)]
pub struct RequestRejectedResponse(pub ErrorResponse);
