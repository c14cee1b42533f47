use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::WebError;
use crate::middleware::auth::{Pins, Role};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub pin: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub role: Role,
}

/// Exchange a station PIN for its role. The PIN itself is then sent as a
/// bearer token on mutating requests.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "PIN accepted", body = LoginResponse),
        (status = 401, description = "Unknown PIN")
    ),
    tag = "auth"
)]
pub async fn login(
    State(pins): State<Pins>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, WebError> {
    let role = pins
        .role_for(request.pin.trim())
        .ok_or(WebError::Unauthorized)?;

    Ok(Json(LoginResponse { role }))
}
