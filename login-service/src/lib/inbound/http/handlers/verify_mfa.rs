use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ErrorBody;
use crate::domain::login::models::MfaCommand;
use crate::inbound::http::router::AppState;

pub async fn verify_mfa(
    State(state): State<AppState>,
    Json(body): Json<MfaRequestBody>,
) -> Result<(StatusCode, Json<MfaResponseData>), ApiError> {
    if body.username.is_empty() || body.code.is_empty() {
        return Err(ApiError::BadRequest(ErrorBody::new(
            "Missing required fields",
        )));
    }

    let session = state
        .login_service
        .verify_mfa(MfaCommand {
            username: body.username,
            code: body.code,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MfaResponseData {
            success: true,
            token: session.token,
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MfaRequestBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MfaResponseData {
    pub success: bool,
    pub token: String,
}
