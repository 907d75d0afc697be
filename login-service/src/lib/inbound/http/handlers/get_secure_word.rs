use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ErrorBody;
use crate::inbound::http::router::AppState;

pub async fn get_secure_word(
    State(state): State<AppState>,
    Json(body): Json<SecureWordRequestBody>,
) -> Result<(StatusCode, Json<SecureWordResponseData>), ApiError> {
    if body.username.is_empty() {
        return Err(ApiError::BadRequest(ErrorBody::new("Username is required")));
    }

    let issued = state.login_service.issue_secure_word(&body.username).await?;

    Ok((
        StatusCode::OK,
        Json(SecureWordResponseData {
            secure_word: issued.word,
            issued_at: issued.issued_at,
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SecureWordRequestBody {
    // Missing fields deserialize as empty strings so the pipeline's own
    // validation answers with the documented 400, not a framework 422.
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureWordResponseData {
    pub secure_word: String,
    pub issued_at: i64,
}
