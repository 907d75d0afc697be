use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ErrorBody;
use crate::domain::login::models::LoginCommand;
use crate::domain::login::models::LoginOutcome;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<(StatusCode, Json<LoginResponseData>), ApiError> {
    tracing::info!(
        username = %body.username,
        hashed_password_provided = !body.hashed_password.is_empty(),
        secure_word_provided = body.secure_word.is_some(),
        "Login attempt received"
    );

    if body.username.is_empty() || body.hashed_password.is_empty() {
        return Err(ApiError::BadRequest(
            ErrorBody::new("Invalid Credentials")
                .with_details("Username and password are required"),
        ));
    }

    let outcome = state
        .login_service
        .login(LoginCommand {
            username: body.username,
            hashed_password: body.hashed_password,
            secure_word: body.secure_word,
        })
        .await?;

    let response = match outcome {
        LoginOutcome::MfaPending => LoginResponseData {
            success: true,
            requires_mfa: true,
            token: None,
            message: "Multi-Factor Authentication Required".to_string(),
        },
        LoginOutcome::Complete(session) => LoginResponseData {
            success: true,
            requires_mfa: false,
            token: Some(session.token),
            message: "Login Successful".to_string(),
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub hashed_password: String,
    #[serde(default)]
    pub secure_word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub success: bool,
    pub requires_mfa: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub message: String,
}
