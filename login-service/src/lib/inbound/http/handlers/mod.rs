use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::login::errors::ConsumeError;
use crate::domain::login::errors::LoginError;
use crate::domain::login::errors::MfaError;
use crate::domain::login::errors::SecureWordError;

pub mod get_secure_word;
pub mod login;
pub mod verify_mfa;

/// JSON error body shared by all endpoints: `{error, details?, attempts?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Consecutive MFA failures so far, on invalid-code responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            attempts: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }
}

/// API error taxonomy: validation (400), authentication (401),
/// rate limiting (429), unexpected (500).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(ErrorBody),
    Unauthorized(ErrorBody),
    TooManyRequests(ErrorBody),
    InternalServerError(ErrorBody),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(body) => (StatusCode::BAD_REQUEST, body),
            ApiError::Unauthorized(body) => (StatusCode::UNAUTHORIZED, body),
            ApiError::TooManyRequests(body) => (StatusCode::TOO_MANY_REQUESTS, body),
            ApiError::InternalServerError(body) => (StatusCode::INTERNAL_SERVER_ERROR, body),
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(
            ErrorBody::new("Server Error").with_details(e.to_string()),
        )
    }
}

impl From<SecureWordError> for ApiError {
    fn from(err: SecureWordError) -> Self {
        match err {
            SecureWordError::RateLimited => {
                ApiError::TooManyRequests(ErrorBody::new("Too many requests. Please wait."))
            }
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::UnknownUser(_) => ApiError::Unauthorized(
                ErrorBody::new("Authentication Failed").with_details("User does not exist"),
            ),
            LoginError::IncorrectPassword => ApiError::Unauthorized(
                ErrorBody::new("Invalid Credentials").with_details("Incorrect password"),
            ),
            LoginError::SecureWordRequired => ApiError::BadRequest(
                ErrorBody::new("Secure Word Required")
                    .with_details("This account requires a secure word to sign in"),
            ),
            LoginError::SecureWord(ConsumeError::NotFound) => ApiError::Unauthorized(
                ErrorBody::new("Invalid Secure Word")
                    .with_details("No secure word found for this user"),
            ),
            LoginError::SecureWord(ConsumeError::Expired) => ApiError::Unauthorized(
                ErrorBody::new("Secure Word Expired")
                    .with_details("Request a new secure word and try again"),
            ),
            LoginError::SecureWord(ConsumeError::Mismatch) => ApiError::Unauthorized(
                ErrorBody::new("Invalid Secure Word")
                    .with_details("Secure word does not match"),
            ),
        }
    }
}

impl From<MfaError> for ApiError {
    fn from(err: MfaError) -> Self {
        match err {
            MfaError::LockedOut { seconds_remaining } => {
                ApiError::TooManyRequests(ErrorBody::new(format!(
                    "Too many failed attempts. Account locked. Try again in {seconds_remaining} seconds."
                )))
            }
            MfaError::InvalidCode { attempts } => ApiError::Unauthorized(
                ErrorBody::new("Invalid MFA code").with_attempts(attempts),
            ),
        }
    }
}
