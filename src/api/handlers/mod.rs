pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

// common types and helpers for the handlers
use crate::store::CredentialError;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope shared by every credential endpoint.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Reply {
    message: String,
}

impl Reply {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

// One place maps a store error to its wire status; the enum's Display
// strings are the response messages.
pub(crate) fn reject(error: &CredentialError) -> (StatusCode, Json<Reply>) {
    let status = match error {
        CredentialError::AlreadyExists => StatusCode::BAD_REQUEST,
        CredentialError::InvalidCredentials => StatusCode::UNAUTHORIZED,
    };

    (status, Json(Reply::new(&error.to_string())))
}
