use crate::{
    api::handlers::{Reply, reject},
    store::CredentialStore,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct UserRegister {
    username: String,
    password: String,
}

// Keep passwords out of spans and logs
impl fmt::Debug for UserRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegister")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/register",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration succeeded", body = Reply, content_type = "application/json"),
        (status = 400, description = "User already exists, or the payload is missing or malformed", body = Reply, content_type = "application/json"),
    ),
    tag= "register"
)]
// axum handler for register
#[instrument(skip(store))]
pub async fn register(
    store: Extension<CredentialStore>,
    payload: Option<Json<UserRegister>>,
) -> impl IntoResponse {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (StatusCode::BAD_REQUEST, Json(Reply::new("missing payload")));
        }
    };

    debug!("user: {:?}", user);

    match store
        .register(user.username, SecretString::from(user.password))
        .await
    {
        Ok(()) => (
            StatusCode::CREATED,
            Json(Reply::new("registration succeeded")),
        ),
        Err(error) => {
            error!("Registration rejected: {error}");

            reject(&error)
        }
    }
}
