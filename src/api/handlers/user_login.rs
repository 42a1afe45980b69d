use crate::{
    api::handlers::{Reply, reject},
    store::CredentialStore,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct UserLogin {
    username: String,
    password: String,
}

// Keep passwords out of spans and logs
impl fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Authentication succeeded", body = Reply, content_type = "application/json"),
        (status = 400, description = "Payload is missing or malformed", body = Reply, content_type = "application/json"),
        (status = 401, description = "Unknown username or wrong password", body = Reply, content_type = "application/json"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip(store))]
pub async fn login(
    store: Extension<CredentialStore>,
    payload: Option<Json<UserLogin>>,
) -> impl IntoResponse {
    let user: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (StatusCode::BAD_REQUEST, Json(Reply::new("missing payload")));
        }
    };

    debug!("user: {:?}", user);

    match store.authenticate(&user.username, &user.password).await {
        Ok(()) => {
            debug!("Login successful");

            (
                StatusCode::OK,
                Json(Reply::new("authentication succeeded")),
            )
        }
        Err(error) => {
            debug!("Unauthorized");

            reject(&error)
        }
    }
}
