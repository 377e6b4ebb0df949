use super::domain::User;
use super::service::UserService;
use crate::di::{HasContainer, Inject};
use crate::error::{DirectoryError, Result};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Path,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};

/// `GET /users/{id}` and `POST /users`.
pub fn router<S>() -> Router<S>
where
    S: HasContainer + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
        // `/users/` carries an empty id; answer it like any other bad id.
        .route("/users/", get(get_user_without_id))
}

pub async fn get_user(
    Inject(service): Inject<UserService>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<User>> {
    // An id that cannot even be decoded from the URL is just another bad id.
    let Path(id) = id.map_err(|e| {
        tracing::debug!(error = %e, "failed to extract user id");
        DirectoryError::InvalidId
    })?;
    service.get(&id).await.map(Json)
}

pub async fn get_user_without_id(Inject(service): Inject<UserService>) -> Result<Json<User>> {
    service.get("").await.map(Json)
}

pub async fn create_user(
    Inject(service): Inject<UserService>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let body = body.map_err(|e| {
        tracing::debug!(error = %e, "failed to read request body");
        DirectoryError::MalformedBody
    })?;
    let user = service.create_from_body(&body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
