use crate::auth::Claims;
use crate::models::user::{self, Entity as User};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::*;
use serde::Deserialize;
use serde_json::json;

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

fn store_error(e: DbErr) -> Response {
    tracing::error!("User lookup failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
        .into_response()
}

/// Returns the caller's own record, resolved from the bearer token.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Current user"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Token subject no longer exists")
    )
)]
pub async fn get_current_user(
    claims: Claims,
    State(db): State<DatabaseConnection>,
) -> impl IntoResponse {
    match User::find()
        .filter(user::Column::Username.eq(&claims.sub))
        .one(&db)
        .await
    {
        Ok(Some(u)) => (StatusCode::OK, Json(u)).into_response(),
        Ok(None) => not_found("User not found"),
        Err(e) => store_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No user with this id")
    )
)]
pub async fn get_user(
    _claims: Claims,
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match User::find_by_id(id).one(&db).await {
        Ok(Some(u)) => (StatusCode::OK, Json(u)).into_response(),
        Ok(None) => not_found(&format!("Couldn't find User with 'id'={}", id)),
        Err(e) => store_error(e),
    }
}

#[derive(Deserialize)]
pub struct FindByEmailParams {
    email: String,
}

#[utoipa::path(
    get,
    path = "/api/users/find_by_email",
    params(
        ("email" = String, Query, description = "Email address to look up")
    ),
    responses(
        (status = 200, description = "User found"),
        (status = 404, description = "No user with this email")
    )
)]
pub async fn find_by_email(
    State(db): State<DatabaseConnection>,
    Query(params): Query<FindByEmailParams>,
) -> impl IntoResponse {
    // Find-first-or-none: an absent match is an ordinary empty result
    match User::find()
        .filter(user::Column::Email.eq(&params.email))
        .one(&db)
        .await
    {
        Ok(Some(u)) => (StatusCode::OK, Json(u)).into_response(),
        Ok(None) => not_found("User not found"),
        Err(e) => store_error(e),
    }
}
