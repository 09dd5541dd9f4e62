pub mod auth;
pub mod health;
pub mod user;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;

pub fn api_router(db: DatabaseConnection) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth/login", post(auth::login))
        // Users
        .route("/users", get(user::get_current_user))
        // Public: intentionally not behind the bearer-token gate
        .route("/users/find_by_email", get(user::find_by_email))
        .route("/users/:id", get(user::get_user))
        .with_state(db)
}
