use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::auth::login,
        api::user::get_current_user,
        api::user::get_user,
        api::user::find_by_email,
    ),
    tags(
        (name = "userdir", description = "User directory API")
    )
)]
pub struct ApiDoc;
