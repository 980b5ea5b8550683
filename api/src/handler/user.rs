use crate::{extractor::AuthorizedUser, model::user::UserResponse};
use axum::Json;

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(UserResponse::from(user.user))
}
