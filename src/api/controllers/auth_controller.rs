use crate::api::extractors::AuthUser;
use crate::api::response::{AuthUserResponse, UserIdentity};
use axum::Json;

/// Echo back the identity carried by a valid bearer token
pub async fn current_user(user: AuthUser) -> Json<AuthUserResponse> {
    Json(AuthUserResponse {
        user: UserIdentity { id: user.id },
    })
}
