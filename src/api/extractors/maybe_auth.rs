use axum::{
    extract::{FromRequestParts, FromRef},
    http::{request::Parts, StatusCode},
};
use crate::state::AppState;
use crate::domain::models::user::User;
use std::sync::Arc;
use tower_cookies::Cookies;

/// Optional authentication. Guests get `None` instead of a rejection, so a
/// handler can decide for itself what an unauthenticated request means.
pub struct MaybeAuthUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(cookies) = parts.extensions.get::<Cookies>() else {
            return Ok(MaybeAuthUser(None));
        };

        let access_token = match cookies.get("access_token") {
            Some(cookie) => cookie.value().to_string(),
            None => return Ok(MaybeAuthUser(None)),
        };

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        // Invalid token (expired, bad signature) -> treat as guest
        let claims = match app_state.auth_service.verify_token(&access_token) {
            Ok(claims) => claims,
            Err(_) => return Ok(MaybeAuthUser(None)),
        };

        let user = User {
            id: claims.sub,
            email: claims.email,
            password_hash: "".to_string(),
            created_at: chrono::Utc::now(),
        };

        Ok(MaybeAuthUser(Some(user)))
    }
}
