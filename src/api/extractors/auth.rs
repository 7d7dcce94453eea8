use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts},
};
use crate::state::AppState;
use crate::domain::models::auth::Claims;
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::Span;

/// The authenticated caller, passed explicitly into every handler.
#[derive(Debug, Clone)]
pub struct Caller {
    pub id: String,
    pub role: String,
}

pub struct AuthUser(pub Caller);

/// Role guard: rejects with 403 unless the caller is an instructor.
pub struct InstructorUser(pub Caller);

fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(cookies) = parts.extensions.get::<Cookies>()
        && let Some(cookie) = cookies.get("access_token") {
        return Some(cookie.value().to_string());
    }

    parts.headers.get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let decoding_key = DecodingKey::from_secret(app_state.config.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(&token, &decoding_key, &validation)
            .map_err(|_| AppError::Unauthorized)?;

        let caller = Caller {
            id: token_data.claims.sub,
            role: token_data.claims.role,
        };

        Span::current().record("user_id", &caller.id);

        Ok(AuthUser(caller))
    }
}

impl<S> FromRequestParts<S> for InstructorUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(caller) = AuthUser::from_request_parts(parts, state).await?;

        if caller.role != "Instructor" {
            return Err(AppError::Forbidden("This route is restricted to instructors".into()));
        }

        Ok(InstructorUser(caller))
    }
}
