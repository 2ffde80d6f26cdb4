//! Authentication middleware
//!
//! Verifies bearer JWTs issued by the identity service. The middleware never
//! rejects: a valid token attaches an [`AuthUser`] to the request, an invalid
//! one attaches a [`RejectedToken`], a missing one leaves the request
//! anonymous. Handlers state their own requirement through [`CurrentUser`]
//! (required, 401 on a rejected token) or [`MaybeUser`] (optional, a
//! rejected token counts as anonymous). Public routes ignore both.

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::AppState;

/// Authenticated user information extracted from JWT
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Decode and validate an HS256 token
pub fn decode_token(token: &str, secret: &str) -> Result<AuthUser, AppError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid user ID in token".to_string()))?;

    Ok(AuthUser { user_id })
}

/// Attach the bearer token's user, if any, to the request
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(TypedHeader(Authorization(bearer))) = bearer {
        match decode_token(bearer.token(), &state.config.jwt.secret) {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid bearer token");
                request
                    .extensions_mut()
                    .insert(RejectedToken(e.public_message()));
            }
        }
    }

    next.run(request).await
}

/// Why a bearer token on the request failed verification
#[derive(Clone, Debug)]
pub struct RejectedToken(pub String);

/// Extractor for an authenticated user.
/// Use this in handlers that require a login.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(CurrentUser(user.clone()));
        }

        let message = parts
            .extensions
            .get::<RejectedToken>()
            .map(|rejected| rejected.0.clone())
            .unwrap_or_else(|| "Authentication required".to_string());
        Err(AppError::Unauthorized(message))
    }
}

/// Extractor for an optional user; anonymous requests yield `None`
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<AuthUser>);

impl MaybeUser {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.as_ref().map(|u| u.user_id)
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<AuthUser>().cloned()))
    }
}
