use std::sync::Arc;

use axum::{middleware::Next, response::Response};
use tracing::debug;

use crate::common::{ApiError, UserId};
use crate::domains::auth::JwtService;

/// Authenticated user information from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub is_admin: bool,
}

/// Per-request auth context stored in request extensions.
///
/// Always present after the middleware runs; `None` inside means the request
/// carried no valid token. Handlers that mutate state call `actor()`.
#[derive(Clone, Debug)]
pub struct AuthContext(pub Option<AuthUser>);

impl AuthContext {
    /// The acting user's id, or `AuthenticationRequired` for anonymous
    /// requests.
    pub fn actor(&self) -> Result<UserId, ApiError> {
        self.0
            .as_ref()
            .map(|user| user.user_id)
            .ok_or(ApiError::AuthenticationRequired)
    }
}

/// JWT authentication middleware
///
/// Extracts the token from the Authorization header, verifies it, and adds
/// an AuthContext to request extensions. An invalid or missing token does
/// not block the request (read endpoints are public); mutating handlers
/// enforce authentication via `AuthContext::actor`.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_user = extract_auth_user(&request, &jwt_service);

    if let Some(user) = &auth_user {
        debug!("Authenticated user: {} (admin: {})", user.user_id, user.is_admin);
    } else {
        debug!("No valid authentication token");
    }
    request.extensions_mut().insert(AuthContext(auth_user));

    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_auth_user(
    request: &axum::http::Request<axum::body::Body>,
    jwt_service: &JwtService,
) -> Option<AuthUser> {
    // Get Authorization header
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Extract token (handle both "Bearer <token>" and raw token)
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    // Verify token
    let claims = jwt_service.verify_token(token).ok()?;

    Some(AuthUser {
        user_id: UserId::from_raw(claims.user_id),
        is_admin: claims.is_admin,
    })
}
