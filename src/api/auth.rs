use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{info, warn};

use super::{ApiError, ApiResponse, AppState, MessageResponse};

// Per-session gate state. Clearing cookies resets all three keys, and with
// them the attempt counter.
const SESSION_AUTHENTICATED: &str = "authenticated";
const SESSION_LOGIN_ATTEMPTS: &str = "login_attempts";
const SESSION_BLOCKED_UNTIL: &str = "blocked_until";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Gate for every route except login/logout: the session must carry the
/// authenticated flag.
pub async fn require_session(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authenticated = session
        .get::<bool>(SESSION_AUTHENTICATED)
        .await?
        .unwrap_or(false);

    if authenticated {
        Ok(next.run(request).await)
    } else {
        Err(ApiError::Unauthorized(
            "Authentification requise".to_string(),
        ))
    }
}

/// POST /auth/login
///
/// Shared-secret comparison with per-session throttling: a blocked session
/// is rejected before the password is even looked at; the block clears only
/// by timer expiry, and a successful login resets the attempt counter.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let now = chrono::Local::now().timestamp();

    if let Some(blocked_until) = session.get::<i64>(SESSION_BLOCKED_UNTIL).await? {
        if blocked_until > now {
            return Err(ApiError::RateLimited {
                retry_after_seconds: (blocked_until - now) as u64,
            });
        }
    }

    if payload.password == state.config.auth.password {
        session.insert(SESSION_AUTHENTICATED, true).await?;
        session.remove::<u32>(SESSION_LOGIN_ATTEMPTS).await?;
        session.remove::<i64>(SESSION_BLOCKED_UNTIL).await?;

        info!("Login successful");
        return Ok(Json(ApiResponse::success(MessageResponse {
            message: "Connecté".to_string(),
        })));
    }

    let attempts = session
        .get::<u32>(SESSION_LOGIN_ATTEMPTS)
        .await?
        .unwrap_or(0)
        + 1;
    session.insert(SESSION_LOGIN_ATTEMPTS, attempts).await?;

    if attempts >= state.config.auth.max_attempts {
        let lockout = state.config.auth.lockout_seconds;
        session
            .insert(SESSION_BLOCKED_UNTIL, now + lockout as i64)
            .await?;

        warn!("Session blocked after {} failed login attempts", attempts);
        return Err(ApiError::RateLimited {
            retry_after_seconds: lockout,
        });
    }

    warn!("Failed login attempt {}/{}", attempts, state.config.auth.max_attempts);
    Err(ApiError::Unauthorized(format!(
        "Code incorrect. Tentative {}/{}",
        attempts, state.config.auth.max_attempts
    )))
}

/// POST /auth/logout
pub async fn logout(session: Session) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    session.flush().await?;
    Ok(Json(ApiResponse::success(MessageResponse {
        message: "Déconnecté".to_string(),
    })))
}
