//! Handlers for the `/auth` resource: registration, login, token refresh,
//! session introspection, logout, and account administration.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use flicks_core::error::CoreError;
use flicks_core::roles::{ROLE_ADMIN, ROLE_USER};
use flicks_core::types::DbId;
use flicks_db::models::session::CreateSession;
use flicks_db::models::user::{CreateUser, UserResponse};
use flicks_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_length, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Password length bounds enforced at registration.
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 72;

/// Display name length bounds.
const MIN_FULL_NAME_LENGTH: usize = 2;
const MAX_FULL_NAME_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Request body for `POST /auth/promote`.
#[derive(Debug, Deserialize)]
pub struct PromoteRequest {
    pub user_id: DbId,
}

/// Successful authentication response returned by register, login, refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create an account with the `user` role and log it in immediately.
/// Returns 201 with access and refresh tokens.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let full_name = input.full_name.trim();
    let name_len = full_name.chars().count();
    if !(MIN_FULL_NAME_LENGTH..=MAX_FULL_NAME_LENGTH).contains(&name_len) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "full_name must be between {MIN_FULL_NAME_LENGTH} and {MAX_FULL_NAME_LENGTH} characters"
        ))));
    }

    if !is_plausible_email(&input.email) {
        return Err(AppError::Core(CoreError::Validation(
            "email is not a valid address".into(),
        )));
    }

    validate_password_length(&input.password, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Friendlier than waiting for the unique-constraint violation; the
    // constraint still backstops a racing duplicate with the same 409.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: Some(full_name.to_string()),
            email: input.email,
            password_hash: hashed,
            role: ROLE_USER.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let response = create_auth_response(&state, &UserResponse::from(&user)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /auth/login
///
/// Authenticate with email + password. Unknown email and wrong password are
/// indistinguishable to the client.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let response = create_auth_response(&state, &UserResponse::from(&user)).await?;
    Ok(Json(response))
}

/// POST /auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// session is revoked (token rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let response = create_auth_response(&state, &UserResponse::from(&user)).await?;
    Ok(Json(response))
}

/// GET /auth/session
///
/// Return the authenticated user behind the presented access token.
pub async fn session(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /auth/promote
///
/// Grant the `admin` role to a user. Admin only.
pub async fn promote(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<PromoteRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    if user.role == ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Conflict(
            "User is already an admin".into(),
        )));
    }

    let promoted = UserRepo::set_role(&state.pool, user.id, ROLE_ADMIN)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.id,
        }))?;

    tracing::info!(
        user_id = promoted.id,
        admin_id = admin.user_id,
        "User promoted to admin",
    );

    Ok(Json(UserResponse::from(&promoted)))
}

/// DELETE /auth/users/{id}
///
/// Delete an account. A user may delete their own account; deleting anyone
/// else's requires the admin role. Sessions and favorites cascade.
pub async fn delete_account(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if auth_user.user_id != id && auth_user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only delete your own account".into(),
        )));
    }

    if !UserRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id,
        }));
    }

    tracing::info!(user_id = id, deleted_by = auth_user.user_id, "Account deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue access + refresh tokens, persist the session row, and build the
/// response payload.
async fn create_auth_response(
    state: &AppState,
    user: &UserResponse,
) -> AppResult<AuthResponse> {
    let access_token = state
        .config
        .jwt
        .issue_access_token(user.id, &user.role)
        .map_err(|e| AppError::InternalError(format!("Token issuance error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: user.clone(),
    })
}

/// Cheap plausibility check: one `@`, non-empty local part, dotted domain.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
