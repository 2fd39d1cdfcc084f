use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        jwt::{AuthUser, JwtKeys},
        password,
    },
    errors::ApiError,
    state::AppState,
    users::{
        dto::{AuthResponse, LoginRequest, RegisterRequest},
        store::{StoreError, User},
        validate,
    },
};

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Json(mut payload) = payload.map_err(|rej| ApiError::BadRequest(rej.to_string()))?;
    payload.email = payload.email.trim().to_lowercase();

    let violations = validate::registration_errors(&payload);
    if !violations.is_empty() {
        warn!(count = violations.len(), "registration payload rejected");
        return Err(ApiError::Validation(violations));
    }

    let hashed = password::hash(&payload.password)?;
    let user = state
        .store
        .create(payload.name.trim(), &payload.email, &hashed)
        .await
        .map_err(|e| {
            if matches!(e, StoreError::DuplicateEmail) {
                warn!(email = %payload.email, "email already registered");
            }
            ApiError::from(e)
        })?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((StatusCode::CREATED, Json(AuthResponse { user, token })))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(mut payload) = payload.map_err(|rej| ApiError::BadRequest(rej.to_string()))?;
    payload.email = payload.email.trim().to_lowercase();

    // Unknown email and wrong password answer identically.
    let user = match state.store.find_by_email(&payload.email).await? {
        Some(user) => user,
        None => {
            warn!(email = %payload.email, "login with unknown email");
            return Err(ApiError::Auth("Invalid login or password".to_string()));
        }
    };

    if !password::matches(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(ApiError::Auth("Invalid login or password".to_string()));
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(AuthResponse { user, token }))
}

#[instrument(skip(state))]
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = state.store.find_by_id(user_id).await?.ok_or_else(|| {
        warn!(user_id = %user_id, "token subject no longer resolves");
        ApiError::BadRequest("Bad request".to_string())
    })?;
    Ok(Json(user))
}
