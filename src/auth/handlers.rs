use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginResponse, LogoutResponse, RegisterResponse, UsersResponse},
        extractors::BearerToken,
        repo_types::{Credentials, NewUser},
        services::{is_valid_email, new_session_id},
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register))
        .route("/login/", post(login))
        .route("/logout/", post(logout))
}

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users/", get(list_users))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<RegisterResponse>, ApiError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email"));
    }

    if state.users.find_by_email(&payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict);
    }

    let user = state.users.create(&payload).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(RegisterResponse {
        message: "User registered successfully",
        user,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email"));
    }

    let Some(user) = state.users.find_by_credentials(&payload).await? else {
        warn!(email = %payload.email, "login invalid credentials");
        return Err(ApiError::Unauthorized("Invalid credentials"));
    };

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful",
        session_id: new_session_id(),
    }))
}

#[instrument(skip_all)]
pub async fn logout(BearerToken(token): BearerToken) -> Json<LogoutResponse> {
    // No session store: there is nothing to revoke.
    debug!(token_len = token.len(), "logout acknowledged");
    Json(LogoutResponse {
        message: "Logout successful",
    })
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(UsersResponse { users }))
}
