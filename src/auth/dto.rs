use serde::Serialize;
use uuid::Uuid;

use crate::auth::repo_types::User;

/// Response returned after a successful registration.
///
/// `user` is the stored row: the submitted fields, password included and
/// unmodified, plus the assigned `id`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: User,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: &'static str,
    pub session_id: Uuid, // not stored anywhere
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
