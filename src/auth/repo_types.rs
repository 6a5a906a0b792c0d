use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String, // stored as submitted
    pub city: Option<String>,
}

/// Registration payload, written to the store as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// The four fields a login must match exactly.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}
