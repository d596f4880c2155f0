//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// `password` holds the Argon2id PHC hash -- never serialize this row to an
/// API response directly; use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub id_users_roles: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub id_users_roles: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            username: user.username,
            email: user.email,
            id_users_roles: user.id_users_roles,
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: user.deleted_at,
        }
    }
}

/// Validated request payload for create and update, with the password still
/// in the clear. The handler hashes it before building [`CreateUser`] /
/// [`UpdateUser`].
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub id_users_roles: DbId,
}

/// Insert values for a new user. `password` is the Argon2id hash.
#[derive(Debug)]
pub struct CreateUser {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub id_users_roles: DbId,
}

/// Replacement values for an existing user. `password` is the Argon2id hash.
#[derive(Debug)]
pub struct UpdateUser {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub id_users_roles: DbId,
}
