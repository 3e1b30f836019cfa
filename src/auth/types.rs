//! Types for authentication requests and responses

use serde::{Deserialize, Serialize};

/// A user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Body of a login request
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a signup request. The repeated password stays client-side.
#[derive(Debug, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of login and signup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token, when the server issued one
    #[serde(default)]
    pub token: Option<String>,

    /// The authenticated user
    #[serde(default)]
    pub user: Option<User>,
}
