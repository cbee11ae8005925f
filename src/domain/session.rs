// src/domain/session.rs
use serde::{Deserialize, Serialize};

/// Authenticated identity as returned by the identity endpoints and mirrored
/// into local storage. An absent identity means "not signed in"; the email is
/// only ever carried alongside a username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(username: impl Into<String>, email: Option<String>) -> Self {
        Self {
            username: username.into(),
            email,
        }
    }
}
