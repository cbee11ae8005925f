// src/integrations/identity/client.rs
//
// Identity endpoints. Thin calls to an external provider: this layer only
// consumes the returned identity fields and never verifies credentials
// itself.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::Identity;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: String,
}

pub struct IdentityClient {
    base_url: String,
    http_client: Client,
}

impl IdentityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: Client::new(),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> AppResult<Identity> {
        self.post("login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Identity> {
        self.post("register", request).await
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<Identity> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.http_client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorPayload>()
                .await
                .map(|p| p.message)
                .unwrap_or_else(|_| "no error detail".to_string());
            return Err(AppError::Other(format!(
                "identity endpoint '{}' returned {}: {}",
                path, status, message
            )));
        }

        let identity = response.json::<Identity>().await?;
        Ok(identity)
    }
}
