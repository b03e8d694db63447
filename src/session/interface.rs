use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::AuthError;

/// Login form inputs for the marketplace account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            json!({
                "username": self.username,
                "password": "****",
            })
        )
    }
}

/// An authenticated marketplace session. The site recognizes the caller by
/// the `ADVERTO_SSID` cookie alone, so the token is all that has to survive a
/// process restart.
#[derive(Debug, Clone)]
pub struct AdvertoSession {
    pub ssid: String,
    pub established_at: DateTime<Utc>,
}

impl AdvertoSession {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            established_at: Utc::now(),
        }
    }
}

impl fmt::Display for AdvertoSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            json!({
                "ssid": "****",
                "established_at": self.established_at.to_rfc3339(),
            })
        )
    }
}

#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AdvertoSession, AuthError>;
}
