use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::SESSION_COOKIE;
use crate::error::{AuthError, ProtocolError};
use crate::session::interface::{AdvertoSession, Authenticator, Credentials};
use crate::transport::headers;
use crate::transport::http_client::{HttpTransport, RedirectMode};

/// Logs in against the site's auth endpoint.
///
/// The endpoint answers a correct form post with a `Set-Cookie` for the
/// session id. Redirects stay suppressed here so the cookie is read off the
/// first response instead of whatever page the site forwards to.
pub struct AdvertoAuth {
    config: Arc<Config>,
    transport: Arc<HttpTransport>,
}

impl AdvertoAuth {
    pub fn new(config: Arc<Config>, transport: Arc<HttpTransport>) -> Self {
        Self { config, transport }
    }
}

#[async_trait::async_trait]
impl Authenticator for AdvertoAuth {
    async fn login(&self, credentials: &Credentials) -> Result<AdvertoSession, AuthError> {
        debug!("Authenticating user: {}", credentials.username);

        let params = [
            ("username", credentials.username.clone()),
            ("password", credentials.password.clone()),
            ("rememberMe", "true".to_string()),
        ];

        let response = self
            .transport
            .post_form(
                &self.config.site.login_url,
                &headers::login(),
                &params,
                RedirectMode::Manual,
            )
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::BadCredentials);
        }
        if !status.is_success() && !status.is_redirection() {
            return Err(AuthError::Unexpected(status));
        }

        let ssid = HttpTransport::response_cookie(&response, SESSION_COOKIE)
            .ok_or(ProtocolError::MissingSessionCookie)?;

        info!("Session established for {}", credentials.username);
        Ok(AdvertoSession::new(ssid))
    }
}
