use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tokio::sync::RwLock;
use tracing::info;

use crate::application::models::ad::{ActiveListing, AdDraft};
use crate::application::services::listings::ListingManager;
use crate::application::services::publisher::AdPublisher;
use crate::application::services::uploader::ImageUploader;
use crate::config::Config;
use crate::constants::SESSION_COOKIE;
use crate::error::ClientError;
use crate::scrape::scraper::Scraper;
use crate::session::auth::AdvertoAuth;
use crate::session::interface::{AdvertoSession, Authenticator, Credentials};
use crate::transport::http_client::HttpTransport;

/// Facade over the whole client: one authenticated session plus the publish
/// and listing services behind it.
///
/// The site silently expires sessions; any operation that runs into that is
/// retried exactly once after a fresh login, provided the client was built
/// with credentials. A client resumed from a bare session token cannot
/// recover and surfaces `SessionExpired` instead.
pub struct AdvertoClient {
    config: Arc<Config>,
    transport: Arc<HttpTransport>,
    auth: AdvertoAuth,
    credentials: Option<Credentials>,
    session: RwLock<AdvertoSession>,
    publisher: AdPublisher,
    listings: ListingManager,
}

impl AdvertoClient {
    /// Logs in and keeps the credentials for session-expiry recovery.
    pub async fn login(config: Config, credentials: Credentials) -> Result<Self, ClientError> {
        let config = Arc::new(config);
        let transport = Arc::new(HttpTransport::new(Duration::from_secs(
            config.http.timeout_secs,
        ))?);
        let auth = AdvertoAuth::new(Arc::clone(&config), Arc::clone(&transport));

        let session = auth.login(&credentials).await?;
        seed_session_cookies(&transport, &config, &session.ssid);

        Ok(Self::assemble(
            config,
            transport,
            auth,
            Some(credentials),
            session,
        ))
    }

    /// Resumes a saved session from its token alone. No credentials are
    /// held, so an expired session is surfaced, not recovered.
    pub fn with_session(config: Config, ssid: impl Into<String>) -> Result<Self, ClientError> {
        let config = Arc::new(config);
        let transport = Arc::new(HttpTransport::new(Duration::from_secs(
            config.http.timeout_secs,
        ))?);
        let auth = AdvertoAuth::new(Arc::clone(&config), Arc::clone(&transport));

        let session = AdvertoSession::new(ssid);
        seed_session_cookies(&transport, &config, &session.ssid);

        Ok(Self::assemble(config, transport, auth, None, session))
    }

    fn assemble(
        config: Arc<Config>,
        transport: Arc<HttpTransport>,
        auth: AdvertoAuth,
        credentials: Option<Credentials>,
        session: AdvertoSession,
    ) -> Self {
        let scraper = Arc::new(Scraper::new());
        let uploader = Arc::new(ImageUploader::new(
            Arc::clone(&config),
            Arc::clone(&transport),
            Arc::clone(&scraper),
        ));
        let publisher = AdPublisher::new(
            Arc::clone(&config),
            Arc::clone(&transport),
            Arc::clone(&scraper),
            uploader,
        );
        let listings = ListingManager::new(
            Arc::clone(&config),
            Arc::clone(&transport),
            Arc::clone(&scraper),
        );

        Self {
            config,
            transport,
            auth,
            credentials,
            session: RwLock::new(session),
            publisher,
            listings,
        }
    }

    /// The session currently backing this client.
    pub async fn session(&self) -> AdvertoSession {
        self.session.read().await.clone()
    }

    async fn relogin(&self) -> Result<(), ClientError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ClientError::SessionExpired)?;

        info!("Session expired, logging in again");
        let session = self.auth.login(credentials).await?;
        seed_session_cookies(&self.transport, &self.config, &session.ssid);
        *self.session.write().await = session;
        Ok(())
    }

    /// Publishes a draft and returns the new listing id.
    pub async fn publish(&self, ad: &AdDraft) -> Result<i64, ClientError> {
        match self.publisher.publish(ad).await {
            Err(ClientError::SessionExpired) if self.credentials.is_some() => {
                self.relogin().await?;
                self.publisher.publish(ad).await
            }
            result => result,
        }
    }

    pub async fn list_active(&self) -> Result<Vec<ActiveListing>, ClientError> {
        match self.listings.list_active().await {
            Err(ClientError::SessionExpired) if self.credentials.is_some() => {
                self.relogin().await?;
                self.listings.list_active().await
            }
            result => result,
        }
    }

    pub async fn get_one(&self, id: i64) -> Result<ActiveListing, ClientError> {
        match self.listings.get_one(id).await {
            Err(ClientError::SessionExpired) if self.credentials.is_some() => {
                self.relogin().await?;
                self.listings.get_one(id).await
            }
            result => result,
        }
    }

    pub async fn remove_one(&self, id: i64) -> Result<(), ClientError> {
        match self.listings.remove_one(id).await {
            Err(ClientError::SessionExpired) if self.credentials.is_some() => {
                self.relogin().await?;
                self.listings.remove_one(id).await
            }
            result => result,
        }
    }

    pub async fn remove_many(&self, ids: &[i64]) -> Result<(), ClientError> {
        match self.listings.remove_many(ids).await {
            Err(ClientError::SessionExpired) if self.credentials.is_some() => {
                self.relogin().await?;
                self.listings.remove_many(ids).await
            }
            result => result,
        }
    }

    /// Removes every active listing, returning how many went away.
    pub async fn remove_all(&self) -> Result<usize, ClientError> {
        match self.listings.remove_all().await {
            Err(ClientError::SessionExpired) if self.credentials.is_some() => {
                self.relogin().await?;
                self.listings.remove_all().await
            }
            result => result,
        }
    }
}

/// The production hosts hand the session cookie out for their own domain
/// only, so it is planted explicitly for every configured endpoint.
fn seed_session_cookies(transport: &HttpTransport, config: &Config, ssid: &str) {
    let cookie = format!("{}={}", SESSION_COOKIE, ssid);
    for endpoint in [
        &config.site.login_url,
        &config.site.account_url,
        &config.site.publish_url,
    ] {
        if let Ok(url) = Url::parse(endpoint) {
            transport.seed_cookie(&url, &cookie);
        }
    }
}
