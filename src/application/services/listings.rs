use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};

use crate::application::models::ad::ActiveListing;
use crate::config::Config;
use crate::error::ClientError;
use crate::scrape::scraper::Scraper;
use crate::transport::headers;
use crate::transport::http_client::{redirects_to_login, HttpTransport, RedirectMode};

/// Reads and removes the account's active listings.
pub struct ListingManager {
    config: Arc<Config>,
    transport: Arc<HttpTransport>,
    scraper: Arc<Scraper>,
}

impl ListingManager {
    pub fn new(config: Arc<Config>, transport: Arc<HttpTransport>, scraper: Arc<Scraper>) -> Self {
        Self {
            config,
            transport,
            scraper,
        }
    }

    async fn fetch_listings_page(&self) -> Result<String, ClientError> {
        let response = self
            .transport
            .get(
                &self.config.site.listings_url(),
                &headers::account(),
                RedirectMode::Manual,
            )
            .await?;

        if redirects_to_login(&response, &self.config.site.login_url) {
            return Err(ClientError::SessionExpired);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status));
        }

        Ok(response.text().await?)
    }

    /// All listings currently on the account page, in page order.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<ActiveListing>, ClientError> {
        let body = self.fetch_listings_page().await?;
        Ok(self.scraper.active_listings(&body)?)
    }

    /// One listing with its current page position.
    #[instrument(skip(self))]
    pub async fn get_one(&self, id: i64) -> Result<ActiveListing, ClientError> {
        let body = self.fetch_listings_page().await?;
        let order = self.scraper.listing_order(&body, id)?;
        Ok(ActiveListing { id, order })
    }

    #[instrument(skip(self))]
    pub async fn remove_one(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .transport
            .post_form(
                &self.config.site.remove_one_url(id),
                &headers::remove(),
                &[],
                RedirectMode::Manual,
            )
            .await?;

        if redirects_to_login(&response, &self.config.site.login_url) {
            return Err(ClientError::SessionExpired);
        }

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::RemoveRejected(status));
        }

        info!("Removed listing {}", id);
        Ok(())
    }

    /// Removes several listings in one call. The bulk endpoint is known to
    /// answer with a server error after removing everything anyway, so a
    /// non-OK status is logged and tolerated; transport failures still
    /// propagate.
    #[instrument(skip(self, ids))]
    pub async fn remove_many(&self, ids: &[i64]) -> Result<(), ClientError> {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let params = [("IDS", joined)];

        let response = self
            .transport
            .post_form(
                &self.config.site.remove_bulk_url(),
                &headers::remove(),
                &params,
                RedirectMode::Manual,
            )
            .await?;

        if redirects_to_login(&response, &self.config.site.login_url) {
            return Err(ClientError::SessionExpired);
        }

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                "Bulk removal of {} listings answered {}, treating as done",
                ids.len(),
                status
            );
        } else {
            info!("Removed {} listings", ids.len());
        }
        Ok(())
    }

    /// Clears the whole account. No listings means no removal request at all.
    #[instrument(skip(self))]
    pub async fn remove_all(&self) -> Result<usize, ClientError> {
        let listings = self.list_active().await?;
        if listings.is_empty() {
            debug!("No active listings to remove");
            return Ok(0);
        }

        let ids: Vec<i64> = listings.iter().map(|listing| listing.id).collect();
        self.remove_many(&ids).await?;
        Ok(ids.len())
    }
}
