use std::sync::Arc;

use futures::future::try_join_all;
use reqwest::header;
use reqwest::multipart::Form;
use reqwest::StatusCode;
use tracing::{debug, info, instrument};

use crate::application::models::ad::{AdDraft, PublishMetadata, UploadedImageRef};
use crate::application::services::uploader::ImageUploader;
use crate::config::Config;
use crate::error::{ClientError, ProtocolError};
use crate::scrape::scraper::Scraper;
use crate::transport::headers;
use crate::transport::http_client::{landed_on_login, redirects_to_login, HttpTransport, RedirectMode};

/// Drives the site's two-step publish flow: fetch the package-selection form
/// for its hidden fields, then post the full multipart submission.
pub struct AdPublisher {
    config: Arc<Config>,
    transport: Arc<HttpTransport>,
    scraper: Arc<Scraper>,
    uploader: Arc<ImageUploader>,
}

impl AdPublisher {
    pub fn new(
        config: Arc<Config>,
        transport: Arc<HttpTransport>,
        scraper: Arc<Scraper>,
        uploader: Arc<ImageUploader>,
    ) -> Self {
        Self {
            config,
            transport,
            scraper,
            uploader,
        }
    }

    /// Fetches the hidden fields the submission must echo back. The site
    /// rotates them per render, so this runs once per publish. Redirects are
    /// followed here; landing on the login page means the session is gone.
    #[instrument(skip(self))]
    pub async fn publish_metadata(&self, category_id: u32) -> Result<PublishMetadata, ClientError> {
        debug!("Fetching submission form for category {}", category_id);

        let params = [("categoryId", category_id.to_string())];
        let response = self
            .transport
            .post_form(
                &self.config.site.package_select_url(),
                &headers::publish_form(category_id),
                &params,
                RedirectMode::Follow,
            )
            .await?;

        if landed_on_login(&response, &self.config.site.login_url) {
            return Err(ClientError::SessionExpired);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        Ok(self.scraper.publish_metadata(&body)?)
    }

    /// Publishes one draft and returns the new listing id.
    ///
    /// The metadata fetch and all image uploads run concurrently and
    /// fail-fast: a single failed upload aborts the publish before anything
    /// is submitted. References land in the submission in input order.
    #[instrument(skip(self, ad))]
    pub async fn publish(&self, ad: &AdDraft) -> Result<i64, ClientError> {
        info!("Publishing '{}' with {} images", ad.title, ad.images.len());

        let uploads = try_join_all(
            ad.images
                .iter()
                .map(|image| self.uploader.upload(ad.category_id, image.clone())),
        );
        let (metadata, references) =
            tokio::try_join!(self.publish_metadata(ad.category_id), uploads)?;

        self.submit(ad, metadata, &references).await
    }

    async fn submit(
        &self,
        ad: &AdDraft,
        metadata: PublishMetadata,
        references: &[UploadedImageRef],
    ) -> Result<i64, ClientError> {
        let mut form = Form::new();
        for (name, value) in metadata.iter() {
            form = form.text(name, value.to_string());
        }

        form = form
            .text("adTitle", ad.title.clone())
            .text("adDescription", ad.description.clone())
            .text("startPrice", ad.price.to_string())
            .text("categoryId", ad.category_id.to_string())
            .text("listingType", "C");

        for reference in references {
            form = form
                .text("images[][id]", reference.as_str().to_string())
                .text("imageOrder[]", reference.as_str().to_string());
        }

        let response = self
            .transport
            .post_multipart(
                &self.config.site.submit_url(),
                &headers::publish_form(ad.category_id),
                form,
                RedirectMode::Manual,
            )
            .await?;

        match response.status() {
            StatusCode::FOUND => {
                if redirects_to_login(&response, &self.config.site.login_url) {
                    return Err(ClientError::SessionExpired);
                }
                let location = response
                    .headers()
                    .get(header::LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .ok_or(ProtocolError::MissingLocation)?;
                let id = self.scraper.listing_id_from_location(location)?;
                info!("Listing published with id {}", id);
                Ok(id)
            }
            StatusCode::OK => {
                let body = response.text().await?;
                let id = self
                    .scraper
                    .listing_id_from_body(&body)
                    .ok_or(ProtocolError::MissingListingId)?;
                info!("Listing published with id {}", id);
                Ok(id)
            }
            status => Err(ClientError::PublishRejected(status)),
        }
    }
}
