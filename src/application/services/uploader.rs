use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

use crate::application::models::ad::UploadedImageRef;
use crate::config::Config;
use crate::error::ClientError;
use crate::scrape::scraper::Scraper;
use crate::transport::headers;
use crate::transport::http_client::{HttpTransport, RedirectMode};

/// Pushes image bytes into the site's media store ahead of a submission.
/// Stateless per image, so uploads for one ad can run concurrently.
pub struct ImageUploader {
    config: Arc<Config>,
    transport: Arc<HttpTransport>,
    scraper: Arc<Scraper>,
}

impl ImageUploader {
    pub fn new(config: Arc<Config>, transport: Arc<HttpTransport>, scraper: Arc<Scraper>) -> Self {
        Self {
            config,
            transport,
            scraper,
        }
    }

    /// Uploads one image and returns the store's reference for it. The store
    /// replies with the reference alone; ordering stays the caller's concern.
    #[instrument(skip(self, image))]
    pub async fn upload(
        &self,
        category_id: u32,
        image: Vec<u8>,
    ) -> Result<UploadedImageRef, ClientError> {
        debug!("Uploading image of {} bytes", image.len());

        let part = Part::bytes(image).file_name("image").mime_str("image/png")?;
        let form = Form::new().part("file", part);

        let response = self
            .transport
            .post_multipart(
                &self.config.site.image_upload_url(),
                &headers::image_upload(category_id),
                form,
                RedirectMode::Manual,
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UploadRejected(status));
        }

        let body = response.text().await?;
        let reference = self.scraper.uploaded_image_id(&body)?;

        debug!("Image stored as {}", reference);
        Ok(reference)
    }
}
