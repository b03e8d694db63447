use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use crate::application::models::ad::{ActiveListing, PublishMetadata, UploadedImageRef};
use crate::constants::LEGACY_LOCATION_ID_RANGE;
use crate::error::ScrapeError;
use crate::scrape::fields::REQUIRED_FIELDS;

/// Extraction rules for the site's HTML and JSON responses.
///
/// The site has no API, so every piece of state comes out of page markup.
/// All patterns are compiled once here; a pattern that stops matching means
/// the site changed its markup, and the flow that depends on it must fail
/// loudly rather than post a half-scraped form.
pub struct Scraper {
    listing_id: Regex,
    listing_order: Regex,
    field_rules: Vec<(&'static str, Regex)>,
    image_id: Regex,
    body_listing_id: Regex,
}

impl Scraper {
    pub fn new() -> Self {
        let field_rules = REQUIRED_FIELDS
            .iter()
            .map(|&(name, pattern)| (name, Regex::new(pattern).unwrap()))
            .collect();

        Self {
            listing_id: Regex::new(r"Listing code: (\d+)").unwrap(),
            listing_order: Regex::new(r"<span>(\d+)</span><a [^>]*>Jump to top</a>").unwrap(),
            field_rules,
            image_id: Regex::new(r#""imageId":"([^"]*)""#).unwrap(),
            body_listing_id: Regex::new(r#"<input type="hidden" name="listingId" value="(\d+)""#)
                .unwrap(),
        }
    }

    /// Pairs listing codes with their page positions, in document order.
    /// The two rules must agree on count; a mismatch means the page layout
    /// drifted and no pairing can be trusted.
    pub fn active_listings(&self, body: &str) -> Result<Vec<ActiveListing>, ScrapeError> {
        let ids: Vec<&str> = self
            .listing_id
            .captures_iter(body)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str())
            .collect();
        let orders: Vec<&str> = self
            .listing_order
            .captures_iter(body)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str())
            .collect();

        if ids.len() != orders.len() {
            return Err(ScrapeError::ArityMismatch {
                ids: ids.len(),
                orders: orders.len(),
            });
        }

        let mut listings = Vec::with_capacity(ids.len());
        for (raw_id, raw_order) in ids.into_iter().zip(orders) {
            let id = raw_id.parse::<i64>().map_err(|_| ScrapeError::BadNumber {
                what: "listing id",
                raw: raw_id.to_string(),
            })?;
            let order = raw_order.parse::<u32>().map_err(|_| ScrapeError::BadNumber {
                what: "listing order",
                raw: raw_order.to_string(),
            })?;
            listings.push(ActiveListing { id, order });
        }

        debug!("Scraped {} active listings", listings.len());
        Ok(listings)
    }

    /// Page position of one listing.
    pub fn listing_order(&self, body: &str, id: i64) -> Result<u32, ScrapeError> {
        self.active_listings(body)?
            .into_iter()
            .find(|listing| listing.id == id)
            .map(|listing| listing.order)
            .ok_or(ScrapeError::ListingNotFound(id))
    }

    /// Collects every hidden form field the submission must echo back.
    /// All-or-nothing: one missing field fails the whole scrape.
    pub fn publish_metadata(&self, body: &str) -> Result<PublishMetadata, ScrapeError> {
        let mut values = HashMap::with_capacity(self.field_rules.len());
        for &(name, ref rule) in &self.field_rules {
            let capture = rule
                .captures(body)
                .and_then(|captures| captures.get(1))
                .ok_or(ScrapeError::PatternMiss { field: name })?;
            values.insert(name, capture.as_str().to_string());
        }

        debug!("Scraped {} submission form fields", values.len());
        Ok(PublishMetadata::new(values))
    }

    /// Pulls the image reference out of the uploader's JSON reply. The
    /// capture is loose on purpose; UUID validation is what rejects garbage.
    pub fn uploaded_image_id(&self, body: &str) -> Result<UploadedImageRef, ScrapeError> {
        let raw = self
            .image_id
            .captures(body)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ScrapeError::BadImageId(body.chars().take(64).collect()))?;

        uuid::Uuid::parse_str(raw).map_err(|_| ScrapeError::BadImageId(raw.to_string()))?;

        debug!("Extracted uploaded image id {}", raw);
        Ok(UploadedImageRef::new(raw))
    }

    /// New listing id from the confirmation redirect. Parses the URL path
    /// segment after `confirm` first, then falls back to the fixed byte
    /// slice matching the production shape
    /// `http://post.adverto.com/confirm/<10 digits>`.
    pub fn listing_id_from_location(&self, location: &str) -> Result<i64, ScrapeError> {
        if let Some(id) = confirm_segment_id(location) {
            return Ok(id);
        }

        location
            .get(LEGACY_LOCATION_ID_RANGE)
            .and_then(|digits| digits.parse::<i64>().ok())
            .ok_or_else(|| ScrapeError::BadLocation(location.to_string()))
    }

    /// Some deployments answer a submission with `200` and the new id in a
    /// hidden field instead of redirecting.
    pub fn listing_id_from_body(&self, body: &str) -> Option<i64> {
        self.body_listing_id
            .captures(body)
            .and_then(|captures| captures.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok())
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new()
    }
}

fn confirm_segment_id(location: &str) -> Option<i64> {
    let url = url::Url::parse(location).ok()?;
    let mut segments = url.path_segments()?;
    segments.find(|segment| *segment == "confirm")?;
    segments.next()?.parse::<i64>().ok()
}
