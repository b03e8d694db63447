use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A classified ad as the caller hands it over. Immutable once submitted;
/// a republish sends the same draft again under a new listing id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdDraft {
    pub title: String,

    pub description: String,

    /// Smallest currency unit.
    pub price: i64,

    #[serde(rename = "category-id")]
    pub category_id: u32,

    /// Decoded image bytes, in the order they should appear on the listing.
    #[serde(skip)]
    pub images: Vec<Vec<u8>>,
}

impl fmt::Display for AdDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

/// One listing as scraped off the account page. `order` is the position in
/// the category, recomputed on every parse; it decays as newer ads arrive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActiveListing {
    pub id: i64,
    pub order: u32,
}

impl fmt::Display for ActiveListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

/// Opaque reference the image store hands back for an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImageRef(String);

impl UploadedImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadedImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hidden form fields scraped from the package-selection page. Consumed by
/// exactly one submission; the site rotates values between renders, so these
/// are never cached.
#[derive(Debug)]
pub struct PublishMetadata(HashMap<&'static str, String>);

impl PublishMetadata {
    pub fn new(values: HashMap<&'static str, String>) -> Self {
        Self(values)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// A draft the caller keeps on the site, tracked across republishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedAd {
    pub listing_id: i64,
    pub draft: AdDraft,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

/// When a listing counts as stale.
#[derive(Debug, Clone)]
pub struct RefreshPolicy {
    /// Deepest page position a listing may reach before a refresh.
    pub max_order: u32,
    /// Oldest a listing may get before a refresh, regardless of position.
    pub max_age: Option<Duration>,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            max_order: 5,
            max_age: None,
        }
    }
}

/// What one refresh pass did.
#[derive(Debug, Default)]
pub struct RefreshOutcome {
    /// `(old listing id, new listing id)` per republished ad.
    pub refreshed: Vec<(i64, i64)>,
    pub untouched: usize,
}
