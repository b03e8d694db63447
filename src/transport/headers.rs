use std::collections::HashMap;
use tracing::debug;

use crate::constants::{BROWSER_USER_AGENT, MEDIA_ACTION_HEADER, MEDIA_ACTION_SAVE};

/// Header sets sent with each endpoint. The site serves browsers, not API
/// clients, so every request carries a plausible browser profile; endpoints
/// add their own Origin/Referer overlay on top. Host and Content-Type are
/// left to reqwest.
fn base() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert(
        "Accept".to_string(),
        "application/json, text/javascript, */*; q=0.01".to_string(),
    );
    headers.insert(
        "Accept-Language".to_string(),
        "en-US,en;q=0.9,de;q=0.8".to_string(),
    );
    headers.insert("Cache-Control".to_string(), "max-age=0".to_string());
    headers.insert("Connection".to_string(), "keep-alive".to_string());
    headers.insert("User-Agent".to_string(), BROWSER_USER_AGENT.to_string());
    headers.insert("Upgrade-Insecure-Requests".to_string(), "1".to_string());
    headers
}

pub(crate) fn login() -> HashMap<String, String> {
    let mut headers = base();
    headers.insert("Origin".to_string(), "https://www.adverto.com".to_string());
    headers.insert("Referer".to_string(), "https://www.adverto.com/".to_string());
    headers.insert("X-Requested-With".to_string(), "XMLHttpRequest".to_string());
    headers.insert("X-Site".to_string(), "https://www.adverto.com/".to_string());
    debug!("login headers: {:?}", headers);
    headers
}

pub(crate) fn account() -> HashMap<String, String> {
    base()
}

pub(crate) fn remove() -> HashMap<String, String> {
    let mut headers = base();
    headers.insert("Origin".to_string(), "https://my.adverto.com".to_string());
    headers.insert(
        "Referer".to_string(),
        "https://my.adverto.com/listings".to_string(),
    );
    headers.insert("X-Requested-With".to_string(), "XMLHttpRequest".to_string());
    headers
}

pub(crate) fn publish_form(category_id: u32) -> HashMap<String, String> {
    let mut headers = base();
    headers.insert("Origin".to_string(), "http://post.adverto.com".to_string());
    headers.insert(
        "Referer".to_string(),
        format!("http://post.adverto.com/submit.php?catId={}&days=30", category_id),
    );
    headers
}

pub(crate) fn image_upload(category_id: u32) -> HashMap<String, String> {
    let mut headers = base();
    headers.insert("Origin".to_string(), "http://post.adverto.com".to_string());
    headers.insert(
        "Referer".to_string(),
        format!("http://post.adverto.com/submit.php?catId={}&days=30", category_id),
    );
    headers.insert("X-Requested-With".to_string(), "XMLHttpRequest".to_string());
    headers.insert("Pragma".to_string(), "no-cache".to_string());
    headers.insert(MEDIA_ACTION_HEADER.to_string(), MEDIA_ACTION_SAVE.to_string());
    headers
}
