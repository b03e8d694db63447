pub(crate) const SESSION_COOKIE: &str = "ADVERTO_SSID";
pub(crate) const MEDIA_ACTION_HEADER: &str = "Media-Action";
pub(crate) const MEDIA_ACTION_SAVE: &str = "save-to-store";

/// Byte range of the listing id inside a production confirmation URL of the
/// shape `http://post.adverto.com/confirm/<10 digits>`.
pub(crate) const LEGACY_LOCATION_ID_RANGE: std::ops::Range<usize> = 32..42;

pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/66.0.3359.139 Safari/537.36";
