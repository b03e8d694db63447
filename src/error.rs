use reqwest::StatusCode;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum AuthError {
    Network(reqwest::Error),
    BadCredentials,
    Protocol(ProtocolError),
    Unexpected(StatusCode),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Network(e) => write!(f, "network error: {e}"),
            AuthError::BadCredentials => write!(f, "bad credentials"),
            AuthError::Protocol(e) => write!(f, "protocol error: {e}"),
            AuthError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Network(e)
    }
}
impl From<ProtocolError> for AuthError {
    fn from(e: ProtocolError) -> Self {
        AuthError::Protocol(e)
    }
}

/// A page or header did not hold what the extraction rules demand. The raw
/// input is never partially trusted: a failed rule fails the whole parse.
#[derive(Debug)]
pub enum ScrapeError {
    PatternMiss { field: &'static str },
    ArityMismatch { ids: usize, orders: usize },
    BadNumber { what: &'static str, raw: String },
    BadImageId(String),
    BadLocation(String),
    ListingNotFound(i64),
}

impl Display for ScrapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::PatternMiss { field } => {
                write!(f, "pattern for field '{field}' did not match")
            }
            ScrapeError::ArityMismatch { ids, orders } => {
                write!(f, "scraped {ids} listing ids but {orders} orders")
            }
            ScrapeError::BadNumber { what, raw } => {
                write!(f, "scraped {what} is not a valid number: '{raw}'")
            }
            ScrapeError::BadImageId(raw) => write!(f, "invalid image id: '{raw}'"),
            ScrapeError::BadLocation(loc) => write!(f, "unrecognized location: '{loc}'"),
            ScrapeError::ListingNotFound(id) => write!(f, "listing {id} not found on page"),
        }
    }
}

impl std::error::Error for ScrapeError {}

/// The site answered with a success status but without the artifact the
/// exchange is contractually expected to carry.
#[derive(Debug)]
pub enum ProtocolError {
    MissingSessionCookie,
    MissingLocation,
    MissingListingId,
}

impl Display for ProtocolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingSessionCookie => write!(f, "response carried no session cookie"),
            ProtocolError::MissingLocation => write!(f, "redirect carried no Location header"),
            ProtocolError::MissingListingId => write!(f, "response carried no listing id"),
        }
    }
}

impl std::error::Error for ProtocolError {}

#[derive(Debug)]
pub enum ClientError {
    Auth(AuthError),
    Network(reqwest::Error),
    Scrape(ScrapeError),
    Protocol(ProtocolError),
    NotFound(i64),
    SessionExpired,
    UploadRejected(StatusCode),
    PublishRejected(StatusCode),
    RemoveRejected(StatusCode),
    UnexpectedStatus(StatusCode),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Auth(e) => write!(f, "auth error: {e}"),
            ClientError::Network(e) => write!(f, "network error: {e}"),
            ClientError::Scrape(e) => write!(f, "scrape error: {e}"),
            ClientError::Protocol(e) => write!(f, "protocol error: {e}"),
            ClientError::NotFound(id) => write!(f, "listing {id} not found"),
            ClientError::SessionExpired => write!(f, "session expired"),
            ClientError::UploadRejected(s) => write!(f, "image upload rejected: {s}"),
            ClientError::PublishRejected(s) => write!(f, "publish rejected: {s}"),
            ClientError::RemoveRejected(s) => write!(f, "remove rejected: {s}"),
            ClientError::UnexpectedStatus(s) => write!(f, "unexpected http status: {s}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Network(e)
    }
}
impl From<AuthError> for ClientError {
    fn from(e: AuthError) -> Self {
        ClientError::Auth(e)
    }
}
impl From<ScrapeError> for ClientError {
    fn from(e: ScrapeError) -> Self {
        match e {
            ScrapeError::ListingNotFound(id) => ClientError::NotFound(id),
            other => ClientError::Scrape(other),
        }
    }
}
impl From<ProtocolError> for ClientError {
    fn from(e: ProtocolError) -> Self {
        ClientError::Protocol(e)
    }
}
