use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::header;
use reqwest::multipart::Form;
use reqwest::redirect::Policy;
use reqwest::{Client, Response, Url};
use tracing::{debug, instrument};

/// HTTP transport for the marketplace endpoints.
///
/// Holds two clients over one shared cookie jar. They differ only in redirect
/// policy, so redirect handling is chosen per request instead of mutating
/// client state: the site's publish flow needs redirects followed when
/// fetching the submission form but suppressed when reading the confirmation
/// redirect out of the submit response.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    follow: Client,
    manual: Client,
    jar: Arc<Jar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    Follow,
    Manual,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let jar = Arc::new(Jar::default());

        let follow = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .redirect(Policy::limited(10))
            .gzip(true)
            .timeout(timeout)
            .build()?;

        let manual = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .redirect(Policy::none())
            .gzip(true)
            .timeout(timeout)
            .build()?;

        Ok(Self { follow, manual, jar })
    }

    /// Plants a cookie for the given URL, as when resuming a saved session.
    pub fn seed_cookie(&self, url: &Url, cookie: &str) {
        self.jar.add_cookie_str(cookie, url);
    }

    fn client(&self, mode: RedirectMode) -> &Client {
        match mode {
            RedirectMode::Follow => &self.follow,
            RedirectMode::Manual => &self.manual,
        }
    }

    #[instrument(skip(self, headers))]
    pub async fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        mode: RedirectMode,
    ) -> Result<Response, reqwest::Error> {
        debug!("Sending GET request to {}", url);

        let mut request = self.client(mode).get(url);
        for (key, value) in headers {
            request = request.header(key, value);
        }
        request.send().await
    }

    #[instrument(skip(self, headers, params))]
    pub async fn post_form(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        params: &[(&str, String)],
        mode: RedirectMode,
    ) -> Result<Response, reqwest::Error> {
        debug!("Sending POST request to {}", url);

        let mut request = self.client(mode).post(url);
        for (key, value) in headers {
            request = request.header(key, value);
        }
        request.form(params).send().await
    }

    #[instrument(skip(self, headers, form))]
    pub async fn post_multipart(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        form: Form,
        mode: RedirectMode,
    ) -> Result<Response, reqwest::Error> {
        debug!("Sending multipart POST request to {}", url);

        let mut request = self.client(mode).post(url);
        for (key, value) in headers {
            request = request.header(key, value);
        }
        request.multipart(form).send().await
    }

    /// Reads a named cookie out of a response's Set-Cookie headers.
    pub fn response_cookie(response: &Response, name: &str) -> Option<String> {
        response
            .cookies()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
    }
}

/// True when a non-followed response redirects onto the login endpoint. The
/// Location target may be relative, so it is resolved against the request URL
/// before comparing.
pub(crate) fn redirects_to_login(response: &Response, login_url: &str) -> bool {
    let location = match response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
    {
        Some(location) => location,
        None => return false,
    };

    match response.url().join(location) {
        Ok(target) => target.as_str().starts_with(login_url.trim_end_matches('/')),
        Err(_) => false,
    }
}

/// True when a followed request ended up on the login endpoint.
pub(crate) fn landed_on_login(response: &Response, login_url: &str) -> bool {
    response
        .url()
        .as_str()
        .starts_with(login_url.trim_end_matches('/'))
}
