use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
}

/// Where the marketplace lives. The site is spread over three hosts: one for
/// credential login, one for the authenticated account area and one for
/// publishing new ads.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub login_url: String,
    pub account_url: String,
    pub publish_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl SiteConfig {
    pub fn listings_url(&self) -> String {
        format!("{}/listings", self.account_url.trim_end_matches('/'))
    }

    pub fn remove_one_url(&self, id: i64) -> String {
        format!(
            "{}/manager/remove-active/id/{}",
            self.account_url.trim_end_matches('/'),
            id
        )
    }

    pub fn remove_bulk_url(&self) -> String {
        format!(
            "{}/manager/remove-active-bulk",
            self.account_url.trim_end_matches('/')
        )
    }

    pub fn package_select_url(&self) -> String {
        format!(
            "{}/select-package.php",
            self.publish_url.trim_end_matches('/')
        )
    }

    pub fn submit_url(&self) -> String {
        format!("{}/submit.php", self.publish_url.trim_end_matches('/'))
    }

    pub fn image_upload_url(&self) -> String {
        format!(
            "{}/include/image-proxy.php",
            self.publish_url.trim_end_matches('/')
        )
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"site\":{},\"http\":{}}}", self.site, self.http)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"login_url\":\"{}\",\"account_url\":\"{}\",\"publish_url\":\"{}\"}}",
            self.login_url, self.account_url, self.publish_url
        )
    }
}

impl fmt::Display for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"timeout_secs\":{}}}", self.timeout_secs)
    }
}

pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Config {
            site: SiteConfig {
                login_url: get_env_or_default(
                    "ADVERTO_LOGIN_URL",
                    String::from("https://login.adverto.com/auth.php"),
                ),
                account_url: get_env_or_default(
                    "ADVERTO_ACCOUNT_URL",
                    String::from("https://my.adverto.com"),
                ),
                publish_url: get_env_or_default(
                    "ADVERTO_PUBLISH_URL",
                    String::from("http://post.adverto.com"),
                ),
            },
            http: HttpConfig {
                // A publish round trip with images can take the site minutes.
                timeout_secs: get_env_or_default("ADVERTO_HTTP_TIMEOUT", 180),
            },
        }
    }
}
