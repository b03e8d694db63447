use adverto_client::config::Config;
use adverto_client::scrape::fields::REQUIRED_FIELDS;
use mockito::Server;

pub const IMAGE_ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

/// All three site hosts pointed at one mock server.
pub fn test_config(server: &Server) -> Config {
    let mut config = Config::default();
    config.site.login_url = format!("{}/auth.php", server.url());
    config.site.account_url = server.url();
    config.site.publish_url = server.url();
    config
}

/// Account page with the given `(listing id, page position)` entries.
pub fn listings_page(entries: &[(i64, u32)]) -> String {
    let mut body = String::from("<html><body>");
    for (id, order) in entries {
        body.push_str(&format!(
            r##"<h3>Listing code: {id}</h3><span>{order}</span><a href="#top">Jump to top</a>"##
        ));
    }
    body.push_str("</body></html>");
    body
}

/// Package-selection page carrying every hidden field the submission needs.
pub fn form_page() -> String {
    let mut body = String::from("<html><form>");
    for (index, (_, pattern)) in REQUIRED_FIELDS.iter().enumerate() {
        body.push_str(&pattern.replace("(.*?)", &format!("v{index}")));
        body.push('\n');
    }
    body.push_str("</form></html>");
    body
}

pub fn image_reply() -> String {
    format!(r#"{{"status":"ok","imageId":"{IMAGE_ID}"}}"#)
}
