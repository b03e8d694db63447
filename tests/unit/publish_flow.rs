use adverto_client::application::models::ad::AdDraft;
use adverto_client::client::AdvertoClient;
use adverto_client::error::ClientError;
use adverto_client::session::interface::Credentials;
use adverto_client::utils::logger::setup_logger;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

use crate::helpers::{form_page, image_reply, test_config, IMAGE_ID};

fn create_draft(images: usize) -> AdDraft {
    AdDraft {
        title: "Mountain bike".to_string(),
        description: "Hardtail, barely used".to_string(),
        price: 25000,
        category_id: 619,
        images: (0..images).map(|n| vec![n as u8; 16]).collect(),
    }
}

#[tokio::test]
async fn test_publish_journey_with_images() {
    setup_logger();
    let mut server = Server::new_async().await;

    let form = server
        .mock("POST", "/select-package.php")
        .match_body(Matcher::UrlEncoded("categoryId".into(), "619".into()))
        .with_status(200)
        .with_body(form_page())
        .create_async()
        .await;
    let store = server
        .mock("POST", "/include/image-proxy.php")
        .match_header("Media-Action", "save-to-store")
        .with_status(200)
        .with_body(image_reply())
        .expect(2)
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/submit.php")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("(?s).*name=\"adTitle\".*Mountain bike.*".to_string()),
            Matcher::Regex("(?s).*name=\"startPrice\".*25000.*".to_string()),
            Matcher::Regex(format!(
                "(?s).*name=\"images\\[\\]\\[id\\]\".*{IMAGE_ID}.*"
            )),
            Matcher::Regex(format!("(?s).*name=\"imageOrder\\[\\]\".*{IMAGE_ID}.*")),
        ]))
        .with_status(302)
        .with_header("Location", "http://post.adverto.com/confirm/1234567890")
        .create_async()
        .await;

    let client = AdvertoClient::with_session(test_config(&server), "fe12cd34").unwrap();
    let id = client.publish(&create_draft(2)).await.unwrap();

    assert_eq!(id, 1234567890);
    form.assert_async().await;
    store.assert_async().await;
    submit.assert_async().await;
}

#[tokio::test]
async fn test_publish_recovers_from_mid_flow_expiry() {
    setup_logger();
    let mut server = Server::new_async().await;

    // Initial login hands out a session the site has already expired; the
    // form fetch bounces to the login page, the client logs in again and the
    // second attempt goes through.
    let first_login = server
        .mock("POST", "/auth.php")
        .match_header("cookie", Matcher::Missing)
        .with_status(200)
        .with_header("set-cookie", "ADVERTO_SSID=stale; Path=/")
        .expect(1)
        .create_async()
        .await;
    let login_page = server
        .mock("GET", "/auth.php")
        .with_status(200)
        .with_body("<html>log in</html>")
        .expect(1)
        .create_async()
        .await;
    let relogin = server
        .mock("POST", "/auth.php")
        .match_header("cookie", "ADVERTO_SSID=stale")
        .with_status(200)
        .with_header("set-cookie", "ADVERTO_SSID=fresh; Path=/")
        .expect(1)
        .create_async()
        .await;
    let stale_form = server
        .mock("POST", "/select-package.php")
        .match_header("cookie", "ADVERTO_SSID=stale")
        .with_status(302)
        .with_header("Location", "/auth.php")
        .expect(1)
        .create_async()
        .await;
    let fresh_form = server
        .mock("POST", "/select-package.php")
        .match_header("cookie", "ADVERTO_SSID=fresh")
        .with_status(200)
        .with_body(form_page())
        .expect(1)
        .create_async()
        .await;
    // The first attempt may or may not get its upload off before the form
    // fetch fails it.
    let store = server
        .mock("POST", "/include/image-proxy.php")
        .with_status(200)
        .with_body(image_reply())
        .expect_at_least(1)
        .expect_at_most(2)
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/submit.php")
        .match_header("cookie", "ADVERTO_SSID=fresh")
        .with_status(302)
        .with_header("Location", "http://post.adverto.com/confirm/1234567890")
        .expect(1)
        .create_async()
        .await;

    let client = AdvertoClient::login(
        test_config(&server),
        Credentials::new("someone@example.com", "hunter2"),
    )
    .await
    .unwrap();

    let id = client.publish(&create_draft(1)).await.unwrap();

    assert_eq!(id, 1234567890);
    assert_eq!(client.session().await.ssid, "fresh");
    first_login.assert_async().await;
    login_page.assert_async().await;
    relogin.assert_async().await;
    stale_form.assert_async().await;
    fresh_form.assert_async().await;
    store.assert_async().await;
    submit.assert_async().await;
}

#[tokio::test]
async fn test_publish_rejection_reaches_caller() {
    setup_logger();
    let mut server = Server::new_async().await;

    let _form = server
        .mock("POST", "/select-package.php")
        .with_status(200)
        .with_body(form_page())
        .create_async()
        .await;
    let _submit = server
        .mock("POST", "/submit.php")
        .with_status(400)
        .create_async()
        .await;

    let client = AdvertoClient::with_session(test_config(&server), "fe12cd34").unwrap();
    let result = client.publish(&create_draft(0)).await;

    assert!(matches!(
        result,
        Err(ClientError::PublishRejected(StatusCode::BAD_REQUEST))
    ));
}
