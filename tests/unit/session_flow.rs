use adverto_client::client::AdvertoClient;
use adverto_client::error::{AuthError, ClientError};
use adverto_client::session::interface::Credentials;
use adverto_client::utils::logger::setup_logger;
use mockito::Server;
use pretty_assertions::assert_eq;

use crate::helpers::{listings_page, test_config};

#[tokio::test]
async fn test_login_list_remove_journey() {
    setup_logger();
    let mut server = Server::new_async().await;

    let login = server
        .mock("POST", "/auth.php")
        .with_status(302)
        .with_header("Location", "/welcome")
        .with_header("set-cookie", "ADVERTO_SSID=fe12cd34; Path=/")
        .create_async()
        .await;
    let listings = server
        .mock("GET", "/listings")
        .match_header("cookie", "ADVERTO_SSID=fe12cd34")
        .with_status(200)
        .with_body(listings_page(&[(4210001, 3), (4210002, 8)]))
        .create_async()
        .await;
    let remove = server
        .mock("POST", "/manager/remove-active/id/4210002")
        .match_header("cookie", "ADVERTO_SSID=fe12cd34")
        .with_status(200)
        .create_async()
        .await;

    let client = AdvertoClient::login(
        test_config(&server),
        Credentials::new("someone@example.com", "hunter2"),
    )
    .await
    .unwrap();

    let active = client.list_active().await.unwrap();
    assert_eq!(active.len(), 2);

    client.remove_one(4210002).await.unwrap();

    assert_eq!(client.session().await.ssid, "fe12cd34");
    login.assert_async().await;
    listings.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_wrong_password_surfaces_as_auth_error() {
    setup_logger();
    let mut server = Server::new_async().await;

    let _login = server
        .mock("POST", "/auth.php")
        .with_status(401)
        .create_async()
        .await;

    let result = AdvertoClient::login(
        test_config(&server),
        Credentials::new("someone@example.com", "wrong"),
    )
    .await;

    assert!(matches!(
        result.err(),
        Some(ClientError::Auth(AuthError::BadCredentials))
    ));
}

#[tokio::test]
async fn test_resumed_session_cannot_recover_from_expiry() {
    setup_logger();
    let mut server = Server::new_async().await;

    let _listings = server
        .mock("GET", "/listings")
        .match_header("cookie", "ADVERTO_SSID=resumed")
        .with_status(302)
        .with_header("Location", "/auth.php")
        .create_async()
        .await;
    let login = server
        .mock("POST", "/auth.php")
        .expect(0)
        .create_async()
        .await;

    let client = AdvertoClient::with_session(test_config(&server), "resumed").unwrap();
    let result = client.list_active().await;

    assert!(matches!(result, Err(ClientError::SessionExpired)));
    login.assert_async().await;
}
