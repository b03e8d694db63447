use adverto_client::application::models::ad::{AdDraft, ManagedAd, RefreshPolicy};
use adverto_client::client::AdvertoClient;
use adverto_client::utils::logger::setup_logger;
use adverto_client::utils::refresh::refresh_stale;
use chrono::Utc;
use mockito::Server;
use pretty_assertions::assert_eq;

use crate::helpers::{form_page, image_reply, listings_page, test_config};

fn create_managed(listing_id: i64, images: usize) -> ManagedAd {
    ManagedAd {
        listing_id,
        draft: AdDraft {
            title: "Winter tires".to_string(),
            description: "Set of four, one season".to_string(),
            price: 12000,
            category_id: 310,
            images: (0..images).map(|n| vec![n as u8; 16]).collect(),
        },
        posted_at: Some(Utc::now()),
    }
}

#[tokio::test]
async fn test_stale_listing_removed_and_republished() {
    setup_logger();
    let mut server = Server::new_async().await;

    // 4210001 sank to position 6, 4210002 is still near the top.
    let listings = server
        .mock("GET", "/listings")
        .with_status(200)
        .with_body(listings_page(&[(4210001, 6), (4210002, 2)]))
        .expect(1)
        .create_async()
        .await;
    let remove = server
        .mock("POST", "/manager/remove-active/id/4210001")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let form = server
        .mock("POST", "/select-package.php")
        .with_status(200)
        .with_body(form_page())
        .expect(1)
        .create_async()
        .await;
    let store = server
        .mock("POST", "/include/image-proxy.php")
        .with_status(200)
        .with_body(image_reply())
        .expect(1)
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/submit.php")
        .with_status(302)
        .with_header("Location", "http://post.adverto.com/confirm/4210099")
        .expect(1)
        .create_async()
        .await;

    let client = AdvertoClient::with_session(test_config(&server), "fe12cd34").unwrap();
    let managed = vec![create_managed(4210001, 1), create_managed(4210002, 0)];

    let outcome = refresh_stale(&client, &managed, &RefreshPolicy::default())
        .await
        .unwrap();

    assert_eq!(outcome.refreshed, vec![(4210001, 4210099)]);
    assert_eq!(outcome.untouched, 1);
    listings.assert_async().await;
    remove.assert_async().await;
    form.assert_async().await;
    store.assert_async().await;
    submit.assert_async().await;
}

#[tokio::test]
async fn test_nothing_stale_means_no_requests_beyond_the_page() {
    setup_logger();
    let mut server = Server::new_async().await;

    let _listings = server
        .mock("GET", "/listings")
        .with_status(200)
        .with_body(listings_page(&[(4210001, 2), (4210002, 3)]))
        .create_async()
        .await;
    let remove = server
        .mock("POST", "/manager/remove-active/id/4210001")
        .expect(0)
        .create_async()
        .await;
    let submit = server
        .mock("POST", "/submit.php")
        .expect(0)
        .create_async()
        .await;

    let client = AdvertoClient::with_session(test_config(&server), "fe12cd34").unwrap();
    let managed = vec![create_managed(4210001, 0), create_managed(4210002, 0)];

    let outcome = refresh_stale(&client, &managed, &RefreshPolicy::default())
        .await
        .unwrap();

    assert!(outcome.refreshed.is_empty());
    assert_eq!(outcome.untouched, 2);
    remove.assert_async().await;
    submit.assert_async().await;
}

#[tokio::test]
async fn test_vanished_listing_left_alone() {
    setup_logger();
    let mut server = Server::new_async().await;

    let _listings = server
        .mock("GET", "/listings")
        .with_status(200)
        .with_body(listings_page(&[(4210002, 2)]))
        .create_async()
        .await;
    let remove = server
        .mock("POST", "/manager/remove-active/id/4210001")
        .expect(0)
        .create_async()
        .await;

    let client = AdvertoClient::with_session(test_config(&server), "fe12cd34").unwrap();
    let managed = vec![create_managed(4210001, 0), create_managed(4210002, 0)];

    let outcome = refresh_stale(&client, &managed, &RefreshPolicy::default())
        .await
        .unwrap();

    assert!(outcome.refreshed.is_empty());
    assert_eq!(outcome.untouched, 2);
    remove.assert_async().await;
}
