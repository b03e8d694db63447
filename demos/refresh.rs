use adverto_client::application::models::ad::{ManagedAd, RefreshPolicy};
use adverto_client::client::AdvertoClient;
use adverto_client::config::Config;
use adverto_client::session::interface::Credentials;
use adverto_client::utils::logger::setup_logger;
use adverto_client::utils::refresh::refresh_stale;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let config = Config::new();

    let username = std::env::var("ADVERTO_USERNAME")?;
    let password = std::env::var("ADVERTO_PASSWORD")?;

    // Managed ads normally live in a store; a JSON file keeps the demo
    // self-contained.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "managed.json".to_string());
    let managed: Vec<ManagedAd> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    info!("Loaded {} managed ads from {}", managed.len(), path);

    let client = AdvertoClient::login(config, Credentials::new(username, password)).await?;
    let outcome = refresh_stale(&client, &managed, &RefreshPolicy::default()).await?;

    for (old_id, new_id) in &outcome.refreshed {
        info!("Listing {} republished as {}", old_id, new_id);
    }
    println!(
        "{} republished, {} untouched",
        outcome.refreshed.len(),
        outcome.untouched
    );

    Ok(())
}
