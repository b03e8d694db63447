use adverto_client::client::AdvertoClient;
use adverto_client::config::Config;
use adverto_client::session::interface::Credentials;
use adverto_client::utils::logger::setup_logger;
use anyhow::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logger();
    let config = Config::new();

    let username = std::env::var("ADVERTO_USERNAME")?;
    let password = std::env::var("ADVERTO_PASSWORD")?;

    let client = AdvertoClient::login(config, Credentials::new(username, password)).await?;
    info!("Logged in, session {}", client.session().await);

    let listings = client.list_active().await?;
    for listing in &listings {
        info!("Listing {} at position {}", listing.id, listing.order);
    }
    println!("{} active listings", listings.len());

    Ok(())
}
