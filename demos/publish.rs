use adverto_client::application::models::ad::AdDraft;
use adverto_client::client::AdvertoClient;
use adverto_client::config::Config;
use adverto_client::session::interface::Credentials;
use adverto_client::utils::logger::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    let config = Config::new();

    let username = std::env::var("ADVERTO_USERNAME")?;
    let password = std::env::var("ADVERTO_PASSWORD")?;

    // Any image paths on the command line go onto the listing in order.
    let mut images = Vec::new();
    for path in std::env::args().skip(1) {
        images.push(std::fs::read(&path)?);
    }

    let draft = AdDraft {
        title: "Mountain bike".to_string(),
        description: "Hardtail, barely used. Pickup only.".to_string(),
        price: 25000,
        category_id: 619,
        images,
    };

    let client = AdvertoClient::login(config, Credentials::new(username, password)).await?;
    let id = client.publish(&draft).await?;

    info!("Published listing {}", id);
    println!("new listing id: {id}");

    Ok(())
}
