use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::application::models::ad::{ActiveListing, ManagedAd, RefreshOutcome, RefreshPolicy};
use crate::client::AdvertoClient;
use crate::error::ClientError;

/// True when a listing's page position or age calls for a republish.
pub fn is_stale(listing: &ActiveListing, managed: &ManagedAd, policy: &RefreshPolicy) -> bool {
    if listing.order > policy.max_order {
        return true;
    }

    match (policy.max_age, managed.posted_at) {
        (Some(max_age), Some(posted_at)) => Utc::now() - posted_at > max_age,
        _ => false,
    }
}

/// One refresh pass over the managed ads: every ad whose listing went stale
/// is removed and republished under a fresh id. Ads no longer on the page
/// are left alone. The first failure aborts the pass; the scheduler that
/// invokes this owns retry.
#[instrument(skip(client, managed, policy))]
pub async fn refresh_stale(
    client: &AdvertoClient,
    managed: &[ManagedAd],
    policy: &RefreshPolicy,
) -> Result<RefreshOutcome, ClientError> {
    let active = client.list_active().await?;

    let mut outcome = RefreshOutcome::default();
    for ad in managed {
        let listing = match active.iter().find(|listing| listing.id == ad.listing_id) {
            Some(listing) => listing,
            None => {
                debug!("Listing {} no longer on the page, skipping", ad.listing_id);
                outcome.untouched += 1;
                continue;
            }
        };

        if !is_stale(listing, ad, policy) {
            outcome.untouched += 1;
            continue;
        }

        info!(
            "Refreshing listing {} at position {}",
            listing.id, listing.order
        );
        client.remove_one(ad.listing_id).await?;
        let new_id = client.publish(&ad.draft).await?;
        outcome.refreshed.push((ad.listing_id, new_id));
    }

    info!(
        "Refresh pass done: {} republished, {} untouched",
        outcome.refreshed.len(),
        outcome.untouched
    );
    Ok(outcome)
}
