use anyhow::{Context, Result};
use stayscout_common::observability::{init_logging, LogConfig, LogFormat};
use stayscout_config::{StayscoutConfig, StayscoutConfigLoader};
use stayscout_places::{PlacesApi, ReviewEnricher};
use stayscout_scrape::ListingExtractor;
use stayscout_store::JsonStore;

mod preview;
mod render;
mod session;

use session::SessionLoop;

#[tokio::main]
async fn main() -> Result<()> {
    // 1) Load config (env wins)
    let cfg: StayscoutConfig = StayscoutConfigLoader::new()
        .with_file("stayscout.yaml")
        .load()
        .context("failed to load stayscout.yaml")?;

    init_logging(LogConfig {
        log_dir: cfg.logging.dir.clone(),
        emit_stderr: cfg.logging.stderr,
        format: if cfg.logging.json {
            LogFormat::Json
        } else {
            LogFormat::Text
        },
        default_filter: cfg.logging.filter.clone(),
        ..LogConfig::default()
    })?;

    let store = JsonStore::new(cfg.storage.listings_path, cfg.storage.review_path);

    // Scrape once per run; the persisted set is immutable for the rest of
    // the session, including "new search" restarts.
    let extractor = ListingExtractor::new(&cfg.browser.webdriver_url, cfg.browser.headless);
    let listings = extractor
        .scrape(&cfg.search.results_url)
        .await
        .context("listing scrape failed")?;
    tracing::info!(listing_count = listings.len(), "scrape complete");
    store.save_listings(&listings)?;

    let api = PlacesApi::new(&cfg.places.endpoint, cfg.places.api_key)?;
    let enricher = ReviewEnricher::new(api, cfg.places.nearby_radius_m, cfg.places.nearby_category);

    SessionLoop::new(store, enricher)?.run().await
}
