//! The listing extractor.
//!
//! Drives one WebDriver session against a search-results page and turns
//! every listing card in the initially rendered DOM into a
//! [`stayscout_common::Listing`]. Pagination is not followed; only the
//! first rendered page is captured.

use anyhow::{Context, Result};
use stayscout_browser::{BrowserDriver, Page, PageElement};
use stayscout_common::Listing;

/// CSS selectors for the fields of one listing card. The site tags its
/// result markup with stable `data-testid` attributes.
mod selectors {
    pub const PROPERTY_CARD: &str = "div[data-testid=\"property-card\"]";
    pub const TITLE: &str = "div[data-testid=\"title\"]";
    pub const ADDRESS: &str = "[data-testid=\"address\"]";
    pub const PRICE: &str = "[data-testid=\"price-and-discounted-price\"]";
    pub const TITLE_LINK: &str = "a[data-testid=\"title-link\"]";
    pub const IMAGE: &str = "[data-testid=\"image\"]";
}

pub struct ListingExtractor {
    webdriver_url: String,
    headless: bool,
}

impl ListingExtractor {
    pub fn new(webdriver_url: impl Into<String>, headless: bool) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            headless,
        }
    }

    /// Open a browser session against `results_url`, extract one listing
    /// per card, and close the session.
    ///
    /// A card missing any expected field fails the scrape — there is no
    /// partial-record recovery. The session is closed on the way out either
    /// way.
    pub async fn scrape(&self, results_url: &str) -> Result<Vec<Listing>> {
        let mut driver = BrowserDriver::connect(&self.webdriver_url, self.headless)
            .await
            .context("webdriver session failed to open")?;
        let result = match driver.goto(results_url).await {
            Ok(page) => extract_listings(&page).await,
            Err(e) => Err(e),
        };
        let _ = driver.close().await;
        result
    }
}

async fn extract_listings(page: &Page) -> Result<Vec<Listing>> {
    // Cards render after the initial document load; wait for the first one,
    // then snapshot them all.
    page.find_element(selectors::PROPERTY_CARD).await?;
    let cards = page.find_elements(selectors::PROPERTY_CARD).await?;
    tracing::info!(target: "scrape", card_count = cards.len(), "property cards located");

    let mut listings = Vec::with_capacity(cards.len());
    for (idx, card) in cards.iter().enumerate() {
        let listing = extract_card(card)
            .await
            .with_context(|| format!("listing card #{idx}"))?;
        listings.push(listing);
    }
    Ok(listings)
}

/// Build a fresh record from one card. Duplicate names are kept here; the
/// listing index collapses them later.
async fn extract_card(card: &PageElement) -> Result<Listing> {
    let name = card.find_element(selectors::TITLE).await?.text().await?;
    let address = card.find_element(selectors::ADDRESS).await?.text().await?;
    let price = card.find_element(selectors::PRICE).await?.text().await?;
    let url = require_attr(card, selectors::TITLE_LINK, "href").await?;
    let image = require_attr(card, selectors::IMAGE, "src").await?;

    Ok(Listing {
        name,
        address,
        price,
        url,
        image,
    })
}

async fn require_attr(card: &PageElement, selector: &str, attribute: &str) -> Result<String> {
    card.find_element(selector)
        .await?
        .attr(attribute)
        .await?
        .with_context(|| format!("missing attribute {attribute:?} on {selector}"))
}
