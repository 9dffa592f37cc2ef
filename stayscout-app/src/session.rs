//! The interactive session loop.
//!
//! One pass through a search: prompt for a budget, filter the scraped
//! listings, present the first match, enrich it, then dispatch menu
//! commands until the user restarts or quits. Bad input never ends the
//! session — it prints a notice and re-prompts.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use stayscout_common::{within_budget, ListingIndex};
use stayscout_places::{Enrichment, ReviewEnricher};
use stayscout_store::JsonStore;

use crate::preview::Previewer;
use crate::render;

const MENU_PROMPT: &str = "Enter 1 for hotel reviews, 2 for nearby places, \
3 to open the booking page, 4 to start a new search, 5 to quit";

/// Menu commands, dispatched with an exhaustive match. Unrecognized input
/// is the parse-failure case, handled before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowReviews,
    ShowNearby,
    OpenBooking,
    NewSearch,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ShowReviews),
            "2" => Some(Self::ShowNearby),
            "3" => Some(Self::OpenBooking),
            "4" => Some(Self::NewSearch),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Free-form budget text → number. Rejects non-finite values so a budget
/// always compares meaningfully against prices.
pub fn parse_budget(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// How one search pass ended.
enum Outcome {
    NewSearch,
    Quit,
}

pub struct SessionLoop {
    store: JsonStore,
    enricher: ReviewEnricher,
    previewer: Previewer,
    theme: ColorfulTheme,
}

impl SessionLoop {
    pub fn new(store: JsonStore, enricher: ReviewEnricher) -> Result<Self> {
        Ok(Self {
            store,
            enricher,
            previewer: Previewer::new()?,
            theme: ColorfulTheme::default(),
        })
    }

    pub async fn run(&self) -> Result<()> {
        println!("{}", style("Welcome to Stayscout hotel planning!").bold());
        println!();

        loop {
            match self.run_search().await? {
                Outcome::NewSearch => {
                    tracing::info!(target: "session", "restarting search");
                    continue;
                }
                Outcome::Quit => break,
            }
        }

        println!("{}", style("Thank you! Have a nice trip.").bold());
        Ok(())
    }

    /// One full pass: budget → filter → present → enrich → menu.
    async fn run_search(&self) -> Result<Outcome> {
        // A restart discards in-memory state, so each pass re-reads the
        // persisted listing set.
        let listings = self.store.load_listings()?;
        let index = ListingIndex::build(&listings);

        let listing = loop {
            let budget = self.prompt_budget()?;
            let fit = within_budget(&listings, budget)?;
            match fit.first() {
                Some(name) => {
                    println!("Nice! Here's what we found for you: {name}.");
                    println!();
                    // Filter names come from the same set the index was
                    // built from, so the lookup cannot miss.
                    break index
                        .get(name)
                        .expect("filtered name is present in the index")
                        .clone();
                }
                None => {
                    println!(
                        "{}",
                        style("Sorry, no hotel fits that budget. Please adjust your expectation.")
                            .yellow()
                    );
                }
            }
        };

        render::show_listing(&listing);
        if let Err(e) = self.previewer.show_image(&listing.image).await {
            tracing::warn!(target: "session", error = %e, "image preview failed");
            println!("{}", style("(could not preview the hotel image)").dim());
        }

        match self.enricher.enrich(&listing.name, &self.store).await? {
            Enrichment::Found(_) => {}
            Enrichment::NotFound => {
                println!(
                    "{}",
                    style("Sorry, this hotel could not be found on the map.").yellow()
                );
            }
        }
        // Render from the persisted record, the same document a later run
        // would see.
        let record = self.store.load_review()?;

        loop {
            let choice: String = Input::with_theme(&self.theme)
                .with_prompt(MENU_PROMPT)
                .interact_text()?;
            let Some(command) = Command::parse(&choice) else {
                println!(
                    "{}",
                    style("Invalid input, please enter a number between 1-5.").red()
                );
                continue;
            };

            match command {
                Command::ShowReviews => render::show_reviews(&record),
                Command::ShowNearby => render::show_nearby(&record),
                Command::OpenBooking => {
                    if let Err(e) = self.previewer.open_booking(&listing.url) {
                        tracing::warn!(target: "session", error = %e, "booking page failed to open");
                        println!("{}", style("(could not open the booking page)").dim());
                    }
                }
                Command::NewSearch => return Ok(Outcome::NewSearch),
                Command::Quit => return Ok(Outcome::Quit),
            }
        }
    }

    fn prompt_budget(&self) -> Result<f64> {
        loop {
            let raw: String = Input::with_theme(&self.theme)
                .with_prompt("How much do you want to spend in total (USD)?")
                .interact_text()?;
            match parse_budget(&raw) {
                Some(budget) => return Ok(budget),
                None => println!("{}", style("Invalid input, please enter a number.").red()),
            }
        }
    }
}
