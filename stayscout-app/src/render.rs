//! Terminal rendering of listings, reviews, and the rating histogram.

use console::style;
use stayscout_common::{rating_distribution, Listing, ReviewRecord};

/// Nearby places shown per request.
const NEARBY_DISPLAY_LIMIT: usize = 5;

/// Width of the longest histogram bar, in cells.
const HISTOGRAM_WIDTH: usize = 40;

pub fn show_listing(listing: &Listing) {
    println!(
        "{} is located in {} and it costs {}.",
        style(&listing.name).bold(),
        listing.address,
        style(&listing.price).green()
    );
    println!();
}

pub fn show_reviews(record: &ReviewRecord) {
    println!(
        "The overall rating is {} from {} reviews.",
        style(&record.rating).bold(),
        record.review_count
    );
    if record.reviews.is_empty() {
        println!("Sorry, there are no reviews for now.");
        return;
    }

    println!("Here are some reviews from past customers.");
    println!();
    for review in &record.reviews {
        println!("User: {}", review.author);
        println!("Review: {}", review.text);
        println!("Rating: {}", review.rating);
        println!();
    }

    let buckets = rating_distribution(record.reviews.iter().map(|r| r.rating));
    println!("Rating distribution of {}:", record.name);
    for line in histogram_lines(&buckets) {
        println!("{line}");
    }
}

pub fn show_nearby(record: &ReviewRecord) {
    if record.nearby_places.is_empty() {
        println!("No interesting places found near {}.", record.name);
        return;
    }

    println!("Here are some interesting places near {}!", record.name);
    println!();
    for place in record.nearby_places.iter().take(NEARBY_DISPLAY_LIMIT) {
        println!("{}", style(&place.name).bold());
        println!("Rating: {}", place.rating);
        println!();
    }
}

/// One bar per score bucket, widest bar scaled to [`HISTOGRAM_WIDTH`].
fn histogram_lines(buckets: &[usize; 5]) -> Vec<String> {
    let max = buckets.iter().copied().max().unwrap_or(0).max(1);
    buckets
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let width = count * HISTOGRAM_WIDTH / max;
            format!("{} | {} {}", i + 1, "█".repeat(width), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_shows_every_bucket_count() {
        let buckets = rating_distribution([5.0, 4.0, 5.0, 3.0, 5.0]);
        let lines = histogram_lines(&buckets);

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("1 |"));
        assert!(lines[2].ends_with(" 1")); // one 3-star review
        assert!(lines[3].ends_with(" 1")); // one 4-star review
        assert!(lines[4].ends_with(" 3")); // three 5-star reviews
    }

    #[test]
    fn histogram_scales_widest_bar_to_full_width() {
        let lines = histogram_lines(&[0, 0, 0, 2, 4]);
        let bar_len = |line: &str| line.chars().filter(|&c| c == '█').count();

        assert_eq!(bar_len(&lines[4]), HISTOGRAM_WIDTH);
        assert_eq!(bar_len(&lines[3]), HISTOGRAM_WIDTH / 2);
        assert_eq!(bar_len(&lines[0]), 0);
    }
}
