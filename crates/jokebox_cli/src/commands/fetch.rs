//! Fetch command implementation.

use jokebox_fetch::{HttpJokeSource, JokeSource, KNOWN_CATEGORIES};
use std::time::Duration;

/// Runs the fetch command: prints one joke without touching the store.
pub fn run(category: &str, timeout_secs: u64) -> Result<(), Box<dyn std::error::Error>> {
    let known = KNOWN_CATEGORIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(category));
    if !known {
        return Err(format!(
            "unknown category {category:?}; known categories: {}",
            KNOWN_CATEGORIES.join(", ")
        )
        .into());
    }

    let source = HttpJokeSource::with_timeout(Duration::from_secs(timeout_secs))?;
    let text = source.fetch(category)?;
    println!("{text}");
    Ok(())
}
