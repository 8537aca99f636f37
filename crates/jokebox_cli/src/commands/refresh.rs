//! Refresh command implementation.

use jokebox_core::Catalog;
use jokebox_fetch::HttpJokeSource;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Number of jokes fetched per refresh: five Misc, then five Programming,
/// matching the original application's refresh pass over the ring.
const REFRESH_COUNT: u64 = 10;

/// Runs the refresh command.
///
/// Resets the write cursor and fills the ring from the top. Individual
/// fetch failures are logged and skipped rather than aborting the whole
/// refresh; this is the one place failures are swallowed, at the boundary
/// closest to the user.
pub fn run(
    path: &Path,
    record_size: usize,
    timeout_secs: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = HttpJokeSource::with_timeout(Duration::from_secs(timeout_secs))?;
    let mut catalog = Catalog::open(path, record_size, source)?;

    info!(?path, record_size, "refreshing joke ring");
    catalog.reset_cursor();

    let mut stored = 0u64;
    for order in 0..REFRESH_COUNT {
        let category = if order < 5 { "Misc" } else { "Programming" };

        match catalog.fetch_and_store(category) {
            Ok(slot) => {
                stored += 1;
                println!("[{}/{}] stored {} joke in slot {}", order + 1, REFRESH_COUNT, category, slot);
            }
            Err(err) => {
                warn!(category, error = %err, "skipping joke");
            }
        }
    }

    catalog.sync()?;
    println!("refresh complete: {stored}/{REFRESH_COUNT} jokes stored");
    Ok(())
}
