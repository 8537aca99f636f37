//! Show command implementation.

use jokebox_codec::{decode_category, decode_content};
use jokebox_storage::{FileStore, RecordStore};
use std::path::Path;

/// Runs the show command.
pub fn run(path: &Path, record_size: usize, slot: u64) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileStore::open(path, record_size)?;

    let record = store.read(slot)?;
    if record.is_empty() {
        return Err(format!("slot {slot} is past the end of the store").into());
    }

    println!("Category: {}", decode_category(&record)?);
    println!("{}", decode_content(&record)?);
    Ok(())
}
