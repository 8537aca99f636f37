//! Inspect command implementation.

use jokebox_codec::{decode_category, decode_content};
use jokebox_storage::{FileStore, RecordStore};
use serde::Serialize;
use std::path::Path;

/// Store inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Record file path.
    pub path: String,
    /// Configured record size in bytes.
    pub record_size: usize,
    /// Number of complete slots.
    pub slots: u64,
    /// Per-slot summaries.
    pub records: Vec<SlotSummary>,
}

/// Summary of a single slot.
#[derive(Debug, Serialize)]
pub struct SlotSummary {
    /// Slot index.
    pub slot: u64,
    /// Decoded category label.
    pub category: String,
    /// Leading characters of the joke text.
    pub preview: String,
}

/// Width of the content preview in characters.
const PREVIEW_WIDTH: usize = 40;

/// Runs the inspect command.
pub fn run(path: &Path, record_size: usize, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("no record file found at {path:?}").into());
    }

    let store = FileStore::open(path, record_size)?;
    let slots = store.len()?;

    let mut records = Vec::with_capacity(slots as usize);
    for slot in 0..slots {
        let record = store.read(slot)?;
        records.push(SlotSummary {
            slot,
            category: decode_category(&record)?,
            preview: decode_content(&record)?.chars().take(PREVIEW_WIDTH).collect(),
        });
    }

    let result = InspectResult {
        path: path.display().to_string(),
        record_size,
        slots,
        records,
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            println!("Record file: {}", result.path);
            println!("Record size: {} bytes", result.record_size);
            println!("Slots:       {}", result.slots);
            for summary in &result.records {
                println!(
                    "  [{:>2}] {:<15} {}",
                    summary.slot, summary.category, summary.preview
                );
            }
        }
    }

    Ok(())
}
