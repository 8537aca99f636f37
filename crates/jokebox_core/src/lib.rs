//! # jokebox core
//!
//! The catalog engine: fetches jokes from a [`jokebox_fetch::JokeSource`],
//! encodes them as fixed-size records, refuses to persist duplicates, and
//! writes accepted records into an 11-slot ring in a
//! [`jokebox_storage::RecordStore`].
//!
//! This crate provides:
//! - [`Joke`] - the domain item (category + content) with its content-based
//!   ordering
//! - [`Catalog`] - the fetch-dedupe-store loop and write-cursor bookkeeping
//! - [`Config`] - retry and sentinel-storage policy

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod joke;

pub use catalog::{Catalog, RING_SLOTS};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use joke::Joke;

/// Version of the jokebox core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
