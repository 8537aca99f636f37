//! CLI command implementations.

pub mod fetch;
pub mod inspect;
pub mod next;
pub mod refresh;
pub mod show;
