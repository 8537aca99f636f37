//! # jokebox fetch
//!
//! Remote joke source abstraction and the concrete JokeAPI client.
//!
//! The catalog layer only sees the [`JokeSource`] trait, so the actual
//! transport can be swapped out - the production [`HttpJokeSource`] talks to
//! [JokeAPI](https://jokeapi.dev) over blocking HTTP, while tests use the
//! queue-backed [`ScriptedSource`].
//!
//! Fetch failures surface as typed [`FetchError`] values. The historical
//! behavior of flattening every failure into the literal
//! [`FALLBACK_JOKE`] string is available to callers that want it, but is
//! no longer the default.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod http;
mod source;

pub use error::{FetchError, FetchResult};
pub use http::{HttpJokeSource, JOKE_API_URL};
pub use source::{JokeSource, ScriptedSource, FALLBACK_JOKE, KNOWN_CATEGORIES};
