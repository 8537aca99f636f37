//! Blocking HTTP client for JokeAPI.

use crate::error::{FetchError, FetchResult};
use crate::source::JokeSource;
use serde::Deserialize;
use std::time::Duration;

/// Base URL for fetching jokes from JokeAPI.
pub const JOKE_API_URL: &str = "https://v2.jokeapi.dev/joke";

/// Content flags excluded from every request.
const BLACKLIST_FLAGS: &str = "religious,political,explicit,sexist,racist";

/// Default request timeout.
///
/// The upstream contract has no timeout at all; a blocking fetch could stall
/// the write loop indefinitely, so one is enforced here and is configurable
/// via [`HttpJokeSource::with_timeout`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A [`JokeSource`] backed by JokeAPI over blocking HTTP.
///
/// Requests ask for `type=single` jokes with the standard blacklist flags,
/// but two-part responses are still handled by joining setup and delivery,
/// since `Any`-category requests have been observed to return them.
///
/// # Example
///
/// ```no_run
/// use jokebox_fetch::{HttpJokeSource, JokeSource};
///
/// let source = HttpJokeSource::new().unwrap();
/// let text = source.fetch("Programming").unwrap();
/// println!("{text}");
/// ```
#[derive(Debug)]
pub struct HttpJokeSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

/// Wire shape of a JokeAPI response, covering the single, twopart, and
/// error payload variants.
#[derive(Debug, Deserialize)]
struct JokeResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    joke: Option<String>,
    #[serde(default)]
    setup: Option<String>,
    #[serde(default)]
    delivery: Option<String>,
}

impl HttpJokeSource {
    /// Creates a source against the public JokeAPI endpoint with the
    /// default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> FetchResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a source with a custom request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: JOKE_API_URL.to_string(),
        })
    }

    /// Overrides the base URL, mainly for tests against a local server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the base URL this source talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_url(&self, category: &str) -> String {
        format!(
            "{}/{}?blacklistFlags={}&type=single",
            self.base_url, category, BLACKLIST_FLAGS
        )
    }
}

impl JokeSource for HttpJokeSource {
    fn fetch(&self, category: &str) -> FetchResult<String> {
        let url = self.request_url(category);
        tracing::debug!(%url, "fetching joke");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body: JokeResponse = response.json()?;
        extract_joke(body)
    }
}

/// Pulls the joke text out of a parsed JokeAPI payload.
fn extract_joke(body: JokeResponse) -> FetchResult<String> {
    if body.error {
        return Err(FetchError::Api {
            message: body
                .message
                .unwrap_or_else(|| "unspecified API error".to_string()),
        });
    }

    match body.kind.as_deref() {
        Some("single") => body
            .joke
            .ok_or_else(|| FetchError::malformed("single joke without a joke field")),
        Some("twopart") => match (body.setup, body.delivery) {
            (Some(setup), Some(delivery)) => Ok(format!("{setup} {delivery}")),
            _ => Err(FetchError::malformed(
                "twopart joke missing setup or delivery",
            )),
        },
        other => Err(FetchError::malformed(format!(
            "unknown joke type {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FetchResult<String> {
        let body: JokeResponse = serde_json::from_str(json).unwrap();
        extract_joke(body)
    }

    #[test]
    fn single_joke_extracts_joke_field() {
        let json = r#"{
            "error": false,
            "category": "Programming",
            "type": "single",
            "joke": "A SQL query walks into a bar and joins two tables.",
            "id": 1,
            "safe": true,
            "lang": "en"
        }"#;
        assert_eq!(
            parse(json).unwrap(),
            "A SQL query walks into a bar and joins two tables."
        );
    }

    #[test]
    fn twopart_joke_joins_setup_and_delivery() {
        let json = r#"{
            "error": false,
            "type": "twopart",
            "setup": "Why do programmers prefer dark mode?",
            "delivery": "Because light attracts bugs."
        }"#;
        assert_eq!(
            parse(json).unwrap(),
            "Why do programmers prefer dark mode? Because light attracts bugs."
        );
    }

    #[test]
    fn api_error_payload_surfaces_message() {
        let json = r#"{
            "error": true,
            "message": "No matching joke found"
        }"#;
        assert!(matches!(
            parse(json),
            Err(FetchError::Api { message }) if message == "No matching joke found"
        ));
    }

    #[test]
    fn missing_joke_field_is_malformed() {
        let json = r#"{"error": false, "type": "single"}"#;
        assert!(matches!(parse(json), Err(FetchError::Malformed { .. })));
    }

    #[test]
    fn unknown_type_is_malformed() {
        let json = r#"{"error": false, "type": "limerick", "joke": "nope"}"#;
        assert!(matches!(parse(json), Err(FetchError::Malformed { .. })));
    }

    #[test]
    fn request_url_includes_category_and_flags() {
        let source = HttpJokeSource::new()
            .unwrap()
            .with_base_url("http://localhost:9999/joke");
        let url = source.request_url("Misc");
        assert_eq!(
            url,
            "http://localhost:9999/joke/Misc?blacklistFlags=religious,political,explicit,sexist,racist&type=single"
        );
    }
}
