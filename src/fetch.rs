//! Remote lookup of MTE details.
//!
//! A thin boundary around the details endpoint: one GET per export, a hard
//! 200-status gate, and recovery of the event id from the resolved URL.

use std::time::Duration;

use crate::model::MteDetails;

/// Errors from the transport layer itself.
///
/// A non-200 status is not an error here; it is reported through
/// [`DetailsResponse::HttpStatus`] so the pipeline can skip quietly.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Outcome of one details lookup.
#[derive(Debug)]
pub enum DetailsResponse {
    /// A 200 response with its parsed payload and the event id recovered
    /// from the resolved URL.
    Success { mte_id: String, details: MteDetails },

    /// Anything other than 200. The export is skipped, not failed.
    HttpStatus(u16),
}

/// Client for the MTE details endpoint.
pub struct DetailsClient {
    http: reqwest::blocking::Client,
    details_url: String,
}

impl DetailsClient {
    /// Build a client for the given endpoint.
    pub fn new(details_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("mte-export/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            details_url: details_url.into(),
        })
    }

    /// Fetch the closure collection for one event.
    pub fn fetch(&self, mte_id: &str) -> Result<DetailsResponse, FetchError> {
        let url = format!("{}?id={}", self.details_url, mte_id);
        let response = self.http.get(&url).send()?;

        let status = response.status().as_u16();
        if status != 200 {
            return Ok(DetailsResponse::HttpStatus(status));
        }

        // The id stamped on output rows comes from the URL the request
        // resolved to, not from the caller: redirects may rewrite it.
        let mte_id = id_from_url(response.url().as_str()).to_string();
        let details: MteDetails = response.json()?;

        Ok(DetailsResponse::Success { mte_id, details })
    }
}

/// The substring after the last `id=` in a URL, or the whole string when the
/// marker is absent.
pub fn id_from_url(url: &str) -> &str {
    match url.rfind("id=") {
        Some(idx) => &url[idx + "id=".len()..],
        None => url,
    }
}
