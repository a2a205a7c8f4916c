//! HTTP client for the MediaWiki query API.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::clade::error::CladeError;
use crate::clade::taxonomy::{parse_clade, Clade};

/// Client for fetching clade data from a MediaWiki query API.
///
/// One lookup requests the parsed HTML of the intro section (revision
/// content, section 0) of the page titled with the dinosaur's name, then
/// scans it for a taxonomy table.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Response shape of `action=query&prop=revisions`: pages keyed by an
/// opaque page id, each with a revision list whose content sits under the
/// legacy `*` key.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: QueryBody,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    #[serde(rename = "*")]
    content: String,
}

impl QueryResponse {
    /// Content of the first revision of the first (and only) page, if any.
    fn first_revision_content(self) -> Option<String> {
        self.query
            .pages
            .into_values()
            .next()
            .and_then(|page| page.revisions.into_iter().next())
            .map(|revision| revision.content)
    }
}

impl WikiClient {
    /// Create a client against the given MediaWiki API base URL.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self, CladeError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Look up the clade for one dinosaur name.
    ///
    /// `Ok(None)` means the page was fetched but carries no allow-listed
    /// clade; an `Err` means the fetch itself failed (non-success status,
    /// network failure, or a response without the expected revision shape).
    pub async fn fetch_clade(&self, title: &str) -> Result<Option<Clade>, CladeError> {
        let url = self.build_query_url(title)?;
        debug!(title, "fetching wiki intro section");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CladeError::Api {
                status: status.as_u16(),
            });
        }

        let body: QueryResponse = response.json().await?;
        let fragment = body.first_revision_content().ok_or_else(|| {
            CladeError::UnexpectedResponse(format!("no revision content for '{title}'"))
        })?;

        let clade = parse_clade(&fragment);
        match clade {
            Some(clade) => info!(title, %clade, "parsed clade"),
            None => info!(title, "no allow-listed clade found"),
        }

        Ok(clade)
    }

    fn build_query_url(&self, title: &str) -> Result<Url, CladeError> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("action", "query"),
                ("prop", "revisions"),
                ("rvprop", "content"),
                ("format", "json"),
                ("titles", title),
                ("rvsection", "0"),
                ("rvparse", ""),
                ("origin", "*"),
            ],
        )?;
        Ok(url)
    }
}

#[cfg(test)]
impl WikiClient {
    /// Point the client at a mock server (for testing only)
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }
}
