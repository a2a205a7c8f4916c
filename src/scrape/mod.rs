//! # Page Entry Extractor
//!
//! This module turns one fetched dinosaur list page into structured
//! [`DinosaurEntry`] records. The structural coupling to the source site's
//! markup is held in an injected [`PageSchema`] of CSS selectors, so tests
//! (or an alternate source) can swap selectors without touching the
//! extraction logic.
//!
//! ## Key components
//!
//! - [`DinosaurEntry`]: the sole domain entity, an immutable value object
//! - [`PageSchema`] / [`ScrapeConfig`]: injected selectors and pipeline
//!   settings
//! - [`extract_entries`] / [`fetch_page`]: per-page extraction and the
//!   page-level fetch wrapper

mod config;
mod error;
mod page;

pub use config::{PageSchema, ScrapeConfig, ScrapeConfigBuilder};
pub use error::ScrapeError;
pub use page::{extract_entries, fetch_page};

use serde::{Deserialize, Serialize};

use crate::clade::Clade;

/// A single dinosaur record extracted from a profile page.
///
/// Entries are value objects: once built they are never mutated, only
/// replaced wholesale (see [`DinosaurEntry::with_classification`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinosaurEntry {
    /// Display name, taken verbatim from the entry heading
    pub name: String,

    /// Era description with parenthetical date ranges stripped
    pub historical_period: String,

    /// `"<value> <unit>"` with unit in {foot, feet, inches}, case preserved
    pub length: String,

    /// `"<value> <unit>"` with unit in {pounds, tons, ounces}; qualitative
    /// values (half/few/less) kept verbatim
    pub weight: String,

    /// Diet description, verbatim
    pub diet: String,

    /// Taxonomic clade, absent when the lookup found none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Clade>,
}

impl DinosaurEntry {
    /// Return a new entry with the given classification attached.
    pub fn with_classification(self, classification: Option<Clade>) -> Self {
        Self {
            classification,
            ..self
        }
    }
}
