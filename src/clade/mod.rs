//! # Clade Enricher
//!
//! Looks up a dinosaur name against the Wikipedia query API, parses the
//! returned intro-section HTML for a taxonomy table, and extracts the
//! first classification found among the fixed clade set
//! {Sauropodomorpha, Theropoda, Ornithischia} (a Weishampel-style
//! top-level split).
//!
//! ## Key components
//!
//! - [`Clade`]: the typed allow-list; no other taxonomic rank is ever
//!   representable
//! - [`WikiClient`]: the MediaWiki revisions query with typed response
//!   parsing
//! - [`parse_clade`]: the taxobox row scan

mod client;
mod error;
mod taxonomy;

pub use client::WikiClient;
pub use error::CladeError;
pub use taxonomy::{parse_clade, Clade};
