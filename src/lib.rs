//! # dinodex - dinosaur profile scraper and enrichment service
//!
//! This crate scrapes dinosaur profile pages from a content site, normalizes
//! loosely structured prose ("Up to 40 feet long and several tons") into
//! typed, comparable fields, enriches every record with a taxonomic clade
//! fetched from the Wikipedia query API, and serves the aggregate as a JSON
//! array over HTTP.
//!
//! ## Pipeline stages
//!
//! - `normalize`: pure text normalizers (period cleaning, size/weight
//!   splitting and validation, length/weight formatting, number-word
//!   conversion)
//! - `scrape`: per-page entry extraction driven by an injected
//!   [`PageSchema`](scrape::PageSchema) of CSS selectors
//! - `clade`: Wikipedia taxobox lookup restricted to a fixed clade set
//! - `pipeline`: concurrent page fetching, batched enrichment with a fixed
//!   inter-batch delay, final name sort
//! - `server`: the `GET /api/scraper` JSON endpoint
//!
//! ## Example
//!
//! ```rust,no_run
//! use dinodex::pipeline;
//! use dinodex::scrape::ScrapeConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScrapeConfig::default();
//!     let entries = pipeline::run(&config).await?;
//!     println!("{}", serde_json::to_string_pretty(&entries)?);
//!     Ok(())
//! }
//! ```

mod error;

pub mod clade;
pub mod normalize;
pub mod pipeline;
pub mod scrape;
pub mod server;

pub use error::Error;

/// Re-export of common types for public use
pub mod prelude {
    pub use crate::clade::Clade;
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::scrape::{DinosaurEntry, PageSchema, ScrapeConfig};
}
