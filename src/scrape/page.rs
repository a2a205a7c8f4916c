//! Per-page extraction of dinosaur entries.
//!
//! One source page carries a list of "entry containers", each holding a
//! heading with the dinosaur's name and a run of text blocks with labeled
//! fields. Field values appear in three shapes:
//!
//! - `"Historical Period: Late Jurassic"` - label and value in one block
//! - a block that is exactly the bare label, value in the very next block
//! - `"DietPlants"` - label glued to the value with no colon or space
//!
//! The first block satisfying one of those patterns wins per field; later
//! blocks never overwrite a resolved field. The bare-label shape only
//! consults the single immediately following block, so a value wrapped
//! further away is lost (matching the source layout this extractor is
//! coupled to).

use scraper::{Html, Selector};
use tracing::warn;

use crate::normalize::{
    clean_historical_period, format_length, format_weight, is_valid_measurements,
    split_size_and_weight,
};
use crate::scrape::{DinosaurEntry, PageSchema, ScrapeError};

const PERIOD_LABEL: &str = "Historical Period";
const SIZE_WEIGHT_LABEL: &str = "Size and Weight";
const DIET_LABEL: &str = "Diet";

/// Fetch one source page and extract every dinosaur entry on it.
///
/// A network or HTTP-status failure is a page-level error the caller is
/// expected to drop without aborting other pages. A page that loads but
/// matches zero entries is not an error: it logs a warning and returns an
/// empty vec.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    schema: &PageSchema,
) -> Result<Vec<DinosaurEntry>, ScrapeError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let html = response.text().await?;

    let entries = extract_entries(&html, schema)?;
    if entries.is_empty() {
        warn!(url, "unable to scrape any entries from page");
    }

    Ok(entries)
}

/// Extract all dinosaur entries from one HTML document, in document order.
///
/// A container is silently skipped when any of the three fields is missing
/// or the combined size/weight text fails
/// [`is_valid_measurements`](crate::normalize::is_valid_measurements).
pub fn extract_entries(html: &str, schema: &PageSchema) -> Result<Vec<DinosaurEntry>, ScrapeError> {
    let container_sel = parse_selector(&schema.entry_container)?;
    let heading_sel = parse_selector(&schema.heading)?;
    let block_sel = parse_selector(&schema.text_block)?;

    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    for container in document.select(&container_sel) {
        let name = container
            .select(&heading_sel)
            .next()
            .map(|heading| heading.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let blocks: Vec<String> = container
            .select(&block_sel)
            .map(|block| block.text().collect::<String>().trim().to_string())
            .collect();

        let fields = blocks
            .iter()
            .enumerate()
            .fold(FieldAccumulator::default(), |acc, (i, text)| {
                acc.absorb(text, blocks.get(i + 1).map(String::as_str))
            });

        if let Some(entry) = fields.into_entry(name) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Immutable accumulator folded over a container's text blocks.
///
/// Each step returns a new accumulator with at most one field filled in,
/// which makes the first-match-wins rule per field explicit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct FieldAccumulator {
    period: Option<String>,
    size_weight: Option<String>,
    diet: Option<String>,
}

impl FieldAccumulator {
    fn absorb(self, text: &str, next: Option<&str>) -> Self {
        Self {
            period: self.period.or_else(|| match_label(text, PERIOD_LABEL, next)),
            size_weight: self
                .size_weight
                .or_else(|| match_label(text, SIZE_WEIGHT_LABEL, next)),
            diet: self.diet.or_else(|| match_label(text, DIET_LABEL, next)),
        }
    }

    fn into_entry(self, name: String) -> Option<DinosaurEntry> {
        let (period, size_weight, diet) = (self.period?, self.size_weight?, self.diet?);
        if !is_valid_measurements(&size_weight) {
            return None;
        }

        let (length, weight) = split_size_and_weight(&size_weight);
        Some(DinosaurEntry {
            name,
            historical_period: clean_historical_period(&period),
            length: format_length(&length),
            weight: format_weight(&weight),
            diet,
            classification: None,
        })
    }
}

/// Match one text block against one field label.
///
/// Returns the field value when the block is `"<label>: <value>"`,
/// `"<label><value>"`, or exactly the bare label (with the value taken from
/// the next block). Empty values are treated as no match so a later block
/// can still resolve the field.
fn match_label(text: &str, label: &str, next: Option<&str>) -> Option<String> {
    let with_colon = format!("{label}:");

    if text == label || text == with_colon {
        return next
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
    }

    let rest = text
        .strip_prefix(&with_colon)
        .or_else(|| text.strip_prefix(label))?;
    let value = rest.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_block(name: &str, period: &str, size_weight: &str, diet: &str) -> String {
        format!(
            r#"<div id="list-sc-item_{name}">
                 <span class="mntl-sc-block-heading__text">{name}</span>
                 <p class="mntl-sc-block mntl-sc-block-html">Historical Period: {period}</p>
                 <p class="mntl-sc-block mntl-sc-block-html">Size and Weight: {size_weight}</p>
                 <p class="mntl-sc-block mntl-sc-block-html">Diet: {diet}</p>
               </div>"#
        )
    }

    #[test]
    fn test_extracts_valid_entries_in_document_order() {
        let html = format!(
            "<html><body>{}{}{}</body></html>",
            entry_block(
                "Stegosaurus",
                "Late Jurassic (155 to 150 million years ago)",
                "About 30 feet long and 5 tons",
                "Plants"
            ),
            entry_block("Mystery", "Late Jurassic", "Unknown", "Plants"),
            entry_block("Ankylosaurus", "Late Cretaceous", "30 feet and 4 tons", "Plants"),
        );

        let entries = extract_entries(&html, &PageSchema::default()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Stegosaurus");
        assert_eq!(entries[0].historical_period, "Late Jurassic");
        assert_eq!(entries[0].length, "30 feet");
        assert_eq!(entries[0].weight, "5 tons");
        assert_eq!(entries[1].name, "Ankylosaurus");
    }

    #[test]
    fn test_label_value_in_next_block() {
        let html = r#"<div id="list-sc-item_1">
            <span class="mntl-sc-block-heading__text">Iguanodon</span>
            <p class="mntl-sc-block mntl-sc-block-html">Historical Period</p>
            <p class="mntl-sc-block mntl-sc-block-html">Early Cretaceous</p>
            <p class="mntl-sc-block mntl-sc-block-html">Size and Weight: 30 feet and 4 tons</p>
            <p class="mntl-sc-block mntl-sc-block-html">Diet: Plants</p>
        </div>"#;

        let entries = extract_entries(html, &PageSchema::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].historical_period, "Early Cretaceous");
    }

    #[test]
    fn test_label_glued_to_value() {
        let html = r#"<div id="list-sc-item_1">
            <span class="mntl-sc-block-heading__text">Velociraptor</span>
            <p class="mntl-sc-block mntl-sc-block-html">Historical PeriodLate Cretaceous</p>
            <p class="mntl-sc-block mntl-sc-block-html">Size and Weight6 feet and 30 pounds</p>
            <p class="mntl-sc-block mntl-sc-block-html">DietMeat</p>
        </div>"#;

        let entries = extract_entries(html, &PageSchema::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].diet, "Meat");
        assert_eq!(entries[0].length, "6 feet");
        assert_eq!(entries[0].weight, "30 pounds");
    }

    #[test]
    fn test_first_match_wins_per_field() {
        let html = r#"<div id="list-sc-item_1">
            <span class="mntl-sc-block-heading__text">Triceratops</span>
            <p class="mntl-sc-block mntl-sc-block-html">Diet: Plants</p>
            <p class="mntl-sc-block mntl-sc-block-html">Diet: Rocks</p>
            <p class="mntl-sc-block mntl-sc-block-html">Historical Period: Late Cretaceous</p>
            <p class="mntl-sc-block mntl-sc-block-html">Size and Weight: 30 feet and 10 tons</p>
        </div>"#;

        let entries = extract_entries(html, &PageSchema::default()).unwrap();
        assert_eq!(entries[0].diet, "Plants");
    }

    #[test]
    fn test_bare_label_lookahead_is_shallow() {
        // The value is two blocks after the bare label, so the field stays
        // unresolved and the container is skipped
        let html = r#"<div id="list-sc-item_1">
            <span class="mntl-sc-block-heading__text">Iguanodon</span>
            <p class="mntl-sc-block mntl-sc-block-html">Diet</p>
            <p class="mntl-sc-block mntl-sc-block-html"></p>
            <p class="mntl-sc-block mntl-sc-block-html">Plants</p>
            <p class="mntl-sc-block mntl-sc-block-html">Historical Period: Early Cretaceous</p>
            <p class="mntl-sc-block mntl-sc-block-html">Size and Weight: 30 feet and 4 tons</p>
        </div>"#;

        let entries = extract_entries(html, &PageSchema::default()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_field_skips_container() {
        let html = r#"<div id="list-sc-item_1">
            <span class="mntl-sc-block-heading__text">Nameless</span>
            <p class="mntl-sc-block mntl-sc-block-html">Historical Period: Late Jurassic</p>
            <p class="mntl-sc-block mntl-sc-block-html">Size and Weight: 30 feet and 4 tons</p>
        </div>"#;

        let entries = extract_entries(html, &PageSchema::default()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_page_without_containers_is_empty_not_error() {
        let entries = extract_entries("<html><body><p>nothing</p></body></html>", &PageSchema::default())
            .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_bad_selector_is_an_error() {
        let schema = PageSchema {
            entry_container: "div[[".to_string(),
            ..PageSchema::default()
        };
        let result = extract_entries("<html></html>", &schema);
        assert!(matches!(result, Err(ScrapeError::Selector { .. })));
    }
}
