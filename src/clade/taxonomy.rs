//! Taxobox parsing: pull a clade out of a Wikipedia intro-section fragment.

use std::fmt;
use std::str::FromStr;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// The three top-level dinosaur clades this pipeline classifies into.
///
/// The allow-list is closed by construction: no other taxonomic rank can be
/// stored on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clade {
    Sauropodomorpha,
    Theropoda,
    Ornithischia,
}

impl FromStr for Clade {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sauropodomorpha" => Ok(Clade::Sauropodomorpha),
            "Theropoda" => Ok(Clade::Theropoda),
            "Ornithischia" => Ok(Clade::Ornithischia),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Clade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Clade::Sauropodomorpha => "Sauropodomorpha",
            Clade::Theropoda => "Theropoda",
            Clade::Ornithischia => "Ornithischia",
        };
        f.write_str(name)
    }
}

/// Scan a parsed intro-section fragment for the taxonomy table and return
/// the first allow-listed clade.
///
/// Clade values live in `td` cells of `tr.taxonrow` rows whose first cell
/// starts with the literal `Clade`. Leading daggers and whitespace
/// artifacts on the value cell are stripped before matching. Rows whose
/// value is not in the allow-list are skipped, so an earlier
/// `Clade: Dinosauria` row does not shadow a later `Clade: Theropoda`.
/// `None` means the page carries no allow-listed clade.
pub fn parse_clade(fragment: &str) -> Option<Clade> {
    let Ok(row_selector) = Selector::parse("tr.taxonrow") else {
        return None;
    };
    let Ok(cell_selector) = Selector::parse("td") else {
        return None;
    };

    let document = Html::parse_fragment(fragment);

    for row in document.select(&row_selector) {
        let mut cells = row.select(&cell_selector);
        let (Some(first), Some(second)) = (cells.next(), cells.next()) else {
            continue;
        };

        let label = first.text().collect::<String>();
        if !label.trim().starts_with("Clade") {
            continue;
        }

        let value = second.text().collect::<String>();
        // Extinct taxa are prefixed with a dagger, sometimes mangled by
        // encoding into stray punctuation
        let value = value
            .trim()
            .trim_start_matches(|c: char| c.is_whitespace() || "†â€".contains(c));

        if let Ok(clade) = value.parse() {
            return Some(clade);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonrow(label: &str, value: &str) -> String {
        format!("<tr class=\"taxonrow\"><td>{label}</td><td>{value}</td></tr>")
    }

    #[test]
    fn test_parses_allow_listed_clade() {
        let html = format!(
            "<table>{}{}</table>",
            taxonrow("Kingdom:", "Animalia"),
            taxonrow("Clade:", "Theropoda"),
        );
        assert_eq!(parse_clade(&html), Some(Clade::Theropoda));
    }

    #[test]
    fn test_skips_non_allow_listed_clade_rows() {
        let html = format!(
            "<table>{}{}{}</table>",
            taxonrow("Clade:", "Dinosauria"),
            taxonrow("Clade:", "Saurischia"),
            taxonrow("Clade:", "Sauropodomorpha"),
        );
        assert_eq!(parse_clade(&html), Some(Clade::Sauropodomorpha));
    }

    #[test]
    fn test_first_match_wins() {
        let html = format!(
            "<table>{}{}</table>",
            taxonrow("Clade:", "Ornithischia"),
            taxonrow("Clade:", "Theropoda"),
        );
        assert_eq!(parse_clade(&html), Some(Clade::Ornithischia));
    }

    #[test]
    fn test_strips_leading_dagger() {
        let html = format!("<table>{}</table>", taxonrow("Clade:", "†Ornithischia"));
        assert_eq!(parse_clade(&html), Some(Clade::Ornithischia));
    }

    #[test]
    fn test_no_taxonomy_table() {
        assert_eq!(parse_clade("<p>Just an article intro.</p>"), None);
    }

    #[test]
    fn test_unlisted_rank_is_none() {
        let html = format!("<table>{}</table>", taxonrow("Clade:", "Dinosauria"));
        assert_eq!(parse_clade(&html), None);
    }

    #[test]
    fn test_clade_round_trip() {
        for clade in [Clade::Sauropodomorpha, Clade::Theropoda, Clade::Ornithischia] {
            assert_eq!(clade.to_string().parse::<Clade>(), Ok(clade));
        }
    }
}
