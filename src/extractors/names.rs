// src/extractors/names.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// --- Regex Patterns (Lazy Static) ---
// Year sits directly in front of the heading close: `Popularity in 1990</h3>`
pub(crate) static YEAR_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})</h3>").expect("Failed to compile YEAR_MARKER_RE")
});

// One table row: rank, first name column, second name column.
// e.g. `<tr align="right"><td>1</td><td>Michael</td><td>Jessica</td>`
pub(crate) static NAME_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[</td>]+(\d+)[</td>]+(\w+)[</td>]+(\w+)[</td>]+")
        .expect("Failed to compile NAME_ROW_RE")
});

// --- Data Structures ---
/// One name and the rank it holds in its row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRank {
    pub name: String,
    pub rank: String,
}

impl NameRank {
    fn entry(&self) -> String {
        format!("{} {}", self.name, self.rank)
    }
}

/// Year plus the sorted `"name rank"` entries of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    pub year: String,
    pub names: Vec<String>,
}

impl NameRecord {
    /// Flat form: the year first, then every entry in sorted order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.names.len() + 1);
        lines.push(self.year.clone());
        lines.extend(self.names.iter().cloned());
        lines
    }
}

// --- Extractor ---
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self { Self {} }

    /// Extracts the year and all name/rank entries from a baby names page.
    ///
    /// Entries are sorted by plain string order, so ranks compare as text
    /// (`"Sam 10"` before `"Sam 2"`). Duplicates are kept.
    pub fn extract(&self, document: &str) -> Result<NameRecord, ExtractError> {
        let year = self.find_year(document).ok_or(ExtractError::NoYearFound)?;
        tracing::debug!("Found year marker: {}", year);

        let pairs = self.find_pairs(document);
        if pairs.is_empty() {
            tracing::warn!("No name rows found for year {}", year);
        }

        let mut names: Vec<String> = pairs.iter().map(NameRank::entry).collect();
        names.sort();

        tracing::debug!("Extracted {} entries for year {}", names.len(), year);
        Ok(NameRecord { year: year.to_string(), names })
    }

    fn find_year<'a>(&self, document: &'a str) -> Option<&'a str> {
        YEAR_MARKER_RE
            .captures(document)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn find_pairs(&self, document: &str) -> Vec<NameRank> {
        let mut pairs = Vec::new();
        for caps in NAME_ROW_RE.captures_iter(document) {
            let rank = &caps[1];
            for name in [&caps[2], &caps[3]] {
                pairs.push(NameRank { name: name.to_string(), rank: rank.to_string() });
            }
        }
        pairs
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `[year, "name rank", ...]` for a document, entries sorted.
pub fn extract_names(document: &str) -> Result<Vec<String>, ExtractError> {
    NameExtractor::new().extract(document).map(|record| record.lines())
}
