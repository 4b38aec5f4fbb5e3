//! Letter catalog loading
//!
//! Parses the YAML catalog (`data/letters.yaml`) into an ordered list of
//! [`LetterRecord`]s. The loader is tolerant: a malformed entry is skipped
//! with a warning, never failing the whole catalog.

pub mod example;
pub mod letter;

pub use letter::{LetterKind, LetterRecord};

use crate::{Result, VarnamalaError};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw catalog entry as it appears in YAML
///
/// Every field is optional here; normalization happens in [`convert`].
#[derive(Debug, Deserialize)]
struct RawEntry {
    symbol: Option<String>,
    pronunciation: Option<String>,
    english_approx: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    dependent_form: Option<String>,
    hint: Option<String>,
    example: Option<String>,
    dependent_form_example: Option<String>,
}

/// Load the letter catalog from a YAML file
pub fn load(path: &Path) -> Result<Vec<LetterRecord>> {
    debug!("Loading letter catalog from {:?}", path);
    let text = fs::read_to_string(path)?;
    let letters = parse(&text)?;
    debug!("Loaded {} letters from {:?}", letters.len(), path);
    Ok(letters)
}

/// Parse the letter catalog from YAML text
///
/// Accepts either a mapping with a top-level `letters` list or a bare
/// top-level list (the legacy catalog shape).
pub fn parse(text: &str) -> Result<Vec<LetterRecord>> {
    let doc: serde_yaml::Value = serde_yaml::from_str(text)?;

    let letters_key = serde_yaml::Value::String("letters".to_string());
    let items = match &doc {
        serde_yaml::Value::Mapping(map) => match map.get(&letters_key) {
            Some(serde_yaml::Value::Sequence(seq)) => seq,
            _ => {
                return Err(VarnamalaError::Catalog(
                    "catalog mapping is missing a 'letters' list".to_string(),
                ))
            }
        },
        serde_yaml::Value::Sequence(seq) => seq,
        _ => {
            return Err(VarnamalaError::Catalog(
                "catalog must be a list or contain a 'letters' list".to_string(),
            ))
        }
    };

    let mut letters = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let raw: RawEntry = match serde_yaml::from_value(item.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping malformed catalog entry {}: {}", i, e);
                continue;
            }
        };
        match convert(raw) {
            Some(record) => letters.push(record),
            None => warn!("Skipping catalog entry {} with no symbol", i),
        }
    }

    Ok(letters)
}

/// Normalize a raw entry into a record
///
/// Returns `None` when the entry has no usable symbol. Required string
/// fields fall back to empty; optional fields treat blank values as
/// absent, and a dependent-form example of "none"/"None." counts as
/// absent too.
fn convert(raw: RawEntry) -> Option<LetterRecord> {
    let symbol = required(raw.symbol);
    if symbol.is_empty() {
        return None;
    }

    Some(LetterRecord::new(
        symbol,
        required(raw.pronunciation),
        required(raw.english_approx),
        LetterKind::parse(&required(raw.kind)),
        optional(raw.dependent_form),
        optional(raw.hint),
        optional(raw.example),
        optional(raw.dependent_form_example).filter(|v| !is_none_marker(v)),
    ))
}

fn required(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn optional(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Placeholder values meaning "no dependent-form example"
fn is_none_marker(value: &str) -> bool {
    value.trim_end_matches('.').eq_ignore_ascii_case("none")
}
