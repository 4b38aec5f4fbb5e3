//! Letter records
//!
//! A `LetterRecord` is one entry of the alphabet catalog. Records are
//! built once by the loader and never mutated afterwards.

use super::example;

/// Category of a letter, used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterKind {
    Vowel,
    Consonant,
    Unknown,
}

impl LetterKind {
    /// Parse the catalog `type` field (case-insensitive)
    ///
    /// Anything that is not "vowel" or "consonant" becomes `Unknown`
    /// rather than failing the entry.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "vowel" => LetterKind::Vowel,
            "consonant" => LetterKind::Consonant,
            _ => LetterKind::Unknown,
        }
    }
}

/// A single letter of the catalog
///
/// Required string fields normalize to empty when missing; optional fields
/// normalize to `None` when missing or blank. The derived image key is
/// computed from `example` at construction and is not settable.
#[derive(Debug, Clone)]
pub struct LetterRecord {
    /// The displayed Devanagari character(s), never empty
    pub symbol: String,

    /// Phonetic gloss, e.g. "ka"
    pub pronunciation: String,

    /// Human-readable approximation, e.g. `as in "kite"`
    pub english_approx: String,

    /// Vowel/consonant classification driving the filter
    pub kind: LetterKind,

    /// Dependent (matra) glyph of a vowel; absent for most consonants
    pub dependent_form: Option<String>,

    /// Free-text learning hint, possibly two sentences
    pub hint: Option<String>,

    /// Example of the form `word (translit) – Gloss`
    pub example: Option<String>,

    /// Example word using the dependent form
    pub dependent_form_example: Option<String>,

    /// Computed from `example`; `Some` iff the example matched the
    /// derivation pattern
    derived_image_key: Option<String>,
}

impl LetterRecord {
    /// Build a record, deriving the image key from the example string
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        symbol: String,
        pronunciation: String,
        english_approx: String,
        kind: LetterKind,
        dependent_form: Option<String>,
        hint: Option<String>,
        example: Option<String>,
        dependent_form_example: Option<String>,
    ) -> Self {
        let derived_image_key = example.as_deref().and_then(example::derive_image_key);
        Self {
            symbol,
            pronunciation,
            english_approx,
            kind,
            dependent_form,
            hint,
            example,
            dependent_form_example,
            derived_image_key,
        }
    }

    /// Normalized image key derived from the example string
    pub fn derived_image_key(&self) -> Option<&str> {
        self.derived_image_key.as_deref()
    }

    /// Relative path of the example illustration, when one can be derived
    pub fn image_path(&self) -> Option<String> {
        self.derived_image_key
            .as_deref()
            .map(|key| format!("assets/images/{}.png", key))
    }

    /// Split the hint at the first sentence boundary for two-line display
    pub fn hint_lines(&self) -> Vec<String> {
        let Some(hint) = self.hint.as_deref() else {
            return Vec::new();
        };
        match hint.split_once(". ") {
            Some((first, rest)) if !rest.trim().is_empty() => {
                vec![format!("{}.", first), rest.trim().to_string()]
            }
            _ => vec![hint.to_string()],
        }
    }
}
