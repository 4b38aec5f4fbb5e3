//! Example-string derivation
//!
//! Catalog examples look like `अनार (anar) – Pomegranate`: a Devanagari
//! word, its transliteration in parentheses, a dash, and an English gloss.
//! From the gloss and the transliteration we derive the key of the
//! matching illustration under `assets/images/`.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<prefix> (<translit>) <dash> <gloss>`
///
/// The prefix capture is deliberately greedy so that when an example
/// contains several parenthesized groups the *last* one that still leaves
/// a dash and a gloss wins.
static EXAMPLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\(([^()]*)\)\s*[-–—]\s*(.*)$").unwrap());

/// Runs of anything outside ASCII lowercase/digits, collapsed to `_`
static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Normalize text to a lowercase underscore slug
///
/// Idempotent: slugging a slug returns it unchanged.
pub fn slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

/// Derive the image key `{gloss}_{translit}` from an example string
///
/// Returns `None` when the example does not match the expected pattern or
/// when either component slugs down to nothing. A miss is not an error;
/// the letter simply has no illustration.
pub fn derive_image_key(example: &str) -> Option<String> {
    let example = example.trim();
    if example.is_empty() {
        return None;
    }

    let caps = EXAMPLE_RE.captures(example)?;
    let translit = slug(caps.get(2).map_or("", |m| m.as_str()));
    let gloss = slug(caps.get(3).map_or("", |m| m.as_str()));
    if translit.is_empty() || gloss.is_empty() {
        return None;
    }

    Some(format!("{}_{}", gloss, translit))
}
