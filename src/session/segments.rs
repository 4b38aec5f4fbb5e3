//! Devanagari segmentation for slow playback
//!
//! Slow mode speaks a symbol one visual unit at a time. A combining mark
//! (matra, anusvara, virama, ...) never stands alone on screen, so it is
//! appended to the previous segment instead of starting a new one.

/// Is this a Devanagari combining mark?
///
/// Covers the sign and vowel-sign ranges of the Devanagari block:
/// candrabindu/anusvara/visarga, the matras plus virama, the Vedic
/// accents, and the vocalic L/LL signs.
pub fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch as u32,
        0x0900..=0x0903 | 0x093A..=0x094D | 0x0951..=0x0957 | 0x0962..=0x0963
    )
}

/// Split a symbol into visual segments
///
/// Each non-combining character starts a new segment; combining marks
/// attach to the segment before them. A leading combining mark (degenerate
/// input) starts its own segment rather than being dropped.
pub fn split_segments(text: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for ch in text.chars() {
        if is_combining_mark(ch) {
            if let Some(last) = segments.last_mut() {
                last.push(ch);
                continue;
            }
        }
        segments.push(ch.to_string());
    }
    segments
}
