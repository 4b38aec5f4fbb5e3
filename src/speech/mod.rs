//! Speech synthesis system

pub mod backends;
pub mod synth;

pub use synth::{create_synth, Synth, RATE_WPM_MAX, RATE_WPM_MIN};
