//! Speech synthesizer abstraction
//!
//! Provides a unified interface for text-to-speech across platforms.
//! The trainer uses this to speak letters to the user; the session layer
//! only ever talks to the [`Synth`] trait, which keeps playback testable
//! against a mock backend.

use crate::Result;
use log::info;
use std::thread;
use std::time::Duration;

/// Slowest supported speech rate in words per minute
pub const RATE_WPM_MIN: u16 = 10;

/// Fastest supported speech rate in words per minute
pub const RATE_WPM_MAX: u16 = 210;

/// Speech synthesizer trait
///
/// All backends implement this to provide text-to-speech. The playback
/// session calls these methods to speak letters to the user.
pub trait Synth: Send {
    /// Speak text to the user, blocking until the utterance is queued
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Set speech rate in words per minute (10-210)
    fn set_rate_wpm(&mut self, wpm: u16) -> Result<()>;

    /// Cancel/silence current speech
    fn stop(&mut self) -> Result<()>;

    /// Speak text `times` times with `gap` between repeats
    ///
    /// Speaks once immediately, then sleeps for the gap before each
    /// further repeat. The first failed speak aborts the sequence.
    fn speak_repeated(&mut self, text: &str, times: u8, gap: Duration) -> Result<()> {
        for i in 0..times {
            if i > 0 {
                thread::sleep(gap);
            }
            self.speak(text)?;
        }
        Ok(())
    }
}

/// Create the platform speech synthesizer
///
/// Uses the `tts` crate, which binds Speech Dispatcher on Linux and
/// AVFoundation on macOS. Fails with a `Speech` error when no engine is
/// available (e.g. headless CI).
pub fn create_synth() -> Result<Box<dyn Synth>> {
    info!(
        "Creating native speech synthesizer for platform: {}",
        std::env::consts::OS
    );
    use super::backends::native::NativeSynth;

    let synth = NativeSynth::new()?;
    info!("Speech synthesizer initialized");
    Ok(Box::new(synth))
}
