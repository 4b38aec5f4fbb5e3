//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to Speech Dispatcher on
//! Linux and AVFoundation on macOS/iOS, so no helper processes are
//! needed. Devanagari output depends on a Hindi-capable voice being
//! installed; without one the engine falls back to its default voice.

use crate::speech::synth::{Synth, RATE_WPM_MAX, RATE_WPM_MIN};
use crate::{Result, VarnamalaError};
use log::{debug, error, warn};
use tts::Tts as TtsCrate;

/// Native TTS backend
pub struct NativeSynth {
    /// The tts crate's TTS instance
    tts: TtsCrate,

    /// Cached rate setting in words per minute
    rate_wpm: Option<u16>,
}

impl NativeSynth {
    /// Create a new native TTS synthesizer
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| VarnamalaError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            rate_wpm: None,
        })
    }

    /// Map a words-per-minute rate onto the platform's rate range
    ///
    /// The tts crate exposes platform-specific minimum/maximum rates;
    /// our 10-210 wpm scale maps onto that range linearly.
    fn convert_rate(&self, wpm: u16) -> f32 {
        let wpm = wpm.clamp(RATE_WPM_MIN, RATE_WPM_MAX);
        let span = (RATE_WPM_MAX - RATE_WPM_MIN) as f32;
        let norm = (wpm - RATE_WPM_MIN) as f32 / span;
        let min = self.tts.min_rate();
        let max = self.tts.max_rate();
        min + norm * (max - min)
    }
}

impl Synth for NativeSynth {
    fn speak(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking: {}", text);
        self.tts.speak(text, false).map_err(|e| {
            error!("Failed to speak: {}", e);
            VarnamalaError::Speech(format!("Speak failed: {}", e))
        })?;

        Ok(())
    }

    fn set_rate_wpm(&mut self, wpm: u16) -> Result<()> {
        debug!("Setting rate to {} wpm", wpm);
        self.rate_wpm = Some(wpm);

        let features = self.tts.supported_features();
        if !features.rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = self.convert_rate(wpm);
        self.tts
            .set_rate(converted)
            .map_err(|e| VarnamalaError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        debug!("Stopping speech");
        self.tts.stop().map_err(|e| {
            error!("Failed to stop speech: {}", e);
            VarnamalaError::Speech(format!("Stop failed: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_synth() {
        // May fail without speech-dispatcher or in CI without audio
        let result = NativeSynth::new();

        match result {
            Ok(_) => println!("✓ Native TTS backend initialized successfully"),
            Err(e) => println!("⚠ TTS initialization failed (may be expected in CI): {}", e),
        }
    }

    #[test]
    fn test_rate_conversion_bounds() {
        if let Ok(synth) = NativeSynth::new() {
            let min = synth.tts.min_rate();
            let max = synth.tts.max_rate();
            assert_eq!(synth.convert_rate(RATE_WPM_MIN), min);
            assert_eq!(synth.convert_rate(RATE_WPM_MAX), max);
            // Out-of-range input clamps rather than extrapolating
            assert_eq!(synth.convert_rate(0), min);
            assert_eq!(synth.convert_rate(1000), max);
        }
    }
}
