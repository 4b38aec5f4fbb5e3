//! Playback session state
//!
//! The `PlaybackSession` is the central state of the trainer: the loaded
//! catalog, the active filter, the navigation position, and the speech
//! timing parameters. All mutation goes through its methods; the UI layer
//! only issues commands (`advance`, `play_current`, `set_rate_wpm`, ...).

pub mod config;
pub mod segments;

pub use config::Config;

use crate::catalog::{LetterKind, LetterRecord};
use crate::speech::{Synth, RATE_WPM_MAX, RATE_WPM_MIN};
use crate::Result;
use log::{debug, error, warn};
use std::thread;
use std::time::Duration;

/// Minimum repeats per play
pub const REPEAT_MIN: u8 = 1;
/// Maximum repeats per play
pub const REPEAT_MAX: u8 = 10;
/// Minimum gap between repeats in milliseconds
pub const DELAY_MS_MIN: u64 = 500;
/// Maximum gap between repeats in milliseconds
pub const DELAY_MS_MAX: u64 = 5000;

/// Rate applied while slow mode is on
const SLOW_RATE_WPM: u16 = 60;
/// Pause inserted between segments in segmented playback
const SEGMENT_PAUSE: Duration = Duration::from_millis(500);

/// Which letters are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Vowels,
    Consonants,
    Both,
}

impl FilterMode {
    /// Stable string form used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Vowels => "vowels",
            FilterMode::Consonants => "consonants",
            FilterMode::Both => "both",
        }
    }

    /// Parse a persisted filter value; anything unrecognized is Both
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "vowels" => FilterMode::Vowels,
            "consonants" => FilterMode::Consonants,
            _ => FilterMode::Both,
        }
    }

    /// Does this filter admit the given letter?
    ///
    /// "Consonants" is the complement of vowels, so letters of unknown
    /// kind show up there rather than disappearing entirely.
    fn admits(&self, kind: LetterKind) -> bool {
        match self {
            FilterMode::Both => true,
            FilterMode::Vowels => kind == LetterKind::Vowel,
            FilterMode::Consonants => kind != LetterKind::Vowel,
        }
    }
}

/// Session state for one run of the trainer
///
/// Owns the catalog, the user preferences, and the speech synthesizer.
pub struct PlaybackSession {
    /// The loaded catalog, immutable for the session's lifetime
    letters: Vec<LetterRecord>,

    /// Persisted preferences (~/.varnamala.cfg)
    config: Config,

    /// Speech synthesizer
    synth: Box<dyn Synth>,

    /// Active letter filter
    filter: FilterMode,

    /// Indices into `letters` admitted by the filter, in catalog order.
    /// Never empty while `letters` is non-empty.
    visible: Vec<usize>,

    /// Position within `visible`
    position: usize,

    /// Speech rate in words per minute, clamped to [10, 210]
    rate_wpm: u16,

    /// Repeats per play, clamped to [1, 10]
    repeat_count: u8,

    /// Gap between repeats in milliseconds, clamped to [500, 5000]
    delay_ms: u64,

    /// Guards against overlapping playback; also disables navigation
    /// and parameter propagation for the duration
    is_playing: bool,

    /// Segmented slow playback toggle
    slow_mode: bool,

    /// Auto-play after navigation
    continuous: bool,
}

impl PlaybackSession {
    /// Create a session from a loaded catalog, preferences, and synthesizer
    ///
    /// Applies the persisted rate to the synthesizer up front so the first
    /// play already uses the user's speed.
    pub fn new(letters: Vec<LetterRecord>, config: Config, synth: Box<dyn Synth>) -> Self {
        let filter = config.filter_mode();
        let mut session = Self {
            letters,
            rate_wpm: config.rate_wpm().clamp(RATE_WPM_MIN, RATE_WPM_MAX),
            repeat_count: config.repeat_count().clamp(REPEAT_MIN, REPEAT_MAX),
            delay_ms: config.delay_ms().clamp(DELAY_MS_MIN, DELAY_MS_MAX),
            continuous: config.continuous_mode(),
            config,
            synth,
            filter,
            visible: Vec::new(),
            position: 0,
            is_playing: false,
            slow_mode: false,
        };
        session.recompute_visible();
        if let Err(e) = session.synth.set_rate_wpm(session.rate_wpm) {
            warn!("Could not apply initial speech rate: {}", e);
        }
        session
    }

    /// The letter at the current position, if any
    pub fn current(&self) -> Option<&LetterRecord> {
        self.visible
            .get(self.position)
            .map(|&i| &self.letters[i])
    }

    /// Indices into the catalog admitted by the current filter
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn rate_wpm(&self) -> u16 {
        self.rate_wpm
    }

    pub fn repeat_count(&self) -> u8 {
        self.repeat_count
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn slow_mode(&self) -> bool {
        self.slow_mode
    }

    pub fn continuous(&self) -> bool {
        self.continuous
    }

    /// Recompute `visible` for the current filter
    ///
    /// An empty filter result falls back to the full catalog so the user
    /// is never left staring at nothing; a position that fell out of
    /// range resets to the first letter.
    fn recompute_visible(&mut self) {
        let filter = self.filter;
        self.visible = self
            .letters
            .iter()
            .enumerate()
            .filter(|(_, l)| filter.admits(l.kind))
            .map(|(i, _)| i)
            .collect();

        if self.visible.is_empty() && !self.letters.is_empty() {
            debug!("Filter {:?} matched nothing, showing all letters", self.filter);
            self.visible = (0..self.letters.len()).collect();
        }

        if self.position >= self.visible.len() {
            self.position = 0;
        }
    }

    /// Switch the letter filter
    ///
    /// Jumps to the first letter of the selected set, persists the choice,
    /// and auto-plays when continuous mode is on. Ignored during playback.
    pub fn set_filter(&mut self, mode: FilterMode) -> Result<()> {
        if self.is_playing {
            return Ok(());
        }
        self.filter = mode;
        self.recompute_visible();
        self.position = 0;
        self.config.set_filter_mode(mode);
        self.persist("filter_mode");
        if self.continuous {
            self.play_current()?;
        }
        Ok(())
    }

    /// Move forward or backward through the visible letters
    ///
    /// Wraps circularly. Ignored during playback or when nothing is
    /// visible. Auto-plays the new letter when continuous mode is on.
    pub fn advance(&mut self, step: i32) -> Result<()> {
        if self.is_playing || self.visible.is_empty() {
            return Ok(());
        }
        let len = self.visible.len() as i64;
        self.position = (self.position as i64 + step as i64).rem_euclid(len) as usize;
        if self.continuous {
            self.play_current()?;
        }
        Ok(())
    }

    /// Speak the current letter with the configured repeats and gap
    ///
    /// A request while playback is already in progress is ignored. A
    /// synthesizer failure is logged and swallowed, and the playing flag
    /// is cleared in all outcomes.
    pub fn play_current(&mut self) -> Result<()> {
        if self.is_playing {
            debug!("Playback already in progress, ignoring");
            return Ok(());
        }
        if self.slow_mode {
            return self.play_segmented();
        }
        let Some(letter) = self.current() else {
            return Ok(());
        };
        let text = letter.symbol.clone();

        self.is_playing = true;
        let outcome =
            self.synth
                .speak_repeated(&text, self.repeat_count, Duration::from_millis(self.delay_ms));
        self.is_playing = false;

        if let Err(e) = outcome {
            error!("Playback failed for '{}': {}", text, e);
        }
        Ok(())
    }

    /// Speak the current letter one visual segment at a time
    ///
    /// Each segment gets the full repeat/gap treatment, with a fixed
    /// pause between segments. Guarded and error-handled like
    /// `play_current`.
    pub fn play_segmented(&mut self) -> Result<()> {
        if self.is_playing {
            debug!("Playback already in progress, ignoring");
            return Ok(());
        }
        let Some(letter) = self.current() else {
            return Ok(());
        };
        let symbol = letter.symbol.clone();
        let parts = segments::split_segments(&symbol);
        debug!("Segmented '{}' into {} parts", symbol, parts.len());

        self.is_playing = true;
        let mut outcome = Ok(());
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                thread::sleep(SEGMENT_PAUSE);
            }
            outcome = self.synth.speak_repeated(
                part,
                self.repeat_count,
                Duration::from_millis(self.delay_ms),
            );
            if outcome.is_err() {
                break;
            }
        }
        self.is_playing = false;

        if let Err(e) = outcome {
            error!("Segmented playback failed for '{}': {}", symbol, e);
        }
        Ok(())
    }

    /// Toggle segmented slow playback
    ///
    /// Switching on drops the synthesizer to the slow rate; switching off
    /// restores the configured rate without replaying anything.
    pub fn toggle_slow_mode(&mut self) -> bool {
        self.slow_mode = !self.slow_mode;
        let wpm = if self.slow_mode {
            SLOW_RATE_WPM
        } else {
            self.rate_wpm
        };
        if !self.is_playing {
            if let Err(e) = self.synth.set_rate_wpm(wpm) {
                warn!("Could not apply speech rate {}: {}", wpm, e);
            }
        }
        self.slow_mode
    }

    /// Set the speech rate, clamped to [10, 210] wpm
    pub fn set_rate_wpm(&mut self, wpm: u16) {
        let wpm = wpm.clamp(RATE_WPM_MIN, RATE_WPM_MAX);
        self.rate_wpm = wpm;
        if !self.is_playing && !self.slow_mode {
            if let Err(e) = self.synth.set_rate_wpm(wpm) {
                warn!("Could not apply speech rate {}: {}", wpm, e);
            }
        }
        self.config.set_rate_wpm(wpm);
        self.persist("rate_wpm");
    }

    /// Set the repeat count, clamped to [1, 10]
    pub fn set_repeat_count(&mut self, count: u8) {
        let count = count.clamp(REPEAT_MIN, REPEAT_MAX);
        self.repeat_count = count;
        self.config.set_repeat_count(count);
        self.persist("repeat_count");
    }

    /// Set the inter-repeat gap, clamped to [500, 5000] ms
    pub fn set_delay_ms(&mut self, ms: u64) {
        let ms = ms.clamp(DELAY_MS_MIN, DELAY_MS_MAX);
        self.delay_ms = ms;
        self.config.set_delay_ms(ms);
        self.persist("delay_ms");
    }

    /// Toggle auto-play after navigation
    pub fn set_continuous(&mut self, on: bool) {
        self.continuous = on;
        self.config.set_continuous_mode(on);
        self.persist("continuous_mode");
    }

    /// Best-effort persistence: a failed save is logged and ignored
    fn persist(&self, what: &str) {
        if let Err(e) = self.config.save() {
            warn!("Could not persist {}: {}", what, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::sync::{Arc, Mutex};

    /// Recording synthesizer; overrides `speak_repeated` so tests never
    /// sleep through real gaps
    struct RecordingSynth {
        calls: Arc<Mutex<Vec<(String, u8, u64)>>>,
        fail: bool,
    }

    impl Synth for RecordingSynth {
        fn speak(&mut self, text: &str) -> Result<()> {
            self.calls.lock().unwrap().push((text.to_string(), 1, 0));
            Ok(())
        }

        fn set_rate_wpm(&mut self, _wpm: u16) -> Result<()> {
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            Ok(())
        }

        fn speak_repeated(&mut self, text: &str, times: u8, gap: Duration) -> Result<()> {
            if self.fail {
                return Err(crate::VarnamalaError::Speech("engine gone".to_string()));
            }
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), times, gap.as_millis() as u64));
            Ok(())
        }
    }

    fn test_catalog() -> Vec<LetterRecord> {
        catalog::parse(
            r#"
letters:
  - symbol: "अ"
    pronunciation: "a"
    english_approx: "as in America"
    type: vowel
  - symbol: "क"
    pronunciation: "ka"
    english_approx: "as in kite"
    type: consonant
  - symbol: "क्ष"
    pronunciation: "ksha"
    english_approx: "k plus sh"
    type: compound
"#,
        )
        .unwrap()
    }

    fn test_session(
        fail: bool,
    ) -> (
        PlaybackSession,
        Arc<Mutex<Vec<(String, u8, u64)>>>,
        tempfile::TempDir,
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let synth = RecordingSynth {
            calls: Arc::clone(&calls),
            fail,
        };
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("varnamala.cfg")).unwrap();
        let session = PlaybackSession::new(test_catalog(), config, Box::new(synth));
        (session, calls, dir)
    }

    #[test]
    fn test_play_ignored_while_playing() {
        let (mut session, calls, _dir) = test_session(false);
        session.is_playing = true;
        session.play_current().unwrap();
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_navigation_disabled_while_playing() {
        let (mut session, _calls, _dir) = test_session(false);
        session.is_playing = true;
        let before = session.position();
        session.advance(1).unwrap();
        assert_eq!(session.position(), before);
    }

    #[test]
    fn test_playing_flag_cleared_after_failure() {
        let (mut session, _calls, _dir) = test_session(true);
        session.play_current().unwrap();
        assert!(!session.is_playing());
        // Navigation works again afterwards
        session.advance(1).unwrap();
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_play_uses_current_parameters() {
        let (mut session, calls, _dir) = test_session(false);
        session.set_repeat_count(5);
        session.set_delay_ms(700);
        session.play_current().unwrap();
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], ("अ".to_string(), 5, 700));
    }

    #[test]
    fn test_segmented_play_splits_symbol() {
        let (mut session, calls, _dir) = test_session(false);
        session.set_repeat_count(1);
        // Move to क्ष, which segments into two parts
        session.advance(2).unwrap();
        session.play_segmented().unwrap();
        let calls = calls.lock().unwrap();
        let spoken: Vec<&str> = calls.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(spoken, vec!["क्", "ष"]);
    }

    #[test]
    fn test_unknown_kind_counts_as_consonant() {
        let (mut session, _calls, _dir) = test_session(false);
        session.set_filter(FilterMode::Consonants).unwrap();
        assert_eq!(session.visible_indices(), &[1, 2]);
    }
}
