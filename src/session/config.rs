//! User preference storage
//!
//! Persists playback settings (rate, repeats, delay, filter, auto-play)
//! in an INI file between sessions. Every getter falls back to a
//! documented default, so a missing or damaged file never breaks startup.

use super::FilterMode;
use crate::{Result, VarnamalaError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Section holding the speech timing parameters
const SPEECH: &str = "speech";
/// Section holding display/navigation preferences
const DISPLAY: &str = "display";

/// Default speech rate in words per minute
pub const DEFAULT_RATE_WPM: u16 = 150;
/// Default number of repeats per play
pub const DEFAULT_REPEAT_COUNT: u8 = 3;
/// Default gap between repeats in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Persisted user preferences
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.varnamala.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location or create it
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path (used by tests)
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| VarnamalaError::Config(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| VarnamalaError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| VarnamalaError::Config(format!("Failed to save config: {}", e)))
    }

    /// Get config file path (~/.varnamala.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".varnamala.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some(SPEECH))
            .set("rate_wpm", DEFAULT_RATE_WPM.to_string())
            .set("repeat_count", DEFAULT_REPEAT_COUNT.to_string())
            .set("delay_ms", DEFAULT_DELAY_MS.to_string());

        ini.with_section(Some(DISPLAY))
            .set("filter_mode", FilterMode::Both.as_str())
            .set("continuous_mode", "false");

        ini
    }

    /// Get an integer value from config
    fn get_int<T: std::str::FromStr>(&self, section: &str, key: &str, default: T) -> T {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a boolean value from config
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config (in memory; call `save` to persist)
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    // Typed accessors for the trainer's settings

    /// Speech rate in words per minute
    pub fn rate_wpm(&self) -> u16 {
        self.get_int(SPEECH, "rate_wpm", DEFAULT_RATE_WPM)
    }

    pub fn set_rate_wpm(&mut self, wpm: u16) {
        self.set(SPEECH, "rate_wpm", &wpm.to_string());
    }

    /// How many times each play repeats the letter
    pub fn repeat_count(&self) -> u8 {
        self.get_int(SPEECH, "repeat_count", DEFAULT_REPEAT_COUNT)
    }

    pub fn set_repeat_count(&mut self, count: u8) {
        self.set(SPEECH, "repeat_count", &count.to_string());
    }

    /// Gap between repeats in milliseconds
    pub fn delay_ms(&self) -> u64 {
        self.get_int(SPEECH, "delay_ms", DEFAULT_DELAY_MS)
    }

    pub fn set_delay_ms(&mut self, ms: u64) {
        self.set(SPEECH, "delay_ms", &ms.to_string());
    }

    /// Active letter filter; unknown stored values fall back to Both
    pub fn filter_mode(&self) -> FilterMode {
        self.ini
            .get_from(Some(DISPLAY), "filter_mode")
            .map(FilterMode::parse)
            .unwrap_or(FilterMode::Both)
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.set(DISPLAY, "filter_mode", mode.as_str());
    }

    /// Auto-play the letter after navigation?
    pub fn continuous_mode(&self) -> bool {
        self.get_bool(DISPLAY, "continuous_mode", false)
    }

    pub fn set_continuous_mode(&mut self, on: bool) {
        self.set(DISPLAY, "continuous_mode", &on.to_string());
    }
}
