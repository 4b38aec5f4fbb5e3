//! varnamala - Hindi alphabet trainer
//!
//! A terminal-based trainer that walks through the Devanagari alphabet one
//! letter at a time and speaks each letter aloud with text-to-speech,
//! with configurable rate, repeat count, and inter-repeat delay.

pub mod catalog;
pub mod error;
pub mod session;
pub mod speech;

pub use error::{Result, VarnamalaError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "varnamala";
