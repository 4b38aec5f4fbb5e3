//! Speech synthesis backends

pub mod native;
