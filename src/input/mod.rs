//! Input pipeline
//!
//! This module turns raw terminal bytes into logical key events.

pub mod decoder;
pub mod key;
pub mod source;
