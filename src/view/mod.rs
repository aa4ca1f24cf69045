//! View layer
//!
//! Turns editor state into the bytes written to the terminal.

pub mod escape;
pub mod render;
pub mod status_bar;
