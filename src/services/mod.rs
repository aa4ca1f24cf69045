//! Process-level services: terminal setup, timestamps and logging.

pub mod terminal_modes;
pub mod terminal_size;
pub mod time_source;
pub mod tracing_setup;
