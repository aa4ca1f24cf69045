//! Core data model for the editing session
//!
//! This module contains pure data structures with minimal external dependencies.

pub mod cursor;
pub mod document;
pub mod filesystem;
pub mod row;
pub mod viewport;
