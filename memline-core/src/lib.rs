//! Core types and logic for the memline timeline.
//!
//! This crate provides everything except network I/O:
//! - `Event` and the backing-store row schema
//! - `transform`: raw store rows → events + tag set
//! - `filter`: tag and date-range filtering
//! - `document`: the serialized timeline handed to the rendering widget
//! - `config`: the `~/.config/memline/config.toml` settings

pub mod config;
pub mod date_range;
pub mod document;
pub mod error;
pub mod event;
pub mod filter;
pub mod timeline;
pub mod transform;

// Re-export the types almost every caller needs
pub use error::{MemlineError, MemlineResult};
pub use event::{Event, EventDate};
