//! Remote service adapters for memline.
//!
//! - `sheets`: the backing event store (Google Sheets values API)
//! - `media`: public image uploads (S3-compatible object storage)
//!
//! Both adapters are plain request/response calls with no retry or backoff;
//! failures map onto the `MemlineError` taxonomy for the CLI to surface.

pub mod media;
pub mod sheets;
mod sign;

pub use media::MediaStore;
pub use sheets::SheetStore;
