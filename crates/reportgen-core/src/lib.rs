//! reportgen-core: Record model, lookups, ordering and scoring.
//!
//! This crate defines the student assessment records and the pure,
//! read-only operations that every report is built from.

pub mod config;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod scoring;
pub mod store;
pub mod timeline;

pub use error::{RecordKind, ReportError};
pub use store::RecordStore;
