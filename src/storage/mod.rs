//! On-disk storage root
//!
//! This module owns the directory the server lists and serves files from,
//! including its one-time creation at startup.

pub mod store;

pub use store::{FileStore, InitOutcome, NO_FILES_PLACEHOLDER};
