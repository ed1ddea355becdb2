//! # ll-infra
//!
//! Infrastructure adapters for Little Lemon: profile storage backends and
//! platform directory resolution.

pub mod fs;
pub mod profile;

pub use fs::DirsAppDirsAdapter;
pub use profile::{FileProfileStore, InMemoryProfileStore};
