//! Font sources for the renshuu worksheet pipeline.
//!
//! This crate provides platform-specific implementations of the
//! `FontSource` trait from renshuu-traits.
//!
//! ## Available Sources
//!
//! - [`FilesystemFontSource`]: Reads a font file from the local filesystem
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory source from renshuu-traits:
//! - [`InMemoryFontSource`]: Bytes already held in memory

mod filesystem;

pub use filesystem::FilesystemFontSource;

pub use renshuu_traits::InMemoryFontSource;
