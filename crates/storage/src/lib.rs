//! Storage abstraction and implementations for vidtrack.
//!
//! This crate provides a trait-based storage interface with a YAML file
//! reference implementation: one file per video plus a flat index.

#![warn(missing_docs)]

pub mod trait_;
pub mod yaml_storage;
pub mod locks;
pub mod classify;

pub use trait_::{IndexEntry, Result, StorageError, VideoStore};
pub use yaml_storage::YamlStorage;
pub use locks::KeyLocks;
pub use classify::load_classified;
