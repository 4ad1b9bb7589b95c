//! vidtrack core data models.
//!
//! This crate defines the value types shared by every layer: the video
//! record with its six section groupings, the lifecycle phase and the
//! per-section completion counters. Nothing here performs I/O.

#![warn(missing_docs)]

// Identity
mod id;

// Video record
mod video;
mod phase;
mod progress;

// Re-exports
pub use id::VideoKey;
pub use video::{Sponsorship, TitleVariant, Video, DATE_FORMAT};
pub use phase::{InvalidPhase, Phase};
pub use progress::SectionProgress;
