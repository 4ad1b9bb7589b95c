//! Progress Tracking
//!
//! Phase classification and per-section completion counts for videos.
//!
//! Everything in this crate is a pure function of a [`Video`] snapshot: no
//! I/O, no shared state, no configuration. Callers may invoke it from any
//! number of tasks concurrently.
//!
//! [`Video`]: vidtrack_core::Video

#![warn(missing_docs)]

pub mod field;
pub mod section;
pub mod phase;
pub mod aspect;

pub use field::{is_field_complete, FieldValue};
pub use section::{
    definition_progress, initial_details_progress, overall_progress, post_production_progress,
    post_publish_progress, publishing_progress, refresh_progress, work_progress, ItemKind,
    Section, TrackedItem,
};
pub use phase::classify_phase;
pub use aspect::{aspect_overview, AspectField, AspectOverview, AspectSummary};
