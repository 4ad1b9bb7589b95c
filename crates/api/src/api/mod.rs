//! HTTP API handlers

pub mod aspects;
pub mod error;
pub mod extract;
pub mod health;
pub mod phases;
pub mod videos;

pub use aspects::get_aspects;
pub use error::ApiError;
pub use extract::{ApiJson, ApiQuery};
pub use health::{health_check, health_routes};
pub use phases::list_phases;
pub use videos::{
    create_video, delete_video, get_video, list_videos, replace_video, update_section,
};
