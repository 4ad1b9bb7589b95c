//! Editing aspects endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use vidtrack_core::VideoKey;
use vidtrack_progress::{aspect_overview, AspectOverview};

use super::{ApiError, ApiQuery};
use crate::AppState;

/// Optional video context for the overview
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectQuery {
    pub video_name: Option<String>,
    pub category: Option<String>,
}

/// GET /api/editing/aspects?videoName=&category=
///
/// Without a video the overview carries field counts only; with one it also
/// carries completed counts computed from the stored record.
pub async fn get_aspects(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AspectQuery>,
) -> Result<Json<AspectOverview>, ApiError> {
    let (name, category) = match (query.video_name, query.category) {
        (None, None) => return Ok(Json(aspect_overview(None))),
        (Some(name), Some(category)) => (name, category),
        _ => {
            return Err(ApiError::BadRequest(
                "videoName and category must be given together".to_string(),
            ))
        }
    };

    let key = VideoKey::new(&category, &name);
    if !key.is_valid() {
        return Err(ApiError::BadRequest(format!("Invalid video key: {}", key)));
    }
    let video = state
        .store
        .load_video(&key)
        .await?
        .ok_or_else(|| ApiError::NotFound(key.to_string()))?;

    Ok(Json(aspect_overview(Some(&video))))
}
