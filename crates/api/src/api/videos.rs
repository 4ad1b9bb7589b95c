//! Video endpoints
//!
//! Every update loads the full record, applies the change, recomputes the
//! stored section counters and writes the full record back while holding the
//! per-video lock.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;
use vidtrack_core::{Phase, SectionProgress, Video, VideoKey};
use vidtrack_progress::{classify_phase, overall_progress, refresh_progress, Section};
use vidtrack_storage::load_classified;

use super::{ApiError, ApiJson, ApiQuery};
use crate::AppState;

/// Query parameters identifying a video's category
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// Query parameters for listing videos
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Only return videos in this phase, by numeric id
    pub phase: Option<String>,
}

/// Request body for creating a video
#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// One row of the video list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub name: String,
    pub category: String,
    pub date: String,
    pub phase: Phase,
    /// Absent when the record could not be read
    pub progress: Option<SectionProgress>,
}

/// Progress of one section
#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub title: &'static str,
    pub completed: usize,
    pub total: usize,
}

/// Progress of every section plus the overall sum
#[derive(Debug, Serialize)]
pub struct ProgressReport {
    pub sections: Vec<SectionReport>,
    pub overall: SectionProgress,
}

impl ProgressReport {
    fn of(video: &Video) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let p = section.progress(video);
                SectionReport {
                    section,
                    title: section.title(),
                    completed: p.completed,
                    total: p.total,
                }
            })
            .collect();
        Self {
            sections,
            overall: overall_progress(video),
        }
    }
}

/// A video with its phase and progress
#[derive(Debug, Serialize)]
pub struct VideoDetails {
    pub video: Video,
    pub phase: Phase,
    pub progress: ProgressReport,
}

impl VideoDetails {
    fn of(video: Video) -> Self {
        Self {
            phase: classify_phase(&video),
            progress: ProgressReport::of(&video),
            video,
        }
    }
}

/// Result of a section update
#[derive(Debug, Serialize)]
pub struct SectionUpdate {
    pub video: Video,
    pub section: Section,
    pub progress: SectionProgress,
    pub phase: Phase,
}

fn video_key(name: &str, query: &CategoryQuery) -> Result<VideoKey, ApiError> {
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("category query parameter is required".to_string()))?;
    let key = VideoKey::new(category, name);
    if !key.is_valid() {
        return Err(ApiError::BadRequest(format!("Invalid video key: {}", key)));
    }
    Ok(key)
}

fn parse_phase(raw: &str) -> Result<Phase, ApiError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(Phase::from_id)
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown phase: {}", raw)))
}

async fn load_existing(state: &AppState, key: &VideoKey) -> Result<Video, ApiError> {
    state
        .store
        .load_video(key)
        .await?
        .ok_or_else(|| ApiError::NotFound(key.to_string()))
}

/// GET /api/videos?phase={id}
///
/// Lists videos, optionally only those in one phase, ordered by publish date
/// with undated videos last.
pub async fn list_videos(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<VideoSummary>>, ApiError> {
    let wanted = query.phase.as_deref().map(parse_phase).transpose()?;

    let mut rows = Vec::new();
    for entry in state.store.list_index().await? {
        let key = entry.key();
        let (video, phase) = load_classified(state.store.as_ref(), &key).await;
        if wanted.is_some_and(|w| w != phase) {
            continue;
        }
        rows.push((key, video, phase));
    }

    rows.sort_by(|(ka, va, _), (kb, vb, _)| {
        let da = va.as_ref().and_then(Video::publish_date);
        let db = vb.as_ref().and_then(Video::publish_date);
        match (da, db) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
        .then_with(|| ka.cmp(kb))
    });

    let summaries = rows
        .into_iter()
        .map(|(key, video, phase)| VideoSummary {
            date: video.as_ref().map(|v| v.date.clone()).unwrap_or_default(),
            progress: video.as_ref().map(overall_progress),
            name: key.name,
            category: key.category,
            phase,
        })
        .collect();

    Ok(Json(summaries))
}

/// POST /api/videos
pub async fn create_video(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateVideoRequest>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    let key = VideoKey::new(&req.category, &req.name);
    if !key.is_valid() {
        return Err(ApiError::BadRequest(format!("Invalid video key: {}", key)));
    }

    let mut video = Video::new(&key);
    if let Some(date) = req.date {
        video.date = date;
    }
    refresh_progress(&mut video);

    state.store.create_video(&video).await?;
    info!(video = %key, "created video");
    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /api/videos/:name?category=
pub async fn get_video(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> Result<Json<VideoDetails>, ApiError> {
    let key = video_key(&name, &query)?;
    let video = load_existing(&state, &key).await?;
    Ok(Json(VideoDetails::of(video)))
}

/// PUT /api/videos/:name?category=
///
/// Replaces the whole record. Name and category always come from the path.
pub async fn replace_video(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
    ApiJson(mut video): ApiJson<Video>,
) -> Result<Json<VideoDetails>, ApiError> {
    let key = video_key(&name, &query)?;
    let _guard = state.locks.lock(&key).await;

    let existing = load_existing(&state, &key).await?;
    video.name = key.name.clone();
    video.category = key.category.clone();
    video.path = existing.path;
    refresh_progress(&mut video);

    state.store.save_video(&video).await?;
    info!(video = %key, "replaced video");
    Ok(Json(VideoDetails::of(video)))
}

/// PUT /api/videos/:name/:section?category=
///
/// Applies a patch of named fields belonging to one section.
pub async fn update_section(
    State(state): State<AppState>,
    Path((name, section)): Path<(String, String)>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
    ApiJson(patch): ApiJson<Value>,
) -> Result<Json<SectionUpdate>, ApiError> {
    let section = Section::from_key(&section)
        .ok_or_else(|| ApiError::NotFound(format!("section {}", section)))?;
    let key = video_key(&name, &query)?;

    let Value::Object(patch) = patch else {
        return Err(ApiError::BadRequest("Request body must be a JSON object".to_string()));
    };
    if let Some(field) = patch
        .keys()
        .find(|k| !section.editable_fields().contains(&k.as_str()))
    {
        return Err(ApiError::BadRequest(format!(
            "Field {} cannot be updated in {}",
            field,
            section.key()
        )));
    }

    let _guard = state.locks.lock(&key).await;
    let existing = load_existing(&state, &key).await?;
    let mut video = apply_patch(&existing, patch)?;
    video.name = key.name.clone();
    video.category = key.category.clone();
    video.path = existing.path;
    refresh_progress(&mut video);

    state.store.save_video(&video).await?;
    info!(video = %key, section = section.key(), "updated section");

    Ok(Json(SectionUpdate {
        progress: section.stored(&video),
        phase: classify_phase(&video),
        section,
        video,
    }))
}

/// DELETE /api/videos/:name?category=
pub async fn delete_video(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> Result<StatusCode, ApiError> {
    let key = video_key(&name, &query)?;
    let _guard = state.locks.lock(&key).await;
    state.store.delete_video(&key).await?;
    info!(video = %key, "deleted video");
    Ok(StatusCode::NO_CONTENT)
}

/// Merge `patch` into the JSON form of `video`.
///
/// Objects present on both sides merge key by key, so a patch can change a
/// single sponsorship field; anything else replaces the stored value.
fn apply_patch(video: &Video, patch: Map<String, Value>) -> Result<Video, ApiError> {
    let mut current = serde_json::to_value(video)
        .map_err(|e| ApiError::BadRequest(format!("Cannot encode video: {}", e)))?;

    if let Value::Object(fields) = &mut current {
        for (name, value) in patch {
            match (fields.get_mut(&name), value) {
                (Some(Value::Object(existing)), Value::Object(update)) => {
                    existing.extend(update);
                }
                (_, value) => {
                    fields.insert(name, value);
                }
            }
        }
    }

    serde_json::from_value(current).map_err(|e| ApiError::BadRequest(format!("Invalid field value: {}", e)))
}
