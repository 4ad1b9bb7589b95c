//! Phase overview endpoint

use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::Serialize;
use vidtrack_core::Phase;
use vidtrack_storage::load_classified;

use super::ApiError;
use crate::AppState;

/// Number of videos in one phase
#[derive(Debug, Serialize)]
pub struct PhaseCount {
    pub id: u8,
    pub name: &'static str,
    pub count: usize,
}

/// GET /api/videos/phases
///
/// Returns all eight phases in id order with the number of videos in each.
pub async fn list_phases(State(state): State<AppState>) -> Result<Json<Vec<PhaseCount>>, ApiError> {
    let mut counts: HashMap<Phase, usize> = HashMap::new();
    for entry in state.store.list_index().await? {
        let (_, phase) = load_classified(state.store.as_ref(), &entry.key()).await;
        *counts.entry(phase).or_default() += 1;
    }

    let phases = Phase::ALL
        .iter()
        .map(|&phase| PhaseCount {
            id: phase.id(),
            name: phase.title(),
            count: counts.get(&phase).copied().unwrap_or(0),
        })
        .collect();

    Ok(Json(phases))
}
