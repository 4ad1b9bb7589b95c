//! Loading videos for phase classification.

use tracing::warn;
use vidtrack_core::{Phase, Video, VideoKey};
use vidtrack_progress::classify_phase;

use super::VideoStore;

/// Load a video and classify it.
///
/// A record that is missing or unreadable classifies as [`Phase::Ideas`] and
/// is logged, so phase counts account for every indexed video.
pub async fn load_classified(store: &dyn VideoStore, key: &VideoKey) -> (Option<Video>, Phase) {
    match store.load_video(key).await {
        Ok(Some(video)) => {
            let phase = classify_phase(&video);
            (Some(video), phase)
        }
        Ok(None) => {
            warn!(video = %key, "indexed video has no record, counting as ideas");
            (None, Phase::Ideas)
        }
        Err(e) => {
            warn!(video = %key, error = %e, "failed to load video, counting as ideas");
            (None, Phase::Ideas)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::YamlStorage;

    #[tokio::test]
    async fn test_stored_video_is_classified() {
        let dir = tempfile::tempdir().unwrap();
        let storage = YamlStorage::new(dir.path()).await.unwrap();
        let key = VideoKey::new("devops", "argo-cd");
        let mut video = Video::new(&key);
        video.repo = "https://github.com/vfarcic/argo-cd-demo".to_string();
        storage.create_video(&video).await.unwrap();

        let (loaded, phase) = load_classified(&storage, &key).await;
        assert_eq!(phase, Phase::Published);
        assert_eq!(loaded.unwrap().repo, video.repo);
    }

    #[tokio::test]
    async fn test_missing_record_counts_as_ideas() {
        let dir = tempfile::tempdir().unwrap();
        let storage = YamlStorage::new(dir.path()).await.unwrap();

        let (loaded, phase) = load_classified(&storage, &VideoKey::new("devops", "gone")).await;
        assert!(loaded.is_none());
        assert_eq!(phase, Phase::Ideas);
    }

    #[tokio::test]
    async fn test_broken_record_counts_as_ideas() {
        let dir = tempfile::tempdir().unwrap();
        let storage = YamlStorage::new(dir.path()).await.unwrap();
        let category = dir.path().join("manuscript").join("devops");
        std::fs::create_dir_all(&category).unwrap();
        // Published if it parsed, but the code flag is not a bool.
        std::fs::write(category.join("broken.yaml"), "repo: https://x\ncode: [not a bool").unwrap();

        let (loaded, phase) = load_classified(&storage, &VideoKey::new("devops", "broken")).await;
        assert!(loaded.is_none());
        assert_eq!(phase, Phase::Ideas);
    }
}
