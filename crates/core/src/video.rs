//! Video model - everything tracked about one video across its lifecycle.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::id::VideoKey;
use crate::progress::SectionProgress;

/// Format of the publish date field (`2024-03-18T16:00`).
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A video record.
///
/// Every field is optional in practice: an empty string, `false` or an empty
/// list means "not done yet". Fields are grouped by the section that tracks
/// them; the grouping only matters to the progress calculators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    /// Video name
    pub name: String,

    /// Category the video is filed under
    pub category: String,

    /// Location of the backing file, filled in by the store on load
    #[serde(skip)]
    pub path: String,

    // === Initial details ===
    /// Name of the project the video is about
    pub project_name: String,

    /// Project home page
    pub project_url: String,

    /// Sponsorship details
    pub sponsorship: Sponsorship,

    /// Planned publish date, see [`DATE_FORMAT`]
    pub date: String,

    /// Publishing was postponed
    pub delayed: bool,

    /// Path to the manuscript gist
    pub gist: String,

    // === Work progress ===
    /// Code for the demo is done
    pub code: bool,

    /// Talking head segments are recorded
    pub head: bool,

    /// Screen recording is done
    pub screen: bool,

    /// Related videos to link from this one
    pub related_videos: String,

    /// Thumbnails are done
    pub thumbnails: bool,

    /// Diagrams are done
    pub diagrams: bool,

    /// Screenshots are done
    pub screenshots: bool,

    /// Where the raw material is stored
    pub location: String,

    /// Tagline
    pub tagline: String,

    /// Ideas for the tagline
    pub tagline_ideas: String,

    /// Other logos and assets
    pub other_logos: String,

    // === Definition ===
    /// Single title used by older records; superseded by `titles`
    pub title: String,

    /// Title candidates with their share weight
    pub titles: Vec<TitleVariant>,

    /// Description
    pub description: String,

    /// Highlight
    pub highlight: String,

    /// Tags
    pub tags: String,

    /// Tags appended to the description
    pub description_tags: String,

    /// Announcement tweet
    pub tweet: String,

    /// Animations script
    pub animations: String,

    /// A thumbnail was requested from the designer
    pub request_thumbnail: bool,

    // === Post-production ===
    /// Path to the thumbnail image
    pub thumbnail: String,

    /// Members to thank
    pub members: String,

    /// Editing was requested
    pub request_edit: bool,

    /// Timecodes for the description
    pub timecodes: String,

    /// Final movie is rendered
    pub movie: bool,

    /// Slides are done
    pub slides: bool,

    // === Publishing ===
    /// Reference to the uploaded video file
    pub upload_video: String,

    /// YouTube video id, filled in after upload
    pub video_id: String,

    /// Path to the generated site post
    pub hugo_path: String,

    // === Post-publish ===
    /// Posted to LinkedIn
    pub linked_in_posted: bool,

    /// Posted to Slack
    pub slack_posted: bool,

    /// Posted to Hacker News
    pub hn_posted: bool,

    /// YouTube highlight is set
    pub youtube_highlight: bool,

    /// Pinned YouTube comment is written
    pub youtube_comment: bool,

    /// YouTube comments are answered
    pub youtube_comment_reply: bool,

    /// Submitted to the GDE advocacy program
    pub gde: bool,

    /// Code repository URL
    pub repo: String,

    /// Sponsors were notified about the release
    pub notified_sponsors: bool,

    /// Language of the video
    pub language: String,

    // === Stored section counters ===
    /// Initial details progress
    pub init: SectionProgress,

    /// Work progress
    pub work: SectionProgress,

    /// Definition progress
    pub define: SectionProgress,

    /// Post-production progress
    pub edit: SectionProgress,

    /// Publishing progress
    pub publish: SectionProgress,

    /// Post-publish progress
    pub post_publish: SectionProgress,
}

impl Video {
    /// Create an empty video identified by `key`.
    pub fn new(key: &VideoKey) -> Self {
        Self {
            name: key.name.clone(),
            category: key.category.clone(),
            ..Default::default()
        }
    }

    /// The key this video is stored under.
    pub fn key(&self) -> VideoKey {
        VideoKey {
            category: self.category.clone(),
            name: self.name.clone(),
        }
    }

    /// Parse the publish date.
    ///
    /// Accepts the full [`DATE_FORMAT`] or a bare `YYYY-MM-DD`, which is taken
    /// as midnight. Anything else yields `None`.
    pub fn publish_date(&self) -> Option<NaiveDateTime> {
        let date = self.date.trim();
        NaiveDateTime::parse_from_str(date, DATE_FORMAT)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

/// Sponsorship of a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sponsorship {
    /// Agreed amount; empty, `N/A` or `-` means not sponsored
    pub amount: String,

    /// Sponsor contact emails
    pub emails: String,

    /// Reason the sponsorship blocks the video, if any
    pub blocked: String,

    /// Sponsor name
    pub name: String,

    /// Sponsor URL
    pub url: String,
}

impl Sponsorship {
    /// True when the video carries no sponsorship at all.
    pub fn is_unsponsored(&self) -> bool {
        matches!(self.amount.trim(), "" | "N/A" | "-")
    }
}

/// One title candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleVariant {
    /// Position in the candidate list
    pub index: u32,

    /// Title text
    pub text: String,

    /// Share of impressions this candidate received, in percent
    pub share: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unsponsored() {
        for amount in ["", "  ", "N/A", "-"] {
            let s = Sponsorship { amount: amount.to_string(), ..Default::default() };
            assert!(s.is_unsponsored(), "{amount:?} should count as unsponsored");
        }
        let s = Sponsorship { amount: "1000".to_string(), ..Default::default() };
        assert!(!s.is_unsponsored());
    }

    #[test]
    fn test_publish_date() {
        let mut video = Video::default();
        assert!(video.publish_date().is_none());

        video.date = "2024-03-18T16:00".to_string();
        let parsed = video.publish_date().unwrap();
        assert_eq!(parsed.format(DATE_FORMAT).to_string(), "2024-03-18T16:00");

        video.date = "2024-03-18".to_string();
        assert!(video.publish_date().is_some());

        video.date = "next week".to_string();
        assert!(video.publish_date().is_none());
    }

    #[test]
    fn test_new_and_key() {
        let key = VideoKey::new("devops", "argo-cd");
        let video = Video::new(&key);
        assert_eq!(video.key(), key);
        assert!(video.titles.is_empty());
    }

    #[test]
    fn test_partial_yaml_loads_with_defaults() {
        let yaml = "name: argo-cd\ncategory: devops\ncode: true\nsponsorship:\n  amount: N/A\n";
        let video: Video = serde_yaml::from_str(yaml).unwrap();
        assert!(video.code);
        assert_eq!(video.sponsorship.amount, "N/A");
        assert!(video.tweet.is_empty());
        assert_eq!(video.init, SectionProgress::default());
    }

    #[test]
    fn test_json_uses_camel_case() {
        let video = Video {
            project_url: "https://argo-cd.io".to_string(),
            request_edit: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["projectUrl"], "https://argo-cd.io");
        assert_eq!(json["requestEdit"], true);
        assert!(json.get("path").is_none());
    }
}
