//! Editing aspects - section metadata for the editing UI.
//!
//! Field lists and counts come straight from the section tables, so what the
//! UI shows always matches what the calculators count.

use serde::Serialize;
use vidtrack_core::Video;

use crate::section::{ItemKind, Section};

/// Overview of all editing aspects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectOverview {
    /// Aspects in workflow order
    pub aspects: Vec<AspectSummary>,

    /// Number of aspects
    pub total_aspects: usize,
}

/// One editing aspect (a section).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectSummary {
    /// Section key (`initial-details`)
    pub key: &'static str,

    /// Display title
    pub title: &'static str,

    /// Short description
    pub description: &'static str,

    /// Update endpoint template
    pub endpoint: String,

    /// Icon name
    pub icon: &'static str,

    /// Position in the workflow, starting at 1
    pub order: usize,

    /// Tracked items
    pub fields: Vec<AspectField>,

    /// Number of tracked items
    pub field_count: usize,

    /// Items done; present only when a video was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_field_count: Option<usize>,
}

/// One tracked item of an aspect.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectField {
    /// Field path
    pub key: &'static str,

    /// Display label
    pub label: &'static str,

    /// Value kind
    pub kind: ItemKind,

    /// Whether the item is done; present only when a video was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

fn description(section: Section) -> &'static str {
    match section {
        Section::InitialDetails => "Project, sponsorship and publish date",
        Section::WorkProgress => "Recording, assets and supporting material",
        Section::Definition => "Titles, description, tags and announcements",
        Section::PostProduction => "Thumbnail, editing and timecodes",
        Section::Publishing => "Video upload and site post",
        Section::PostPublish => "Promotion and follow-up after release",
    }
}

fn icon(section: Section) -> &'static str {
    match section {
        Section::InitialDetails => "info",
        Section::WorkProgress => "wrench",
        Section::Definition => "edit",
        Section::PostProduction => "film",
        Section::Publishing => "upload",
        Section::PostPublish => "share",
    }
}

/// Build the aspect overview, with completion counts when `video` is given.
pub fn aspect_overview(video: Option<&Video>) -> AspectOverview {
    let aspects: Vec<AspectSummary> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, &section)| summarize(section, i + 1, video))
        .collect();

    AspectOverview {
        total_aspects: aspects.len(),
        aspects,
    }
}

fn summarize(section: Section, order: usize, video: Option<&Video>) -> AspectSummary {
    let fields: Vec<AspectField> = section
        .items()
        .iter()
        .map(|item| AspectField {
            key: item.key,
            label: item.label,
            kind: item.kind(),
            completed: video.map(|v| item.is_done(v)),
        })
        .collect();

    AspectSummary {
        key: section.key(),
        title: section.title(),
        description: description(section),
        endpoint: format!("/api/videos/{{name}}/{}", section.key()),
        icon: icon(section),
        order,
        field_count: fields.len(),
        completed_field_count: video.map(|v| section.progress(v).completed),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::overall_progress;

    #[test]
    fn test_overview_without_video() {
        let overview = aspect_overview(None);
        assert_eq!(overview.total_aspects, 6);
        assert_eq!(overview.aspects[0].key, "initial-details");
        assert_eq!(overview.aspects[0].order, 1);
        assert_eq!(overview.aspects[5].key, "post-publish");
        assert_eq!(overview.aspects[1].endpoint, "/api/videos/{name}/work-progress");
        for aspect in &overview.aspects {
            assert!(aspect.completed_field_count.is_none());
            assert!(aspect.fields.iter().all(|f| f.completed.is_none()));
        }
    }

    #[test]
    fn test_overview_counts_match_calculator() {
        let video = Video {
            code: true,
            tweet: "Out now".to_string(),
            timecodes: "00:00 Intro".to_string(),
            ..Default::default()
        };
        let overview = aspect_overview(Some(&video));
        let fields: usize = overview.aspects.iter().map(|a| a.field_count).sum();
        let done: usize = overview
            .aspects
            .iter()
            .filter_map(|a| a.completed_field_count)
            .sum();
        let overall = overall_progress(&video);
        assert_eq!(fields, overall.total);
        assert_eq!(done, overall.completed);

        for aspect in &overview.aspects {
            let flagged = aspect.fields.iter().filter(|f| f.completed == Some(true)).count();
            assert_eq!(Some(flagged), aspect.completed_field_count);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(aspect_overview(None)).unwrap();
        assert_eq!(json["totalAspects"], 6);
        assert_eq!(json["aspects"][2]["fieldCount"], 8);
        assert_eq!(json["aspects"][2]["fields"][0]["kind"], "titles");
        assert!(json["aspects"][0].get("completedFieldCount").is_none());
    }
}
