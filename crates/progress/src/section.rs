//! Section completion counts.
//!
//! Each section is a fixed table of tracked items. An item is either a plain
//! field, judged by [`is_field_complete`], or a derived condition over
//! several fields. The table length is the section total, so the total can
//! never change with field values; only `completed` does.

use serde::Serialize;
use vidtrack_core::{SectionProgress, TitleVariant, Video};

use crate::field::{is_field_complete, FieldValue};

/// What kind of value a tracked item looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Free text field
    Text,
    /// Checkbox field
    Flag,
    /// Title candidate list
    Titles,
    /// Condition derived from several fields
    Derived,
}

#[derive(Clone, Copy)]
enum Check {
    Text(fn(&Video) -> &str),
    Flag(fn(&Video) -> bool),
    Titles(fn(&Video) -> &[TitleVariant]),
    Derived(fn(&Video) -> bool),
}

/// One item counted towards a section's progress.
#[derive(Clone, Copy)]
pub struct TrackedItem {
    /// Field path in the JSON representation (`sponsorship.amount`)
    pub key: &'static str,

    /// Label shown in the UI
    pub label: &'static str,

    check: Check,
}

impl TrackedItem {
    /// The kind of value this item checks.
    pub fn kind(&self) -> ItemKind {
        match self.check {
            Check::Text(_) => ItemKind::Text,
            Check::Flag(_) => ItemKind::Flag,
            Check::Titles(_) => ItemKind::Titles,
            Check::Derived(_) => ItemKind::Derived,
        }
    }

    /// Whether the item is done for `video`.
    pub fn is_done(&self, video: &Video) -> bool {
        match self.check {
            Check::Text(get) => is_field_complete(FieldValue::Text(get(video))),
            Check::Flag(get) => is_field_complete(FieldValue::Flag(get(video))),
            Check::Titles(get) => is_field_complete(FieldValue::Titles(get(video))),
            Check::Derived(cond) => cond(video),
        }
    }
}

impl std::fmt::Debug for TrackedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackedItem")
            .field("key", &self.key)
            .field("kind", &self.kind())
            .finish()
    }
}

const fn text(key: &'static str, label: &'static str, get: fn(&Video) -> &str) -> TrackedItem {
    TrackedItem { key, label, check: Check::Text(get) }
}

const fn flag(key: &'static str, label: &'static str, get: fn(&Video) -> bool) -> TrackedItem {
    TrackedItem { key, label, check: Check::Flag(get) }
}

const fn derived(key: &'static str, label: &'static str, cond: fn(&Video) -> bool) -> TrackedItem {
    TrackedItem { key, label, check: Check::Derived(cond) }
}

fn sponsorship_emails_done(v: &Video) -> bool {
    is_field_complete(FieldValue::Text(&v.sponsorship.emails)) || v.sponsorship.is_unsponsored()
}

fn not_blocked(v: &Video) -> bool {
    !is_field_complete(FieldValue::Text(&v.sponsorship.blocked))
}

fn not_delayed(v: &Video) -> bool {
    !v.delayed
}

// Timecodes with a FIXME: marker are still being worked on.
fn timecodes_done(v: &Video) -> bool {
    is_field_complete(FieldValue::Text(&v.timecodes)) && !v.timecodes.contains("FIXME:")
}

fn sponsors_notified(v: &Video) -> bool {
    v.notified_sponsors || v.sponsorship.is_unsponsored()
}

static INITIAL_DETAILS: [TrackedItem; 10] = [
    text("projectName", "Project name", |v| v.project_name.as_str()),
    text("projectUrl", "Project URL", |v| v.project_url.as_str()),
    text("gist", "Gist", |v| v.gist.as_str()),
    text("date", "Publish date", |v| v.date.as_str()),
    text("sponsorship.amount", "Sponsorship amount", |v| v.sponsorship.amount.as_str()),
    text("sponsorship.name", "Sponsor name", |v| v.sponsorship.name.as_str()),
    text("sponsorship.url", "Sponsor URL", |v| v.sponsorship.url.as_str()),
    derived("sponsorship.emails", "Sponsorship emails", sponsorship_emails_done),
    derived("sponsorship.blocked", "Not blocked by sponsor", not_blocked),
    derived("delayed", "Not delayed", not_delayed),
];

static WORK_PROGRESS: [TrackedItem; 11] = [
    flag("code", "Code done", |v| v.code),
    flag("head", "Talking head done", |v| v.head),
    flag("screen", "Screen recording done", |v| v.screen),
    text("relatedVideos", "Related videos", |v| v.related_videos.as_str()),
    flag("thumbnails", "Thumbnails done", |v| v.thumbnails),
    flag("diagrams", "Diagrams done", |v| v.diagrams),
    flag("screenshots", "Screenshots done", |v| v.screenshots),
    text("location", "Files location", |v| v.location.as_str()),
    text("tagline", "Tagline", |v| v.tagline.as_str()),
    text("taglineIdeas", "Tagline ideas", |v| v.tagline_ideas.as_str()),
    text("otherLogos", "Other logos", |v| v.other_logos.as_str()),
];

static DEFINITION: [TrackedItem; 8] = [
    TrackedItem {
        key: "titles",
        label: "Titles",
        check: Check::Titles(|v| v.titles.as_slice()),
    },
    text("description", "Description", |v| v.description.as_str()),
    text("highlight", "Highlight", |v| v.highlight.as_str()),
    text("tags", "Tags", |v| v.tags.as_str()),
    text("descriptionTags", "Description tags", |v| v.description_tags.as_str()),
    text("tweet", "Tweet", |v| v.tweet.as_str()),
    text("animations", "Animations script", |v| v.animations.as_str()),
    flag("requestThumbnail", "Thumbnail requested", |v| v.request_thumbnail),
];

static POST_PRODUCTION: [TrackedItem; 6] = [
    text("thumbnail", "Thumbnail", |v| v.thumbnail.as_str()),
    text("members", "Members", |v| v.members.as_str()),
    flag("requestEdit", "Edit requested", |v| v.request_edit),
    derived("timecodes", "Timecodes", timecodes_done),
    flag("movie", "Movie done", |v| v.movie),
    flag("slides", "Slides done", |v| v.slides),
];

static PUBLISHING: [TrackedItem; 2] = [
    text("uploadVideo", "Uploaded video", |v| v.upload_video.as_str()),
    text("hugoPath", "Site post", |v| v.hugo_path.as_str()),
];

static POST_PUBLISH: [TrackedItem; 9] = [
    flag("linkedInPosted", "Posted to LinkedIn", |v| v.linked_in_posted),
    flag("slackPosted", "Posted to Slack", |v| v.slack_posted),
    flag("hnPosted", "Posted to Hacker News", |v| v.hn_posted),
    flag("youtubeHighlight", "YouTube highlight", |v| v.youtube_highlight),
    flag("youtubeComment", "YouTube comment", |v| v.youtube_comment),
    flag("youtubeCommentReply", "YouTube comment replies", |v| v.youtube_comment_reply),
    flag("gde", "GDE advocacy", |v| v.gde),
    text("repo", "Code repository", |v| v.repo.as_str()),
    derived("notifiedSponsors", "Sponsors notified", sponsors_notified),
];

/// One of the six field groupings tracked for progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// Project, sponsorship and scheduling
    InitialDetails,
    /// Recording and asset preparation
    WorkProgress,
    /// Titles, description and metadata
    Definition,
    /// Editing and final assets
    PostProduction,
    /// Upload and site post
    Publishing,
    /// Promotion after release
    PostPublish,
}

impl Section {
    /// All sections in workflow order.
    pub const ALL: [Section; 6] = [
        Section::InitialDetails,
        Section::WorkProgress,
        Section::Definition,
        Section::PostProduction,
        Section::Publishing,
        Section::PostPublish,
    ];

    /// URL segment (`initial-details`).
    pub fn key(self) -> &'static str {
        match self {
            Section::InitialDetails => "initial-details",
            Section::WorkProgress => "work-progress",
            Section::Definition => "definition",
            Section::PostProduction => "post-production",
            Section::Publishing => "publishing",
            Section::PostPublish => "post-publish",
        }
    }

    /// Parse a URL segment.
    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Human readable name.
    pub fn title(self) -> &'static str {
        match self {
            Section::InitialDetails => "Initial Details",
            Section::WorkProgress => "Work Progress",
            Section::Definition => "Definition",
            Section::PostProduction => "Post-Production",
            Section::Publishing => "Publishing",
            Section::PostPublish => "Post-Publish",
        }
    }

    /// Tracked items; the slice length is the section total.
    pub fn items(self) -> &'static [TrackedItem] {
        match self {
            Section::InitialDetails => &INITIAL_DETAILS,
            Section::WorkProgress => &WORK_PROGRESS,
            Section::Definition => &DEFINITION,
            Section::PostProduction => &POST_PRODUCTION,
            Section::Publishing => &PUBLISHING,
            Section::PostPublish => &POST_PUBLISH,
        }
    }

    /// Top-level JSON keys a section update may change.
    pub fn editable_fields(self) -> &'static [&'static str] {
        match self {
            Section::InitialDetails => {
                &["projectName", "projectUrl", "sponsorship", "date", "delayed", "gist"]
            }
            Section::WorkProgress => &[
                "code",
                "head",
                "screen",
                "relatedVideos",
                "thumbnails",
                "diagrams",
                "screenshots",
                "location",
                "tagline",
                "taglineIdeas",
                "otherLogos",
            ],
            Section::Definition => &[
                "title",
                "titles",
                "description",
                "highlight",
                "tags",
                "descriptionTags",
                "tweet",
                "animations",
                "requestThumbnail",
                "language",
            ],
            Section::PostProduction => {
                &["thumbnail", "members", "requestEdit", "timecodes", "movie", "slides"]
            }
            Section::Publishing => &["uploadVideo", "videoId", "hugoPath"],
            Section::PostPublish => &[
                "linkedInPosted",
                "slackPosted",
                "hnPosted",
                "youtubeHighlight",
                "youtubeComment",
                "youtubeCommentReply",
                "gde",
                "repo",
                "notifiedSponsors",
            ],
        }
    }

    /// Compute the section's progress from the current field values.
    pub fn progress(self, video: &Video) -> SectionProgress {
        let items = self.items();
        let completed = items.iter().filter(|item| item.is_done(video)).count();
        SectionProgress::new(completed, items.len())
    }

    /// The counter last stored on the record for this section.
    pub fn stored(self, video: &Video) -> SectionProgress {
        match self {
            Section::InitialDetails => video.init,
            Section::WorkProgress => video.work,
            Section::Definition => video.define,
            Section::PostProduction => video.edit,
            Section::Publishing => video.publish,
            Section::PostPublish => video.post_publish,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Initial details: seven fields plus three auto-passing conditions.
pub fn initial_details_progress(video: &Video) -> SectionProgress {
    Section::InitialDetails.progress(video)
}

/// Work progress: eleven fields.
pub fn work_progress(video: &Video) -> SectionProgress {
    Section::WorkProgress.progress(video)
}

/// Definition: the title candidates plus seven fields.
pub fn definition_progress(video: &Video) -> SectionProgress {
    Section::Definition.progress(video)
}

/// Post-production: five fields plus timecodes without FIXME markers.
pub fn post_production_progress(video: &Video) -> SectionProgress {
    Section::PostProduction.progress(video)
}

/// Publishing: upload and site post.
pub fn publishing_progress(video: &Video) -> SectionProgress {
    Section::Publishing.progress(video)
}

/// Post-publish: eight fields plus sponsor notification.
pub fn post_publish_progress(video: &Video) -> SectionProgress {
    Section::PostPublish.progress(video)
}

/// Sum of all six sections.
pub fn overall_progress(video: &Video) -> SectionProgress {
    Section::ALL.iter().map(|s| s.progress(video)).sum()
}

/// Recompute every stored section counter on `video`.
pub fn refresh_progress(video: &mut Video) {
    video.init = initial_details_progress(video);
    video.work = work_progress(video);
    video.define = definition_progress(video);
    video.edit = post_production_progress(video);
    video.publish = publishing_progress(video);
    video.post_publish = post_publish_progress(video);
}
