//! Phase classification.

use vidtrack_core::{Phase, Video};

use crate::field::{is_field_complete, FieldValue};

fn is_set(s: &str) -> bool {
    is_field_complete(FieldValue::Text(s))
}

/// Classify a video into exactly one lifecycle phase.
///
/// Conditions are checked in priority order and the first match wins. Each
/// composite condition is all-or-nothing: a partially satisfied one never
/// matches, and evaluation simply moves on to the next condition.
pub fn classify_phase(video: &Video) -> Phase {
    if is_set(&video.sponsorship.blocked) {
        Phase::SponsoredBlocked
    } else if video.delayed {
        Phase::Delayed
    } else if is_set(&video.repo) {
        Phase::Published
    } else if is_set(&video.upload_video) && is_set(&video.tweet) {
        Phase::PublishPending
    } else if video.request_edit {
        Phase::EditRequested
    } else if video.code && video.screen && video.head && video.diagrams {
        Phase::MaterialDone
    } else if is_set(&video.date) {
        Phase::Started
    } else {
        Phase::Ideas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidtrack_core::Sponsorship;

    fn blocked(reason: &str) -> Sponsorship {
        Sponsorship {
            blocked: reason.to_string(),
            ..Default::default()
        }
    }

    fn material_done() -> Video {
        Video {
            code: true,
            screen: true,
            head: true,
            diagrams: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_video_is_idea() {
        assert_eq!(classify_phase(&Video::default()), Phase::Ideas);
    }

    #[test]
    fn test_each_phase_alone() {
        let cases = [
            (Video { sponsorship: blocked("legal review"), ..Default::default() }, Phase::SponsoredBlocked),
            (Video { delayed: true, ..Default::default() }, Phase::Delayed),
            (Video { repo: "https://github.com/x/y".to_string(), ..Default::default() }, Phase::Published),
            (
                Video {
                    upload_video: "video.mp4".to_string(),
                    tweet: "Out now".to_string(),
                    ..Default::default()
                },
                Phase::PublishPending,
            ),
            (Video { request_edit: true, ..Default::default() }, Phase::EditRequested),
            (material_done(), Phase::MaterialDone),
            (Video { date: "2024-03-18T16:00".to_string(), ..Default::default() }, Phase::Started),
        ];
        for (video, expected) in cases {
            assert_eq!(classify_phase(&video), expected);
        }
    }

    #[test]
    fn test_blocked_beats_delayed() {
        let video = Video {
            delayed: true,
            sponsorship: blocked("reason"),
            ..Default::default()
        };
        assert_eq!(classify_phase(&video), Phase::SponsoredBlocked);
    }

    #[test]
    fn test_edit_requested_beats_material_done() {
        let mut video = material_done();
        video.request_edit = true;
        assert_eq!(classify_phase(&video), Phase::EditRequested);
    }

    #[test]
    fn test_published_ignores_publish_pending_fields() {
        let video = Video {
            repo: "https://github.com/x/y".to_string(),
            request_edit: true,
            ..Default::default()
        };
        assert_eq!(classify_phase(&video), Phase::Published);
    }

    #[test]
    fn test_partial_material_falls_through() {
        let video = Video {
            code: true,
            screen: true,
            ..Default::default()
        };
        assert_eq!(classify_phase(&video), Phase::Ideas);

        let dated = Video {
            date: "2024-03-18T16:00".to_string(),
            ..video
        };
        assert_eq!(classify_phase(&dated), Phase::Started);
    }

    #[test]
    fn test_partial_publish_pending_falls_through() {
        let upload_only = Video {
            upload_video: "video.mp4".to_string(),
            ..Default::default()
        };
        assert_eq!(classify_phase(&upload_only), Phase::Ideas);

        let tweet_only = Video {
            tweet: "Out now".to_string(),
            ..Default::default()
        };
        assert_eq!(classify_phase(&tweet_only), Phase::Ideas);
    }

    #[test]
    fn test_placeholders_do_not_match() {
        let video = Video {
            sponsorship: blocked("-"),
            repo: "  ".to_string(),
            date: "-".to_string(),
            ..Default::default()
        };
        assert_eq!(classify_phase(&video), Phase::Ideas);
    }

    #[test]
    fn test_every_flag_combination_classifies() {
        // 2^7 combinations of the inputs the classifier looks at.
        for bits in 0u8..128 {
            let on = |i: u8| bits & (1 << i) != 0;
            let text = |i: u8| if on(i) { "x".to_string() } else { String::new() };
            let video = Video {
                sponsorship: Sponsorship { blocked: text(0), ..Default::default() },
                delayed: on(1),
                repo: text(2),
                upload_video: text(3),
                tweet: text(3),
                request_edit: on(4),
                code: on(5),
                screen: on(5),
                head: on(5),
                diagrams: on(5),
                date: text(6),
                ..Default::default()
            };
            let phase = classify_phase(&video);
            let expected = if on(0) {
                Phase::SponsoredBlocked
            } else if on(1) {
                Phase::Delayed
            } else if on(2) {
                Phase::Published
            } else if on(3) {
                Phase::PublishPending
            } else if on(4) {
                Phase::EditRequested
            } else if on(5) {
                Phase::MaterialDone
            } else if on(6) {
                Phase::Started
            } else {
                Phase::Ideas
            };
            assert_eq!(phase, expected, "bits {bits:07b}");
        }
    }
}
