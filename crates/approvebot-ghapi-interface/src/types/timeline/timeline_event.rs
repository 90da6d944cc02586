use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use crate::types::{GhCommitAuthor, GhLabel, GhReviewState, GhUser};

/// Entry of an issue timeline.
///
/// Only the event kinds the approval workflow looks at are decoded, every
/// other kind lands in [`GhTimelineEvent::Other`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GhTimelineEvent {
    Commented(GhCommentedEvent),
    Committed(GhCommittedEvent),
    Labeled(GhLabelEvent),
    Unlabeled(GhLabelEvent),
    Reviewed(GhReviewedEvent),
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, SmartDefault)]
pub struct GhCommentedEvent {
    pub actor: GhUser,
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhCommittedEvent {
    pub sha: String,
    pub author: GhCommitAuthor,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, SmartDefault)]
pub struct GhLabelEvent {
    pub actor: GhUser,
    pub label: GhLabel,
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhReviewedEvent {
    #[serde(default)]
    pub user: GhUser,
    pub state: GhReviewState,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_deserialize_timeline() {
        let events: Vec<GhTimelineEvent> = serde_json::from_str(
            r#"[
                {
                    "event": "committed",
                    "sha": "a1b2c3",
                    "author": {"name": "Jane", "email": "jane@example.com", "date": "2024-03-01T10:00:00Z"},
                    "committer": {"name": "Jane", "email": "jane@example.com", "date": "2024-03-01T10:00:00Z"},
                    "message": "Fix leak"
                },
                {
                    "event": "labeled",
                    "actor": {"login": "reviewer"},
                    "label": {"name": "approval: done", "color": "00ff00"},
                    "created_at": "2024-03-02T08:30:00Z"
                },
                {
                    "event": "cross-referenced",
                    "actor": {"login": "someone"},
                    "created_at": "2024-03-02T09:00:00Z"
                },
                {
                    "event": "commented",
                    "actor": {"login": "openssl-machine"},
                    "user": {"login": "openssl-machine"},
                    "body": "hello",
                    "created_at": "2024-03-03T08:30:00Z",
                    "updated_at": "2024-03-03T08:31:00Z"
                },
                {
                    "event": "reviewed",
                    "user": {"login": "reviewer"},
                    "state": "approved",
                    "submitted_at": "2024-03-02T08:29:00Z"
                },
                {
                    "event": "unlabeled",
                    "actor": {"login": "reviewer"},
                    "label": {"name": "urgent", "color": "ff0000"},
                    "created_at": "2024-03-04T08:30:00Z"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 6);
        assert_eq!(
            events[0],
            GhTimelineEvent::Committed(GhCommittedEvent {
                sha: "a1b2c3".into(),
                author: GhCommitAuthor {
                    name: "Jane".into(),
                    email: "jane@example.com".into(),
                    date: datetime!(2024-03-01 10:00:00 UTC),
                },
            })
        );
        assert_eq!(
            events[1],
            GhTimelineEvent::Labeled(GhLabelEvent {
                actor: "reviewer".into(),
                label: GhLabel {
                    name: "approval: done".into(),
                    color: "00ff00".into(),
                    description: None,
                },
                created_at: datetime!(2024-03-02 08:30:00 UTC),
            })
        );
        assert_eq!(events[2], GhTimelineEvent::Other);
        assert_eq!(
            events[3],
            GhTimelineEvent::Commented(GhCommentedEvent {
                actor: "openssl-machine".into(),
                updated_at: datetime!(2024-03-03 08:31:00 UTC),
            })
        );
        assert_eq!(
            events[4],
            GhTimelineEvent::Reviewed(GhReviewedEvent {
                user: "reviewer".into(),
                state: GhReviewState::Approved,
                submitted_at: Some(datetime!(2024-03-02 08:29:00 UTC)),
            })
        );
        assert!(matches!(events[5], GhTimelineEvent::Unlabeled(_)));
    }

    #[test]
    fn test_malformed_event_is_rejected() {
        // A labeled event without its label cannot be folded.
        let result: Result<Vec<GhTimelineEvent>, _> = serde_json::from_str(
            r#"[{"event": "labeled", "actor": {"login": "a"}, "created_at": "2024-03-02T08:30:00Z"}]"#,
        );
        assert!(result.is_err());
    }
}
