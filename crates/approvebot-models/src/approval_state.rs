use std::collections::HashMap;

use approvebot_ghapi_interface::types::{GhReviewState, GhTimelineEvent};
use time::OffsetDateTime;
use tracing::debug;

/// Approval state of a pull request, rebuilt from its timeline on every check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalState {
    /// Last application date of each currently active label.
    pub active_labels: HashMap<String, OffsetDateTime>,
    /// Comments and commits from humans.
    pub human_updates: Vec<OffsetDateTime>,
    /// Comments from the automation account.
    pub automation_comments: Vec<OffsetDateTime>,
    /// Approving review submissions.
    pub approving_reviews: Vec<OffsetDateTime>,
    /// Latest committed SHA.
    pub head_sha: Option<String>,
}

impl ApprovalState {
    /// Fold an ordered timeline into an approval state.
    ///
    /// Actors whose login contains `automation_login` are the automation account.
    pub fn from_events(events: &[GhTimelineEvent], automation_login: &str) -> Self {
        let mut state = Self::default();

        for event in events {
            match event {
                GhTimelineEvent::Commented(e) => {
                    debug!(actor = %e.actor.login, at = %e.updated_at, "commented");
                    if e.actor.login.contains(automation_login) {
                        state.automation_comments.push(e.updated_at);
                    } else {
                        state.human_updates.push(e.updated_at);
                    }
                }
                GhTimelineEvent::Committed(e) => {
                    debug!(sha = %e.sha, at = %e.author.date, "committed");
                    state.head_sha = Some(e.sha.clone());
                    state.human_updates.push(e.author.date);
                }
                GhTimelineEvent::Labeled(e) => {
                    debug!(label = %e.label.name, at = %e.created_at, "labeled");
                    state
                        .active_labels
                        .insert(e.label.name.clone(), e.created_at);
                }
                GhTimelineEvent::Unlabeled(e) => {
                    debug!(label = %e.label.name, at = %e.created_at, "unlabeled");
                    // Labels renamed in the meantime were never seen as labeled.
                    state.active_labels.remove(&e.label.name);
                }
                GhTimelineEvent::Reviewed(e) => {
                    debug!(reviewer = %e.user.login, state = %e.state, "reviewed");
                    if let (GhReviewState::Approved, Some(at)) = (e.state, e.submitted_at) {
                        state.approving_reviews.push(at);
                    }
                }
                GhTimelineEvent::Other => (),
            }
        }

        state
    }

    pub fn is_label_active(&self, name: &str) -> bool {
        self.active_labels.contains_key(name)
    }

    /// When the label was last applied, if it is still active.
    pub fn label_applied_at(&self, name: &str) -> Option<OffsetDateTime> {
        self.active_labels.get(name).copied()
    }

    pub fn latest_human_update(&self) -> Option<OffsetDateTime> {
        self.human_updates.iter().max().copied()
    }

    pub fn latest_approving_review(&self) -> Option<OffsetDateTime> {
        self.approving_reviews.iter().max().copied()
    }

    pub fn latest_automation_comment(&self) -> Option<OffsetDateTime> {
        self.automation_comments.iter().max().copied()
    }

    /// Check if a human commented or committed strictly after `date`.
    pub fn has_human_update_after(&self, date: OffsetDateTime) -> bool {
        self.latest_human_update().map_or(false, |d| d > date)
    }

    /// Check if the automation account commented strictly after `date`.
    pub fn has_automation_comment_after(&self, date: OffsetDateTime) -> bool {
        self.latest_automation_comment()
            .map_or(false, |d| d > date)
    }
}
