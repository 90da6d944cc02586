mod commit_author;
mod timeline_event;

pub use commit_author::GhCommitAuthor;
pub use timeline_event::{
    GhCommentedEvent, GhCommittedEvent, GhLabelEvent, GhReviewedEvent, GhTimelineEvent,
};
