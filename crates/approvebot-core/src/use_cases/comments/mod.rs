pub(crate) mod messages;
pub(crate) mod post_workflow_comment;

pub use messages::WorkflowComment;
pub use post_workflow_comment::PostWorkflowCommentInterface;
#[cfg(any(test, feature = "testkit"))]
pub use post_workflow_comment::MockPostWorkflowCommentInterface;
