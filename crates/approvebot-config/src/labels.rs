pub(crate) const APPROVAL_DONE: &str = "approval: done";
pub(crate) const READY_TO_MERGE: &str = "approval: ready to merge";
pub(crate) const URGENT: &str = "urgent";

/// Names of the labels driving the approval workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelsConfig {
    /// Set by humans once reviewers approved the change.
    pub approval_done: String,
    /// Set by the bot once the waiting period is over.
    pub ready_to_merge: String,
    /// Asks for immediate attention.
    pub urgent: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            approval_done: APPROVAL_DONE.into(),
            ready_to_merge: READY_TO_MERGE.into(),
            urgent: URGENT.into(),
        }
    }
}
