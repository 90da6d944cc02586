pub(crate) mod evaluate_pull_request;
pub(crate) mod list_candidate_pull_requests;
mod outcome;
pub(crate) mod promote_pull_request;

pub use evaluate_pull_request::EvaluatePullRequestInterface;
pub use list_candidate_pull_requests::ListCandidatePullRequestsInterface;
pub use outcome::EvaluationOutcome;
pub use promote_pull_request::PromotePullRequestInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    evaluate_pull_request::MockEvaluatePullRequestInterface,
    list_candidate_pull_requests::MockListCandidatePullRequestsInterface,
    promote_pull_request::MockPromotePullRequestInterface,
};
