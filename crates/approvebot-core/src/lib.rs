//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    checks::determine_ci_status::DetermineCiStatus,
    comments::post_workflow_comment::PostWorkflowComment,
    pulls::{
        evaluate_pull_request::EvaluatePullRequest,
        list_candidate_pull_requests::ListCandidatePullRequests,
        promote_pull_request::PromotePullRequest,
    },
};

module! {
    pub CoreModule {
        components = [
            DetermineCiStatus, PostWorkflowComment, EvaluatePullRequest,
            ListCandidatePullRequests, PromotePullRequest
        ],
        providers = []
    }
}
