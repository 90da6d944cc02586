//! GitHub API driver.

#![warn(clippy::all)]

mod auth;
mod errors;
mod pagination;
mod service;

pub use errors::GitHubError;
pub use service::GitHubApiService;
