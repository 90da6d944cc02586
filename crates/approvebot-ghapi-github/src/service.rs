//! GitHub adapter

use approvebot_config::Config;
use approvebot_ghapi_interface::{
    types::{GhCommitStatus, GhPullRequest, GhTimelineEvent},
    ApiService, Result,
};
use async_trait::async_trait;
use http::header;
use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
    pagination::{
        collect_pages, parse_error_document, parse_next_link, parse_page_body, Page, PER_PAGE,
    },
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GitHubApiService {
    config: Config,
}

impl GitHubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    /// Turn a non-2xx response into a [`GitHubError::RemoteError`].
    async fn check_status(response: Response) -> Result<Response, GitHubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        let message = parse_error_document(&body).unwrap_or(body);
        Err(GitHubError::RemoteError {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_page<T: DeserializeOwned + Send>(
        client: &Client,
        url: String,
    ) -> Result<Page<T>, GitHubError> {
        let response = client.get(&url).send().await?;
        let next = response
            .headers()
            .get(header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_next_link);
        let status = response.status().as_u16();
        let body = Self::check_status(response).await?.text().await?;

        Ok(Page {
            items: parse_page_body(status, &body)?,
            next,
        })
    }

    async fn get_all_pages<T: DeserializeOwned + Send>(
        &self,
        path: String,
    ) -> Result<Vec<T>, GitHubError> {
        let client = &self.get_client()?;
        let separator = if path.contains('?') { '&' } else { '?' };
        let first_url = self.build_url(format!("{path}{separator}per_page={PER_PAGE}"));

        collect_pages(first_url, move |url| Self::fetch_page(client, url)).await
    }

    async fn pulls_list_open_impl(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<GhPullRequest>, GitHubError> {
        self.get_all_pages(format!("/repos/{owner}/{name}/pulls?state=open"))
            .await
    }

    async fn issue_timeline_list_impl(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhTimelineEvent>, GitHubError> {
        self.get_all_pages(format!(
            "/repos/{owner}/{name}/issues/{issue_number}/timeline"
        ))
        .await
    }

    async fn issue_labels_add_impl(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<(), GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            labels: &'a [String],
        }

        let response = self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/labels"
            )))
            .json(&Request { labels })
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }

    async fn issue_labels_remove_impl(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<(), GitHubError> {
        // Label names contain spaces and colons, let the URL encode them.
        let mut url = Url::parse(&self.build_url(format!(
            "/repos/{owner}/{name}/issues/{issue_number}/labels"
        )))
        .map_err(|e| GitHubError::ImplementationError { source: e.into() })?;
        url.path_segments_mut()
            .map_err(|_| GitHubError::ImplementationError {
                source: format!("Cannot append label to URL {}", self.config.api.github.root_url)
                    .into(),
            })?
            .push(label);

        let response = self.get_client()?.delete(url).send().await?;
        Self::check_status(response).await?;

        Ok(())
    }

    async fn comments_post_impl(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64, GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct CommentResponse {
            id: u64,
        }

        let response = self
            .get_client()?
            .post(self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/comments"
            )))
            .json(&Request { body })
            .send()
            .await?;

        Ok(Self::check_status(response)
            .await?
            .json::<CommentResponse>()
            .await?
            .id)
    }

    async fn commit_statuses_combined_impl(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<GhCommitStatus, GitHubError> {
        let response = self
            .get_client()?
            .get(self.build_url(format!(
                "/repos/{owner}/{name}/commits/{git_ref}/status"
            )))
            .send()
            .await?;

        Ok(Self::check_status(response)
            .await?
            .json::<GhCommitStatus>()
            .await?)
    }
}

#[async_trait]
impl ApiService for GitHubApiService {
    #[tracing::instrument(skip(self))]
    async fn pulls_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequest>> {
        Ok(self.pulls_list_open_impl(owner, name).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn issue_timeline_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhTimelineEvent>> {
        Ok(self
            .issue_timeline_list_impl(owner, name, issue_number)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        Ok(self
            .issue_labels_add_impl(owner, name, issue_number, labels)
            .await?)
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()> {
        Ok(self
            .issue_labels_remove_impl(owner, name, issue_number, label)
            .await?)
    }

    #[tracing::instrument(skip(self, body), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        Ok(self
            .comments_post_impl(owner, name, issue_number, body)
            .await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commit_statuses_combined(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<GhCommitStatus> {
        Ok(self
            .commit_statuses_combined_impl(owner, name, git_ref)
            .await?)
    }
}
