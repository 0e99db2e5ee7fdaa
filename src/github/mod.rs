//! GitHub retrieval module.
//!
//! Fetches the issues and issue comments of a single repository and exposes
//! them as the source records consumed by the conversion pipeline.

mod client;
mod error;
mod resource;

pub use error::GithubError;
pub use resource::*;

use client::Client;
use log::*;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const PAGE_SIZE: usize = 100;

/// Responsible for asynchronous interaction with the GitHub API for one
/// repository.
///
pub struct Github {
    client: Client,
    owner: String,
    repo: String,
    per_page: usize,
}

impl Github {
    /// Returns a new instance for the given repository, token, and API base URL.
    ///
    pub fn new(
        owner: &str,
        repo: &str,
        access_token: Option<&str>,
        base_url: &str,
    ) -> Result<Github, GithubError> {
        debug!(
            "Initializing GitHub client for {}/{} at {}...",
            owner, repo, base_url
        );
        Ok(Github {
            client: Client::new(access_token, base_url)?,
            owner: owner.to_owned(),
            repo: repo.to_owned(),
            per_page: PAGE_SIZE,
        })
    }

    /// Returns every issue of the repository regardless of state, oldest
    /// first. Pull requests are dropped unless `include_pull_requests` is set.
    ///
    pub async fn issues(&self, include_pull_requests: bool) -> Result<Vec<Issue>, GithubError> {
        debug!(
            "Requesting issues for {}/{} (with pagination)...",
            self.owner, self.repo
        );
        let path = format!("repos/{}/{}/issues", self.owner, self.repo);
        let data: Vec<Issue> = self
            .client
            .list_paginated(
                &path,
                &[("state", "all"), ("sort", "created"), ("direction", "asc")],
                self.per_page,
            )
            .await?;

        let total = data.len();
        let issues: Vec<Issue> = data
            .into_iter()
            .filter(|issue| include_pull_requests || !issue.is_pull_request())
            .collect();
        if issues.len() < total {
            debug!("Skipped {} pull requests", total - issues.len());
        }
        info!("Retrieved {} issues from {}/{}", issues.len(), self.owner, self.repo);
        Ok(issues)
    }

    /// Returns every issue comment of the repository, oldest first.
    ///
    pub async fn comments(&self) -> Result<Vec<Comment>, GithubError> {
        debug!(
            "Requesting issue comments for {}/{} (with pagination)...",
            self.owner, self.repo
        );
        let path = format!("repos/{}/{}/issues/comments", self.owner, self.repo);
        let comments: Vec<Comment> = self
            .client
            .list_paginated(
                &path,
                &[("sort", "created"), ("direction", "asc")],
                self.per_page,
            )
            .await?;
        info!(
            "Retrieved {} comments from {}/{}",
            comments.len(),
            self.owner,
            self.repo
        );
        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use httpmock::MockServer;
    use serde_json::json;
    use uuid::Uuid;

    fn issue_json(number: u64) -> serde_json::Value {
        json!({
            "number": number,
            "state": "open",
            "user": { "login": "octocat" },
            "assignee": null,
            "created_at": "2021-01-01T00:00:00Z",
            "updated_at": "2021-01-01T00:00:00Z",
            "title": format!("Issue {}", number),
            "body": "body",
            "milestone": null,
            "labels": []
        })
    }

    fn github(server: &MockServer, token: Option<&str>, per_page: usize) -> Github {
        Github {
            client: Client::new(token, &server.base_url()).unwrap(),
            owner: "octo".to_string(),
            repo: "hello".to_string(),
            per_page,
        }
    }

    #[tokio::test]
    async fn issues_success() -> Result<(), GithubError> {
        let token: Uuid = UUIDv4.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/repos/octo/hello/issues")
                    .header("Authorization", &format!("Bearer {}", &token))
                    .query_param("state", "all")
                    .query_param("page", "1");
                then.status(200)
                    .json_body(json!([issue_json(1), issue_json(2)]));
            })
            .await;

        let github = github(&server, Some(&token.to_string()), 100);
        let issues = github.issues(false).await?;
        mock.assert_async().await;
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].number, 1);
        assert_eq!(issues[1].title, "Issue 2");
        Ok(())
    }

    #[tokio::test]
    async fn issues_follow_pages_until_short_page() -> Result<(), GithubError> {
        let server = MockServer::start();
        let first = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/repos/octo/hello/issues")
                    .query_param("per_page", "2")
                    .query_param("page", "1");
                then.status(200)
                    .json_body(json!([issue_json(1), issue_json(2)]));
            })
            .await;
        let second = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/repos/octo/hello/issues")
                    .query_param("per_page", "2")
                    .query_param("page", "2");
                then.status(200).json_body(json!([issue_json(3)]));
            })
            .await;

        let github = github(&server, None, 2);
        let issues = github.issues(false).await?;
        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(
            issues.iter().map(|i| i.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        Ok(())
    }

    #[tokio::test]
    async fn issues_skip_pull_requests() -> Result<(), GithubError> {
        let mut pull = issue_json(2);
        pull["pull_request"] = json!({ "url": "https://api.github.com/repos/octo/hello/pulls/2" });

        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/repos/octo/hello/issues");
                then.status(200).json_body(json!([issue_json(1), pull]));
            })
            .await;

        let github = github(&server, None, 100);
        assert_eq!(github.issues(false).await?.len(), 1);
        assert_eq!(github.issues(true).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn issues_unauthorized() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/repos/octo/hello/issues");
                then.status(401).body("Bad credentials");
            })
            .await;

        let github = github(&server, Some("bogus"), 100);
        let result = github.issues(false).await;
        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(GithubError::ApiError { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn comments_success() -> Result<(), GithubError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/repos/octo/hello/issues/comments")
                    .query_param("page", "1");
                then.status(200).json_body(json!([
                    {
                        "id": 10,
                        "body": "First!",
                        "user": { "login": "octocat" },
                        "created_at": "2021-01-01T00:00:00Z",
                        "issue_url": "https://api.github.com/repos/octo/hello/issues/42"
                    }
                ]));
            })
            .await;

        let github = github(&server, None, 100);
        let comments = github.comments().await?;
        mock.assert_async().await;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].issue_number(), Some(42));
        assert_eq!(comments[0].body.as_deref(), Some("First!"));
        Ok(())
    }

    #[tokio::test]
    async fn comments_malformed_response() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/repos/octo/hello/issues/comments");
                then.status(200).json_body(json!({ "message": "unexpected" }));
            })
            .await;

        let github = github(&server, None, 100);
        assert!(matches!(
            github.comments().await,
            Err(GithubError::Deserialization(_))
        ));
    }
}
