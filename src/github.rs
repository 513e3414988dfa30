//! GitHub implementation of [`RepoHost`].
//!
//! ARCHITECTURAL RULE: no other module talks to the GitHub REST API directly;
//! all platform calls go through this client. The client holds only an HTTP
//! connection pool — the bearer token arrives with every call and is never
//! stored (the authentication collaborator owns credential lifetime).

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::contract::{FilePut, HostError, NewRepo, Repo, RepoHost};

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Stateless wrapper over the GitHub REST API.
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Builds a client with a per-call timeout. A timed-out call surfaces as
    /// [`HostError::Transport`].
    pub fn with_timeout(timeout: Duration) -> Self {
        GitHubClient {
            client: Client::builder()
                .timeout(timeout)
                .user_agent("resume-pages")
                .build()
                .expect("Failed to build HTTP client"),
            base_url: GITHUB_API_URL.to_string(),
        }
    }

    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!("{}/repos/{}/{}/contents/{}", self.base_url, owner, repo, path)
    }
}

#[derive(Debug, Serialize)]
struct CreateRepoBody<'a> {
    name: &'a str,
    description: &'a str,
    homepage: String,
    private: bool,
    has_issues: bool,
    has_projects: bool,
    has_wiki: bool,
    auto_init: bool,
}

#[derive(Debug, Serialize)]
struct PutFileBody<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentsMeta {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Extracts the platform's human-readable message from an error body, falling
/// back to the raw body when it is not the usual `{"message": …}` JSON.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.to_string())
}

async fn api_error(response: Response) -> HostError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    HostError::Api {
        status,
        message: api_error_message(&body),
    }
}

#[async_trait]
impl RepoHost for GitHubClient {
    async fn repo_exists(
        &self,
        token: &str,
        owner: &str,
        repo: &str,
    ) -> Result<bool, HostError> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("Accept", GITHUB_ACCEPT)
            .send()
            .await?;
        let exists = response.status().is_success();
        info!(owner, repo, exists, "Checked repository existence");
        Ok(exists)
    }

    async fn create_repo<'a>(&self, token: &str, req: NewRepo<'a>) -> Result<Repo, HostError> {
        info!(name = req.name, "Creating hosting repository");
        let body = CreateRepoBody {
            name: req.name,
            description: req.description,
            homepage: format!("https://{}", req.name),
            private: false,
            has_issues: false,
            has_projects: false,
            has_wiki: false,
            auto_init: true,
        };
        let response = self
            .client
            .post(format!("{}/user/repos", self.base_url))
            .bearer_auth(token)
            .header("Accept", GITHUB_ACCEPT)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let err = api_error(response).await;
            error!(name = req.name, error = %err, "Repository creation failed");
            return Err(err);
        }
        let repo: Repo = response.json().await?;
        info!(name = %repo.name, url = %repo.html_url, "Repository created");
        Ok(repo)
    }

    async fn get_file_sha(
        &self,
        token: &str,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<String>, HostError> {
        let response = self
            .client
            .get(self.contents_url(owner, repo, path))
            .bearer_auth(token)
            .header("Accept", GITHUB_ACCEPT)
            .send()
            .await?;
        if !response.status().is_success() {
            // Not-found and friends all mean "no fingerprint": the caller
            // will create the file instead of updating it.
            return Ok(None);
        }
        let meta: ContentsMeta = response.json().await?;
        Ok(Some(meta.sha))
    }

    async fn put_file<'a>(&self, token: &str, req: FilePut<'a>) -> Result<(), HostError> {
        info!(
            owner = req.owner,
            repo = req.repo,
            path = req.path,
            update = req.sha.is_some(),
            "Writing file to repository"
        );
        let body = PutFileBody {
            message: req.message,
            content: base64::engine::general_purpose::STANDARD.encode(req.content),
            sha: req.sha,
        };
        let response = self
            .client
            .put(self.contents_url(req.owner, req.repo, req.path))
            .bearer_auth(token)
            .header("Accept", GITHUB_ACCEPT)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let err = api_error(response).await;
            error!(path = req.path, error = %err, "File write failed");
            return Err(err);
        }
        Ok(())
    }

    async fn enable_pages(&self, token: &str, owner: &str, repo: &str) -> Result<(), HostError> {
        let body = serde_json::json!({
            "source": { "branch": "main", "path": "/" }
        });
        let response = self
            .client
            .post(format!("{}/repos/{}/{}/pages", self.base_url, owner, repo))
            .bearer_auth(token)
            .header("Accept", GITHUB_ACCEPT)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            let err = api_error(response).await;
            error!(owner, repo, error = %err, "Pages activation call failed");
            return Err(err);
        }
        info!(owner, repo, "Pages activation requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_prefers_platform_message_field() {
        let body = r#"{"message": "Validation Failed", "documentation_url": "x"}"#;
        assert_eq!(api_error_message(body), "Validation Failed");
    }

    #[test]
    fn api_error_message_falls_back_to_raw_body() {
        assert_eq!(api_error_message("<html>502</html>"), "<html>502</html>");
    }

    #[test]
    fn create_repo_body_disables_extras_and_auto_initialises() {
        let body = CreateRepoBody {
            name: "alice.github.io",
            description: "My resume site",
            homepage: "https://alice.github.io".to_string(),
            private: false,
            has_issues: false,
            has_projects: false,
            has_wiki: false,
            auto_init: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["private"], false);
        assert_eq!(json["has_issues"], false);
        assert_eq!(json["has_wiki"], false);
        assert_eq!(json["auto_init"], true);
        assert_eq!(json["homepage"], "https://alice.github.io");
    }

    #[test]
    fn put_file_body_encodes_content_and_omits_absent_sha() {
        let body = PutFileBody {
            message: "Update resume via resume-pages",
            content: base64::engine::general_purpose::STANDARD.encode("<html></html>"),
            sha: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["content"], "PGh0bWw+PC9odG1sPg==");
        assert!(json.get("sha").is_none());

        let with_sha = PutFileBody {
            message: "m",
            content: String::new(),
            sha: Some("abc123".to_string()),
        };
        let json = serde_json::to_value(&with_sha).unwrap();
        assert_eq!(json["sha"], "abc123");
    }
}
