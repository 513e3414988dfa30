//! # RepoHost: interface to the git-based hosting platform
//!
//! A single trait over the four platform operations the publish pipeline
//! needs, plus the fingerprint read that makes the conditional upsert
//! possible. Implemented by the real API client ([`crate::github`]) and by
//! mocks in tests.
//!
//! The trait is stateless with respect to credentials: every method takes the
//! bearer token from the caller and implementors must not retain it.
//!
//! The trait is annotated for `mockall`, so consumers can generate
//! deterministic mocks for unit and integration tests (exported under the
//! `test-export-mocks` feature).

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Failure of a single hosting-platform call.
///
/// `Api` carries the platform's own message so the caller can surface it
/// verbatim. Timeouts and unreachable hosts arrive as `Transport`.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Request to create a new hosting repository.
pub struct NewRepo<'a> {
    /// Repository name, e.g. `alice.github.io`.
    pub name: &'a str,
    /// Free-text description shown on the platform.
    pub description: &'a str,
}

/// The platform's view of a repository after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    pub html_url: String,
}

/// Request to write one file into a repository.
pub struct FilePut<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    /// Path within the repository, e.g. `index.html`.
    pub path: &'a str,
    /// Raw file contents; implementors handle transfer encoding.
    pub content: &'a str,
    /// Commit message recorded on the platform.
    pub message: &'a str,
    /// Current content fingerprint. `Some` turns the write into a conditional
    /// update of exactly that revision; `None` creates the file.
    pub sha: Option<String>,
}

/// Operations against the git-based hosting platform.
///
/// All methods are async and may fail with [`HostError`]. Implementors must
/// not store the token passed to each call.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait RepoHost: Send + Sync {
    /// True iff the platform reports the repository with a success status.
    /// A not-found condition is `Ok(false)`, never an error; only
    /// transport-level failures propagate.
    async fn repo_exists(&self, token: &str, owner: &str, repo: &str)
        -> Result<bool, HostError>;

    /// Creates a public repository with issue tracker and wiki disabled,
    /// auto-initialised so it is immediately writable.
    async fn create_repo<'a>(&self, token: &str, req: NewRepo<'a>) -> Result<Repo, HostError>;

    /// Reads the current content fingerprint of `path`, or `None` if the file
    /// does not exist (any non-success status maps to `None`).
    async fn get_file_sha(
        &self,
        token: &str,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<String>, HostError>;

    /// Writes one file. A conflicting fingerprint surfaces as
    /// [`HostError::Api`]; the platform never silently overwrites.
    async fn put_file<'a>(&self, token: &str, req: FilePut<'a>) -> Result<(), HostError>;

    /// Enables static-site serving from the main branch root. Callers treat
    /// this as best-effort; see the publish orchestrator.
    async fn enable_pages(&self, token: &str, owner: &str, repo: &str) -> Result<(), HostError>;
}

/// Read-modify-write upsert with optimistic concurrency.
///
/// Reads the current fingerprint of `path` and includes it in the write when
/// present, so the platform treats the call as an update of that exact
/// revision; absent, the write is a creation. Repeated calls with identical
/// content converge on the same end state.
pub async fn upsert_file<H>(
    host: &H,
    token: &str,
    owner: &str,
    repo: &str,
    path: &str,
    content: &str,
    message: &str,
) -> Result<(), HostError>
where
    H: RepoHost + ?Sized,
{
    let sha = host.get_file_sha(token, owner, repo, path).await?;
    debug!(
        owner,
        repo,
        path,
        has_fingerprint = sha.is_some(),
        "Resolved current file fingerprint before write"
    );
    host.put_file(
        token,
        FilePut {
            owner,
            repo,
            path,
            content,
            message,
            sha,
        },
    )
    .await
}
