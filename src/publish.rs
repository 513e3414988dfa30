//! Publish orchestrator: turns an in-memory resume into a deployed site.
//!
//! One idempotent linear flow per invocation:
//! existence check → create-if-missing (plus a fixed settling delay) →
//! render → conditional upsert of `index.html` → best-effort Pages
//! activation → derive the public URL and update the document's publication
//! fields. Every step before the activation tail is fail-fast; nothing is
//! retried here — retry policy belongs to the caller.
//!
//! The document is treated as exclusively owned for the duration of one
//! call: a snapshot is rendered once and publication fields are only written
//! after the deploy succeeded.

use std::sync::Mutex;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::contract::{upsert_file, HostError, NewRepo, RepoHost};
use crate::render;
use crate::resume::Resume;

/// Domain suffix the hosting platform serves user sites from.
pub const PAGES_SUFFIX: &str = "github.io";

const INDEX_PATH: &str = "index.html";
const COMMIT_MESSAGE: &str = "Update resume via resume-pages";
const DEFAULT_REPO_DESCRIPTION: &str = "My resume site";

/// The platform's creation API returns before the repository is fully
/// queryable; a freshly created repo needs a moment before the first write.
const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Fixed naming convention: the user site repository for `owner`.
pub fn repo_name(owner: &str) -> String {
    format!("{owner}.{PAGES_SUFFIX}")
}

/// Fixed URL convention the deployed site is reachable at.
pub fn site_url(owner: &str) -> String {
    format!("https://{owner}.{PAGES_SUFFIX}")
}

#[derive(Debug, Error)]
pub enum PublishError {
    /// No usable credential supplied; raised before any network call.
    #[error("not authenticated: no access token supplied")]
    NotAuthenticated,

    /// A publish is already running on this publisher; the new request is
    /// refused rather than racing writes to the same remote repository.
    #[error("a publish is already in progress")]
    AlreadyInProgress,

    /// A platform call failed; the message is surfaced verbatim.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Externally observable orchestrator state. Only `Publishing` matters
/// mid-flight; the terminal states reflect the last completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Idle,
    Publishing,
    Succeeded,
    Failed,
}

/// What a successful publish produced.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// Publicly reachable URL, derived from the owner identity.
    pub url: String,
    /// Whether this publish had to create the hosting repository.
    pub repo_created: bool,
    /// False when the best-effort activation call failed; the content is
    /// live regardless and the next publish retries activation harmlessly.
    pub pages_activated: bool,
}

/// Sequences the publish pipeline over any [`RepoHost`] implementation.
pub struct Publisher<H> {
    host: H,
    settle_delay: Duration,
    state: Mutex<PublishState>,
}

impl<H: RepoHost> Publisher<H> {
    pub fn new(host: H) -> Self {
        Publisher {
            host,
            settle_delay: DEFAULT_SETTLE_DELAY,
            state: Mutex::new(PublishState::Idle),
        }
    }

    /// Overrides the post-creation settling delay. Tests pass
    /// `Duration::ZERO`.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn state(&self) -> PublishState {
        *self.lock_state()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, PublishState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Publishes `resume` as the user site for `owner`.
    ///
    /// On success the resume's publication fields are updated and the
    /// derived URL returned. On failure they are left exactly as they were.
    /// Safe to re-invoke after either outcome; repeated publishes converge.
    pub async fn publish(
        &self,
        resume: &mut Resume,
        owner: &str,
        token: &str,
    ) -> Result<PublishOutcome, PublishError> {
        if token.trim().is_empty() {
            error!("Publish refused: no access token supplied");
            return Err(PublishError::NotAuthenticated);
        }

        {
            let mut state = self.lock_state();
            if *state == PublishState::Publishing {
                warn!(owner, "Publish refused: another publish is in flight");
                return Err(PublishError::AlreadyInProgress);
            }
            *state = PublishState::Publishing;
        }

        let result = self.run(resume, owner, token).await;
        *self.lock_state() = if result.is_ok() {
            PublishState::Succeeded
        } else {
            PublishState::Failed
        };
        result
    }

    async fn run(
        &self,
        resume: &mut Resume,
        owner: &str,
        token: &str,
    ) -> Result<PublishOutcome, PublishError> {
        let repo = repo_name(owner);
        info!(owner, repo = %repo, "Starting publish");

        let exists = self.host.repo_exists(token, owner, &repo).await?;
        let mut repo_created = false;
        if !exists {
            let description = if resume.summary.is_empty() {
                DEFAULT_REPO_DESCRIPTION
            } else {
                resume.summary.as_str()
            };
            self.host
                .create_repo(
                    token,
                    NewRepo {
                        name: &repo,
                        description,
                    },
                )
                .await?;
            repo_created = true;
            info!(
                repo = %repo,
                settle_ms = self.settle_delay.as_millis() as u64,
                "Repository created, waiting for provisioning to settle"
            );
            tokio::time::sleep(self.settle_delay).await;
        }

        let html = render::render(resume, resume.template, &resume.colors);
        info!(bytes = html.len(), template = resume.template.name(), "Rendered resume");

        upsert_file(
            &self.host,
            token,
            owner,
            &repo,
            INDEX_PATH,
            &html,
            COMMIT_MESSAGE,
        )
        .await?;

        let pages_activated = match self.host.enable_pages(token, owner, &repo).await {
            Ok(()) => true,
            Err(e) => {
                // Best-effort: the content is already committed and the
                // platform auto-activates user sites in most cases. The next
                // publish retries this call.
                warn!(owner, repo = %repo, error = %e, "Pages activation failed, continuing");
                false
            }
        };

        let url = site_url(owner);
        resume.mark_published(url.clone());
        info!(url = %url, repo_created, pages_activated, "Publish succeeded");

        Ok(PublishOutcome {
            url,
            repo_created,
            pages_activated,
        })
    }
}
