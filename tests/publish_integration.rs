//! End-to-end publish pipeline tests against a mocked hosting platform.

use std::time::Duration;

use mockall::Sequence;
use resume_pages::contract::{upsert_file, FilePut, HostError, MockRepoHost, NewRepo, Repo};
use resume_pages::publish::{repo_name, site_url, PublishError, PublishState, Publisher};
use resume_pages::resume::{Experience, Resume, Template};

fn api_error(status: u16, message: &str) -> HostError {
    HostError::Api {
        status,
        message: message.to_string(),
    }
}

fn made_repo(name: &str) -> Repo {
    Repo {
        name: name.to_string(),
        html_url: format!("https://github.com/owner/{name}"),
    }
}

/// Scenario A: the repository does not exist yet. The orchestrator creates
/// it, waits out the settling interval, upserts, and derives the fixed URL.
#[tokio::test]
async fn publish_creates_missing_repository_and_derives_url() {
    let mut host = MockRepoHost::new();

    host.expect_repo_exists()
        .withf(|_, owner, repo| owner == "alice" && repo == "alice.github.io")
        .return_once(|_, _, _| Ok(false));
    host.expect_create_repo().return_once(|_, req: NewRepo<'_>| {
        assert_eq!(req.name, "alice.github.io");
        Ok(made_repo(req.name))
    });
    host.expect_get_file_sha()
        .withf(|_, _, _, path| path == "index.html")
        .return_once(|_, _, _, _| Ok(None));
    host.expect_put_file().return_once(|_, req: FilePut<'_>| {
        assert_eq!(req.path, "index.html");
        assert_eq!(req.repo, "alice.github.io");
        assert!(req.sha.is_none());
        Ok(())
    });
    host.expect_enable_pages().return_once(|_, _, _| Ok(()));

    let publisher = Publisher::new(host).with_settle_delay(Duration::ZERO);
    let mut resume = Resume::new();

    let outcome = publisher
        .publish(&mut resume, "alice", "token")
        .await
        .expect("publish should succeed");

    assert_eq!(outcome.url, "https://alice.github.io");
    assert!(outcome.repo_created);
    assert!(outcome.pages_activated);
    assert!(resume.is_published);
    assert_eq!(resume.published_url.as_deref(), Some("https://alice.github.io"));
    assert_eq!(publisher.state(), PublishState::Succeeded);
}

/// Scenario B: the repository exists and the index file has a current
/// fingerprint. The upsert must carry the freshly read sha, and the rendered
/// HTML must carry escaped user text.
#[tokio::test]
async fn publish_updates_existing_file_with_current_fingerprint() {
    let mut host = MockRepoHost::new();

    host.expect_repo_exists()
        .withf(|_, owner, _| owner == "bob")
        .return_once(|_, _, _| Ok(true));
    // No create_repo expectation: calling it would fail the test.
    host.expect_get_file_sha()
        .return_once(|_, _, _, _| Ok(Some("sha-current".to_string())));
    host.expect_put_file().return_once(|_, req: FilePut<'_>| {
        assert_eq!(req.sha.as_deref(), Some("sha-current"));
        assert!(req.content.contains("Acme &amp; Co"));
        assert!(!req.content.contains("Acme & Co"));
        assert_eq!(req.message, "Update resume via resume-pages");
        Ok(())
    });
    host.expect_enable_pages().return_once(|_, _, _| Ok(()));

    let publisher = Publisher::new(host).with_settle_delay(Duration::ZERO);
    let mut resume = Resume::new();
    resume.template = Template::Casual;
    resume.experiences.push(Experience {
        title: "Engineer".into(),
        company: "Acme & Co".into(),
        ..Default::default()
    });

    let outcome = publisher
        .publish(&mut resume, "bob", "token")
        .await
        .expect("publish should succeed");

    assert_eq!(outcome.url, "https://bob.github.io");
    assert!(!outcome.repo_created);
}

/// Scenario C: the activation call fails but the publish still succeeds —
/// activation is the sole best-effort step.
#[tokio::test]
async fn activation_failure_does_not_fail_publish() {
    let mut host = MockRepoHost::new();

    host.expect_repo_exists().return_once(|_, _, _| Ok(true));
    host.expect_get_file_sha()
        .return_once(|_, _, _, _| Ok(Some("sha".to_string())));
    host.expect_put_file().return_once(|_, _| Ok(()));
    host.expect_enable_pages()
        .return_once(|_, _, _| Err(api_error(500, "pages backend down")));

    let publisher = Publisher::new(host).with_settle_delay(Duration::ZERO);
    let mut resume = Resume::new();

    let outcome = publisher
        .publish(&mut resume, "carol", "token")
        .await
        .expect("publish should still succeed");

    assert_eq!(outcome.url, "https://carol.github.io");
    assert!(!outcome.pages_activated);
    assert!(resume.is_published);
    assert_eq!(publisher.state(), PublishState::Succeeded);
}

/// Scenario D: an empty credential fails fast with zero network calls.
/// The mock has no expectations, so any host call would panic the test.
#[tokio::test]
async fn empty_credential_fails_before_any_network_call() {
    let host = MockRepoHost::new();
    let publisher = Publisher::new(host).with_settle_delay(Duration::ZERO);
    let mut resume = Resume::new();

    let err = publisher
        .publish(&mut resume, "dave", "")
        .await
        .expect_err("publish must refuse an empty token");

    assert!(matches!(err, PublishError::NotAuthenticated));
    assert!(!resume.is_published);
    assert!(resume.published_url.is_none());
    // A whitespace-only token is just as unusable.
    let err = publisher
        .publish(&mut resume, "dave", "   ")
        .await
        .expect_err("publish must refuse a blank token");
    assert!(matches!(err, PublishError::NotAuthenticated));
}

/// Failure in the upsert step aborts the flow and leaves the document's
/// publication fields exactly as they were.
#[tokio::test]
async fn failed_upsert_leaves_publication_fields_unchanged() {
    let mut host = MockRepoHost::new();

    host.expect_repo_exists().return_once(|_, _, _| Ok(true));
    host.expect_get_file_sha()
        .return_once(|_, _, _, _| Ok(Some("stale".to_string())));
    host.expect_put_file()
        .return_once(|_, _| Err(api_error(409, "sha mismatch")));
    // enable_pages must not be reached.

    let publisher = Publisher::new(host).with_settle_delay(Duration::ZERO);
    let mut resume = Resume::new();
    resume.mark_published("https://erin.github.io".to_string());
    let updated_at_before = resume.updated_at;

    let err = publisher
        .publish(&mut resume, "erin", "token")
        .await
        .expect_err("publish should fail");

    match err {
        PublishError::Host(HostError::Api { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message, "sha mismatch");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Pre-existing publication state survives the failed attempt untouched.
    assert!(resume.is_published);
    assert_eq!(resume.published_url.as_deref(), Some("https://erin.github.io"));
    assert_eq!(resume.updated_at, updated_at_before);
    assert_eq!(publisher.state(), PublishState::Failed);
}

/// A transport failure during the existence check aborts before anything
/// else happens.
#[tokio::test]
async fn create_failure_aborts_publish() {
    let mut host = MockRepoHost::new();

    host.expect_repo_exists().return_once(|_, _, _| Ok(false));
    host.expect_create_repo()
        .return_once(|_, _| Err(api_error(422, "name already exists on this account")));

    let publisher = Publisher::new(host).with_settle_delay(Duration::ZERO);
    let mut resume = Resume::new();

    let err = publisher
        .publish(&mut resume, "frank", "token")
        .await
        .expect_err("publish should fail");
    assert!(matches!(err, PublishError::Host(HostError::Api { status: 422, .. })));
    assert!(!resume.is_published);
}

/// Re-publishing after success repeats the sequence and converges: the
/// second run reads the fingerprint the first run wrote.
#[tokio::test]
async fn publish_is_safely_reinvokable() {
    let mut host = MockRepoHost::new();
    let mut seq = Sequence::new();

    host.expect_repo_exists()
        .times(2)
        .returning(|_, _, _| Ok(true));
    host.expect_get_file_sha()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _| Ok(None));
    host.expect_get_file_sha()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _| Ok(Some("sha-1".to_string())));
    host.expect_put_file().times(2).returning(|_, _| Ok(()));
    host.expect_enable_pages()
        .times(2)
        .returning(|_, _, _| Ok(()));

    let publisher = Publisher::new(host).with_settle_delay(Duration::ZERO);
    let mut resume = Resume::new();

    let first = publisher
        .publish(&mut resume, "gina", "token")
        .await
        .expect("first publish");
    let second = publisher
        .publish(&mut resume, "gina", "token")
        .await
        .expect("second publish");

    assert_eq!(first.url, second.url);
    assert_eq!(second.url, site_url("gina"));
}

/// Upsert idempotence at the client contract level: identical content
/// converges whether the first write was a create or an update.
#[tokio::test]
async fn upsert_is_idempotent_across_create_and_update() {
    let mut host = MockRepoHost::new();
    let mut seq = Sequence::new();

    host.expect_get_file_sha()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _| Ok(None));
    host.expect_put_file()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, req: FilePut<'_>| {
            assert!(req.sha.is_none());
            assert_eq!(req.content, "<html/>");
            Ok(())
        });
    host.expect_get_file_sha()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _, _| Ok(Some("rev-1".to_string())));
    host.expect_put_file()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, req: FilePut<'_>| {
            assert_eq!(req.sha.as_deref(), Some("rev-1"));
            assert_eq!(req.content, "<html/>");
            Ok(())
        });

    let repo = repo_name("hank");
    for _ in 0..2 {
        upsert_file(&host, "token", "hank", &repo, "index.html", "<html/>", "msg")
            .await
            .expect("upsert should succeed");
    }
}
