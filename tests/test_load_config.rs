use std::fs::write;

use tempfile::NamedTempFile;

use resume_pages::load_config::{load_resume, save_resume};
use resume_pages::resume::{Proficiency, Template};

/// A partial YAML file loads cleanly: every missing field falls back to its
/// serde default.
#[test]
fn test_load_resume_partial_yaml() {
    let resume_yaml = r#"
personal_info:
  full_name: "Ada Lovelace"
  email: "ada@example.com"
  github_username: "ada"
summary: "Analyst and programmer."
template: playful
experiences:
  - title: "Analyst"
    company: "Analytical Engines Ltd"
    is_current_role: true
languages:
  - name: "English"
    proficiency: native
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), resume_yaml).unwrap();

    let resume = load_resume(config_file.path()).expect("Resume should load");

    assert_eq!(resume.personal_info.full_name, "Ada Lovelace");
    assert_eq!(resume.personal_info.github_username, "ada");
    assert_eq!(resume.template, Template::Playful);
    assert_eq!(resume.experiences.len(), 1);
    assert!(resume.experiences[0].is_current_role);
    assert_eq!(resume.languages[0].proficiency, Proficiency::Native);

    // Omitted fields take their defaults.
    assert!(resume.education.is_empty());
    assert!(resume.skills.is_empty());
    assert!(!resume.is_published);
    assert!(resume.published_url.is_none());
}

/// Colours omitted from the file come from the chosen template's palette.
#[test]
fn test_load_resume_defaults_colors_from_template() {
    let resume_yaml = r#"
personal_info:
  full_name: "Ada Lovelace"
template: professional
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), resume_yaml).unwrap();

    let resume = load_resume(config_file.path()).expect("Resume should load");
    assert_eq!(resume.colors.accent, "#0066cc");
}

/// Unreadable paths and malformed YAML both surface as errors with the
/// offending path in the message.
#[test]
fn test_load_resume_errors() {
    let err = load_resume("/nonexistent/resume.yaml").expect_err("missing file must fail");
    assert!(err.to_string().contains("/nonexistent/resume.yaml"));

    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), "experiences: \"not a list\"").unwrap();
    let err = load_resume(config_file.path()).expect_err("bad YAML must fail");
    assert!(err.to_string().contains("Failed to parse resume YAML"));
}

/// Saving and reloading preserves publication state, which is the whole
/// point of persisting after a publish run.
#[test]
fn test_save_resume_round_trips_publication_state() {
    let config_file = NamedTempFile::new().expect("temp file");

    let mut resume = resume_pages::resume::Resume::new();
    resume.personal_info.full_name = "Ada Lovelace".to_string();
    resume.mark_published("https://ada.github.io".to_string());

    save_resume(config_file.path(), &resume).expect("save should succeed");
    let reloaded = load_resume(config_file.path()).expect("reload should succeed");

    assert_eq!(reloaded.id, resume.id);
    assert!(reloaded.is_published);
    assert_eq!(reloaded.published_url.as_deref(), Some("https://ada.github.io"));
    assert_eq!(reloaded.updated_at, resume.updated_at);
}
