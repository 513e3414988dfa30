//! Cross-variant rendering checks through the public crate API.

use resume_pages::render::render;
use resume_pages::resume::{ColorScheme, Experience, Resume, Template};

fn sample_resume() -> Resume {
    let mut resume = Resume::new();
    resume.personal_info.full_name = "Grace Hopper".to_string();
    resume.personal_info.email = "grace@example.com".to_string();
    resume.summary = "Compiler pioneer.".to_string();
    resume.experiences.push(Experience {
        title: "Rear Admiral".to_string(),
        company: "US Navy".to_string(),
        is_current_role: true,
        ..Default::default()
    });
    resume.skills = vec!["COBOL".to_string(), "Leadership".to_string()];
    resume
}

/// The three variants are genuinely different documents, not one layout
/// with three palettes.
#[test]
fn variants_produce_distinct_markup() {
    let resume = sample_resume();
    let colors = ColorScheme::defaults_for(Template::Professional);

    let professional = render(&resume, Template::Professional, &colors);
    let casual = render(&resume, Template::Casual, &colors);
    let playful = render(&resume, Template::Playful, &colors);

    assert_ne!(professional, casual);
    assert_ne!(casual, playful);
    assert_ne!(professional, playful);
}

/// The variant argument wins over whatever the document says its template
/// is, so previews can try styles without editing the document.
#[test]
fn variant_argument_overrides_document_template() {
    let mut resume = sample_resume();
    resume.template = Template::Professional;
    let colors = ColorScheme::defaults_for(Template::Playful);

    let html = render(&resume, Template::Playful, &colors);
    resume.template = Template::Playful;
    let direct = render(&resume, Template::Playful, &colors);

    // Same variant, same content: identical markup regardless of the
    // template field.
    assert_eq!(html, direct);
}

/// End-to-end: a YAML document parsed through serde renders the same HTML
/// as the equivalent in-memory document.
#[test]
fn yaml_document_renders_like_in_memory_document() {
    let yaml = r#"
personal_info:
  full_name: "Grace Hopper"
  email: "grace@example.com"
summary: "Compiler pioneer."
experiences:
  - title: "Rear Admiral"
    company: "US Navy"
    is_current_role: true
skills: ["COBOL", "Leadership"]
template: casual
"#;
    let parsed: Resume = serde_yaml::from_str(yaml).expect("sample YAML parses");
    let colors = ColorScheme::defaults_for(parsed.template);
    let html = render(&parsed, parsed.template, &colors);

    assert!(html.contains("Grace Hopper"));
    assert!(html.contains("US Navy"));
    assert!(html.contains("COBOL"));
    assert!(html.contains("Present"));
}

/// Every variant carries the owner's name and contact details.
#[test]
fn identity_appears_in_every_variant() {
    let resume = sample_resume();
    for variant in [Template::Professional, Template::Casual, Template::Playful] {
        let colors = ColorScheme::defaults_for(variant);
        let html = render(&resume, variant, &colors);
        assert!(html.contains("Grace Hopper"), "{variant:?}");
        assert!(html.contains("grace@example.com"), "{variant:?}");
    }
}
