//! Loads a resume document from a YAML file.
//!
//! The only place untrusted YAML is parsed into the typed document model.
//! Every field of the document has a serde default, so a partial file (just a
//! name and a few jobs) loads fine. All errors here use `anyhow` for
//! context-rich diagnostics at the CLI boundary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::resume::Resume;

/// Reads and parses a resume YAML file.
pub fn load_resume<P: AsRef<Path>>(path: P) -> Result<Resume> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read resume file {}", path.display()))?;
    let resume: Resume = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse resume YAML {}", path.display()))?;
    info!(
        path = %path.display(),
        name = %resume.personal_info.full_name,
        template = resume.template.name(),
        "Loaded resume"
    );
    Ok(resume)
}

/// Writes the resume back to its YAML file, preserving publication state
/// across runs. The library itself never persists; this is CLI-side glue.
pub fn save_resume<P: AsRef<Path>>(path: P, resume: &Resume) -> Result<()> {
    let path = path.as_ref();
    let yaml = serde_yaml::to_string(resume).context("Failed to serialise resume to YAML")?;
    fs::write(path, yaml)
        .with_context(|| format!("Failed to write resume file {}", path.display()))?;
    Ok(())
}
