//! Resume document model: the aggregate the renderer and publisher consume.
//!
//! Plain data with a few invariant-preserving mutators. All fields are
//! serde-enabled so documents round-trip through YAML config files and any
//! blob store the embedding application uses. Entity ids are v4 UUIDs minted
//! at construction; collections keep insertion order so rendering stays
//! deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The resume/portfolio aggregate.
///
/// Publication state is only ever set through [`Resume::mark_published`], so
/// `is_published == true` implies a non-empty `published_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub id: Uuid,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub languages: Vec<Language>,
    pub achievements: Vec<String>,
    pub patents: Vec<Patent>,
    pub hobbies: Vec<String>,
    pub template: Template,
    pub colors: ColorScheme,
    pub is_published: bool,
    pub published_url: Option<String>,
    pub custom_domain: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Resume {
    fn default() -> Self {
        let now = Utc::now();
        Resume {
            id: Uuid::new_v4(),
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            experiences: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            achievements: Vec::new(),
            patents: Vec::new(),
            hobbies: Vec::new(),
            template: Template::Professional,
            colors: ColorScheme::defaults_for(Template::Professional),
            is_published: false,
            published_url: None,
            custom_domain: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Resume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes `updated_at`. Monotonic: never moves the timestamp backwards,
    /// even across clock adjustments.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Records a successful deploy. The only path that sets `is_published`.
    pub fn mark_published(&mut self, url: String) {
        debug_assert!(!url.is_empty());
        self.is_published = true;
        self.published_url = Some(url);
        self.touch();
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linked_in: String,
    pub website: String,
    pub github_username: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    /// Ignored at render time when `is_current_role` is set.
    pub end_date: Option<DateTime<Utc>>,
    pub is_current_role: bool,
    pub description: String,
    pub highlights: Vec<String>,
}

impl Default for Experience {
    fn default() -> Self {
        Experience {
            id: Uuid::new_v4(),
            company: String::new(),
            title: String::new(),
            location: String::new(),
            start_date: Utc::now(),
            end_date: None,
            is_current_role: false,
            description: String::new(),
            highlights: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: Option<DateTime<Utc>>,
    pub gpa: Option<String>,
    pub highlights: Vec<String>,
}

impl Default for Education {
    fn default() -> Self {
        Education {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            graduation_date: None,
            gpa: None,
            highlights: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    pub proficiency: Proficiency,
}

impl Default for Language {
    fn default() -> Self {
        Language {
            id: Uuid::new_v4(),
            name: String::new(),
            proficiency: Proficiency::Conversational,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Native,
    Fluent,
    Conversational,
    Basic,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Conversational => "Conversational",
            Proficiency::Basic => "Basic",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Patent {
    pub id: Uuid,
    pub title: String,
    pub patent_number: String,
    pub date_issued: Option<DateTime<Utc>>,
    pub status: PatentStatus,
}

impl Default for Patent {
    fn default() -> Self {
        Patent {
            id: Uuid::new_v4(),
            title: String::new(),
            patent_number: String::new(),
            date_issued: None,
            status: PatentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatentStatus {
    Pending,
    Granted,
    Provisional,
}

impl PatentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PatentStatus::Pending => "Pending",
            PatentStatus::Granted => "Granted",
            PatentStatus::Provisional => "Provisional",
        }
    }
}

/// Closed set of presentation styles. Variants differ in layout and colour
/// defaults only; every variant renders the same sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Professional,
    Casual,
    Playful,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::Professional => "Professional",
            Template::Casual => "Casual",
            Template::Playful => "Playful",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Template::Professional => "Clean, corporate look for traditional industries",
            Template::Casual => "Friendly, modern design for startups & tech",
            Template::Playful => "Creative, bold style for design & creative roles",
        }
    }
}

/// Colours a template renders with. Hex strings, 6 or 8 digits; not validated
/// here — malformed values pass through to the markup untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::defaults_for(Template::Professional)
    }
}

impl ColorScheme {
    /// Stock palette for each template variant.
    pub fn defaults_for(template: Template) -> Self {
        let (primary, secondary, accent, background) = match template {
            Template::Professional => ("#1a1a2e", "#f5f5f5", "#0066cc", "#ffffff"),
            Template::Casual => ("#2d3436", "#ffffff", "#00b894", "#e0f7fa"),
            Template::Playful => ("#6c5ce7", "#ffeaa7", "#fd79a8", "#6c5ce7"),
        };
        ColorScheme {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
        }
    }
}
