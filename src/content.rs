use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::loader::LoadError;

// ── Content document ──────────────────────────────────

/// The portfolio content document. Every section except `applications` is
/// required; the typed parse rejects documents missing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub personal: Personal,
    pub navigation: Vec<NavItem>,
    pub hero: Hero,
    pub expertise: Expertise,
    pub projects: Projects,
    #[serde(default)]
    pub applications: Option<Applications>,
    pub experience: Experience,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Text logo, used only when no image logo can be resolved.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub logo_image: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub contact: PersonalContact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalContact {
    pub github: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub cta: Vec<CtaButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub title: String,
    pub cards: Vec<ExpertiseCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projects {
    pub title: String,
    pub items: Vec<ProjectItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applications {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub items: Vec<ApplicationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub title: String,
    pub items: Vec<ContactItem>,
    pub github_button: GithubButton,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Link,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubButton {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub copyright: String,
}

// ── Load boundary ─────────────────────────────────────

impl ContentDocument {
    /// Parse and validate a JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        let doc: ContentDocument = serde_json::from_str(raw).map_err(LoadError::Parse)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Checks the typed parse cannot express. Optional sub-fields are never
    /// validated here; their absence is a rendering fallback.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.personal.name.trim().is_empty() {
            return Err(LoadError::Invalid("personal.name is empty".into()));
        }
        if let Some(i) = self.navigation.iter().position(|n| n.href.trim().is_empty()) {
            return Err(LoadError::Invalid(format!("navigation[{}].href is empty", i)));
        }
        if let Some(i) = self.hero.cta.iter().position(|c| c.href.trim().is_empty()) {
            return Err(LoadError::Invalid(format!("hero.cta[{}].href is empty", i)));
        }
        Ok(())
    }
}

/// Treats blank strings the same as a missing optional field.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
