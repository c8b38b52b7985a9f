//! The page skeleton: an HTML shell with `{{placeholder}}` regions, plus the
//! current content of each region. Populators receive region handles from
//! here and hand back replacement content; nothing looks regions up by id.

use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::dom::{html_escape, nodes_to_html, Node};

#[derive(Debug)]
pub enum SkeletonError {
    Io(std::path::PathBuf, std::io::Error),
    MissingRegion(RegionId),
    UnknownRegion(String),
}

impl std::fmt::Display for SkeletonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkeletonError::Io(path, e) => write!(f, "cannot read shell {}: {}", path.display(), e),
            SkeletonError::MissingRegion(id) => {
                write!(f, "shell has no {{{{{}}}}} region", id.placeholder())
            }
            SkeletonError::UnknownRegion(name) => write!(f, "no region named {:?}", name),
        }
    }
}

impl std::error::Error for SkeletonError {}

// ── Regions ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    Logo,
    NavLinks,
    HeroHeading,
    CtaButtons,
    HeroTagline,
    ExpertiseTitle,
    ExpertiseGrid,
    ProjectsTitle,
    ProjectsGrid,
    ApplicationsTitle,
    ApplicationsSubtitle,
    ApplicationsGrid,
    ExperienceTitle,
    Timeline,
    ContactTitle,
    ContactInfo,
    GithubButton,
    FooterText,
}

impl RegionId {
    pub const ALL: [RegionId; 18] = [
        RegionId::Logo,
        RegionId::NavLinks,
        RegionId::HeroHeading,
        RegionId::CtaButtons,
        RegionId::HeroTagline,
        RegionId::ExpertiseTitle,
        RegionId::ExpertiseGrid,
        RegionId::ProjectsTitle,
        RegionId::ProjectsGrid,
        RegionId::ApplicationsTitle,
        RegionId::ApplicationsSubtitle,
        RegionId::ApplicationsGrid,
        RegionId::ExperienceTitle,
        RegionId::Timeline,
        RegionId::ContactTitle,
        RegionId::ContactInfo,
        RegionId::GithubButton,
        RegionId::FooterText,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            RegionId::Logo => "logo",
            RegionId::NavLinks => "nav_links",
            RegionId::HeroHeading => "hero_heading",
            RegionId::CtaButtons => "cta_buttons",
            RegionId::HeroTagline => "hero_tagline",
            RegionId::ExpertiseTitle => "expertise_title",
            RegionId::ExpertiseGrid => "expertise_grid",
            RegionId::ProjectsTitle => "projects_title",
            RegionId::ProjectsGrid => "projects_grid",
            RegionId::ApplicationsTitle => "applications_title",
            RegionId::ApplicationsSubtitle => "applications_subtitle",
            RegionId::ApplicationsGrid => "applications_grid",
            RegionId::ExperienceTitle => "experience_title",
            RegionId::Timeline => "timeline",
            RegionId::ContactTitle => "contact_title",
            RegionId::ContactInfo => "contact_info",
            RegionId::GithubButton => "github_button",
            RegionId::FooterText => "footer_text",
        }
    }

    pub fn from_placeholder(name: &str) -> Option<Self> {
        RegionId::ALL.iter().copied().find(|id| id.placeholder() == name)
    }

    /// Regions a shell may leave out.
    pub fn is_optional(self) -> bool {
        matches!(self, RegionId::ApplicationsSubtitle)
    }

    fn tag(self) -> String {
        format!("{{{{{}}}}}", self.placeholder())
    }
}

// ── Skeleton ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    shell: Arc<str>,
    title: String,
    regions: BTreeMap<RegionId, Vec<Node>>,
    anchor_ids: BTreeSet<String>,
}

impl Skeleton {
    /// Build from the configured shell (or the built-in one) and region presets.
    pub fn load(config: &SiteConfig) -> Result<Self, SkeletonError> {
        match &config.shell {
            Some(path) => {
                let shell = std::fs::read_to_string(path)
                    .map_err(|e| SkeletonError::Io(path.clone(), e))?;
                Self::from_shell(&shell, &config.regions)
            }
            None => Self::from_shell(DEFAULT_SHELL, &config.regions),
        }
    }

    /// Every non-optional region must appear in the shell; a missing one is
    /// reported here rather than discovered while populating.
    pub fn from_shell(
        shell: &str,
        presets: &BTreeMap<String, String>,
    ) -> Result<Self, SkeletonError> {
        let mut regions = BTreeMap::new();
        for id in RegionId::ALL {
            if shell.contains(&id.tag()) {
                regions.insert(id, Vec::new());
            } else if !id.is_optional() {
                return Err(SkeletonError::MissingRegion(id));
            }
        }

        for (name, html) in presets {
            let id = RegionId::from_placeholder(name)
                .ok_or_else(|| SkeletonError::UnknownRegion(name.clone()))?;
            match regions.get_mut(&id) {
                Some(children) => *children = vec![Node::Raw(html.clone())],
                None => debug!("Preset for absent region {} ignored", name),
            }
        }

        Ok(Skeleton {
            shell: Arc::from(shell),
            title: String::new(),
            regions,
            anchor_ids: scan_ids(shell),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn has_region(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    /// Current content of a region; `None` when the shell does not have it.
    pub fn region(&self, id: RegionId) -> Option<&[Node]> {
        self.regions.get(&id).map(Vec::as_slice)
    }

    /// Replace a region's content wholesale. Returns false (and changes
    /// nothing) when the region is absent.
    pub fn replace(&mut self, id: RegionId, children: Vec<Node>) -> bool {
        match self.regions.get_mut(&id) {
            Some(slot) => {
                *slot = children;
                true
            }
            None => {
                debug!("Region {} not in shell, skipped", id.placeholder());
                false
            }
        }
    }

    /// Element ids declared in the shell, the targets of same-page anchors.
    pub fn anchor_ids(&self) -> &BTreeSet<String> {
        &self.anchor_ids
    }

    /// All region content, in region order.
    pub fn regions(&self) -> impl Iterator<Item = (RegionId, &[Node])> {
        self.regions.iter().map(|(id, nodes)| (*id, nodes.as_slice()))
    }

    /// Substitute region content into the shell in a single pass, so text
    /// inserted from the document is never rescanned for placeholders.
    pub fn to_html(&self, interaction_script: &str) -> String {
        let title = html_escape(&self.title);
        let year = chrono::Utc::now().format("%Y").to_string();
        fill_placeholders(&self.shell, |name| match name {
            "page_title" => Some(title.clone()),
            "current_year" => Some(year.clone()),
            "interaction_script" => Some(interaction_script.to_string()),
            other => RegionId::from_placeholder(other)
                .and_then(|id| self.regions.get(&id))
                .map(|nodes| nodes_to_html(nodes)),
        })
    }
}

/// Collect `id` attribute values from the shell markup. Values may be
/// double-quoted, single-quoted or bare; `data-id` and friends are skipped.
fn scan_ids(shell: &str) -> BTreeSet<String> {
    let lower = shell.to_ascii_lowercase();
    let mut ids = BTreeSet::new();
    for (pos, _) in lower.match_indices("id=") {
        let attr_start = pos > 0 && lower.as_bytes()[pos - 1].is_ascii_whitespace();
        if !attr_start {
            continue;
        }
        let rest = &shell[pos + 3..];
        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => rest[1..].find(q).map(|end| &rest[1..1 + end]),
            Some(_) => rest
                .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .map(|end| &rest[..end])
                .or(Some(rest)),
            None => None,
        };
        if let Some(id) = value.filter(|v| !v.is_empty()) {
            ids.insert(id.to_string());
        }
    }
    ids
}

/// Replace `{{name}}` tags (lowercase + underscores only) with `lookup(name)`.
/// Tags the lookup does not know are removed; anything else is kept as-is.
fn fill_placeholders<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end)
                if end > 0
                    && after[..end]
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b == b'_') =>
            {
                if let Some(value) = lookup(&after[..end]) {
                    result.push_str(&value);
                }
                rest = &after[end + 2..];
            }
            _ => {
                result.push_str("{{");
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

pub const DEFAULT_SHELL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{page_title}}</title>
<link rel="stylesheet" href="styles.css">
</head>
<body>
<nav class="navbar">
  <div class="logo" id="logo">{{logo}}</div>
  <button class="menu-toggle" type="button" aria-label="Toggle menu" data-menu-toggle>&#9776;</button>
  <ul class="nav-links" id="navLinks">{{nav_links}}</ul>
</nav>
<section class="hero" id="home">
  <div class="blob blob-1"></div>
  <div class="blob blob-2"></div>
  <div class="hero-content">
    <h1 id="heroHeading">{{hero_heading}}</h1>
    <p class="tagline" id="heroTagline">{{hero_tagline}}</p>
    <div class="cta-buttons" id="ctaButtons">{{cta_buttons}}</div>
  </div>
</section>
<section class="expertise" id="expertise">
  <h2 class="section-title" id="expertiseTitle">{{expertise_title}}</h2>
  <div class="expertise-grid" id="expertiseGrid">{{expertise_grid}}</div>
</section>
<section class="projects" id="projects">
  <h2 class="section-title" id="projectsTitle">{{projects_title}}</h2>
  <div class="projects-grid" id="projectsGrid">{{projects_grid}}</div>
</section>
<section class="applications" id="applications">
  <h2 class="section-title" id="applicationsTitle">{{applications_title}}</h2>
  <p class="section-subtitle" id="applicationsSubtitle">{{applications_subtitle}}</p>
  <div class="creations-grid" id="applicationsGrid">{{applications_grid}}</div>
</section>
<section class="experience" id="experience">
  <h2 class="section-title" id="experienceTitle">{{experience_title}}</h2>
  <div class="timeline" id="timeline">{{timeline}}</div>
</section>
<section class="contact" id="contact">
  <h2 class="section-title" id="contactTitle">{{contact_title}}</h2>
  <div class="contact-info" id="contactInfo">{{contact_info}}</div>
  <div class="github-button" id="githubButtonContainer">{{github_button}}</div>
</section>
<footer>
  <p id="footerText">{{footer_text}}</p>
</footer>
{{interaction_script}}
</body>
</html>
"##;
