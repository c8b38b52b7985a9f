//! Section populators and the fixed-order render pass.
//!
//! Every populator is a pure function of the document, the current region
//! content and the site config. It returns patches that replace region
//! content wholesale, so running the pass twice yields the same page.

pub mod applications;
pub mod cards;
pub mod contact;
pub mod experience;
pub mod expertise;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;

use log::{debug, error, info};

use crate::config::SiteConfig;
use crate::content::ContentDocument;
use crate::dom::Node;
use crate::interactions;
use crate::loader::ContentSource;
use crate::skeleton::{RegionId, Skeleton};

#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    Title(String),
    Region(RegionId, Vec<Node>),
}

pub type Populator = fn(&ContentDocument, &Skeleton, &SiteConfig) -> Vec<Patch>;

/// Run order of the populators.
pub const POPULATORS: &[(&str, Populator)] = &[
    ("metadata", populate_metadata),
    ("navigation", navigation::populate),
    ("hero", hero::populate),
    ("expertise", expertise::populate),
    ("projects", projects::populate),
    ("applications", applications::populate),
    ("experience", experience::populate),
    ("contact", contact::populate),
    ("footer", footer::populate),
];

/// Page title: "{name} - {title}".
pub fn populate_metadata(doc: &ContentDocument, _: &Skeleton, _: &SiteConfig) -> Vec<Patch> {
    vec![Patch::Title(format!("{} - {}", doc.personal.name, doc.personal.title))]
}

/// Project the document onto a copy of the skeleton.
pub fn render(doc: &ContentDocument, skeleton: &Skeleton, config: &SiteConfig) -> Skeleton {
    let mut page = skeleton.clone();
    for (name, populate) in POPULATORS {
        let patches = populate(doc, &page, config);
        debug!("Populator {} produced {} patch(es)", name, patches.len());
        for patch in patches {
            apply(&mut page, patch);
        }
    }
    page
}

fn apply(page: &mut Skeleton, patch: Patch) {
    match patch {
        Patch::Title(title) => page.set_title(title),
        Patch::Region(id, children) => {
            page.replace(id, children);
        }
    }
}

/// One page load: load the document, populate, wire interactions, assemble.
/// A failed load is logged and the unpopulated skeleton is delivered, still
/// carrying the bootstrap so the menu and anchor scrolling work.
pub async fn render_page(source: &ContentSource, skeleton: &Skeleton, config: &SiteConfig) -> String {
    match source.load().await {
        Ok(doc) => {
            let page = render(&doc, skeleton, config);
            let plan = interactions::wire(&page, &config.interactions);
            info!(
                "Rendered page for {} ({} reveal targets)",
                doc.personal.name, plan.reveal_targets
            );
            page.to_html(&plan.script)
        }
        Err(e) => {
            error!("Error loading content from {}: {}", source, e);
            skeleton.to_html(&interactions::script::build_script(&config.interactions))
        }
    }
}

/// Shorthand for a single-region text patch.
pub(crate) fn text_patch(id: RegionId, text: &str) -> Patch {
    Patch::Region(id, vec![Node::text(text)])
}
