use crate::config::SiteConfig;
use crate::content::{non_blank, ContentDocument};
use crate::dom::{Element, Node};
use crate::skeleton::{RegionId, Skeleton};

use super::Patch;

/// Logo and navigation links.
///
/// An image logo already in the logo region is left alone. Otherwise the
/// logo is an image from `logoImage`, `logoUrl` or the configured default,
/// falling back to the text logo when none of those resolve.
pub fn populate(doc: &ContentDocument, skeleton: &Skeleton, config: &SiteConfig) -> Vec<Patch> {
    let mut patches = Vec::new();

    let has_image_logo = skeleton
        .region(RegionId::Logo)
        .map(|nodes| nodes.iter().any(|n| n.contains_tag("img")))
        .unwrap_or(false);
    if !has_image_logo {
        if let Some(logo) = build_logo(doc, &config.default_logo) {
            patches.push(Patch::Region(RegionId::Logo, vec![logo]));
        }
    }

    let links = doc
        .navigation
        .iter()
        .map(|item| {
            Element::new("li")
                .child(
                    Element::new("a")
                        .attr("href", item.href.as_str())
                        .flag("data-close-menu")
                        .text(item.label.as_str()),
                )
                .into()
        })
        .collect();
    patches.push(Patch::Region(RegionId::NavLinks, links));

    patches
}

fn build_logo(doc: &ContentDocument, default_logo: &str) -> Option<Node> {
    let personal = &doc.personal;
    let src = non_blank(&personal.logo_image)
        .or_else(|| non_blank(&personal.logo_url))
        .or_else(|| Some(default_logo.trim()).filter(|s| !s.is_empty()));

    match src {
        Some(src) => Some(
            Element::new("a")
                .attr("href", "#home")
                .attr("aria-label", "Go to home")
                .flag("data-close-menu")
                .child(
                    Element::new("img")
                        .attr("src", src)
                        .attr("alt", format!("{} logo", personal.name)),
                )
                .into(),
        ),
        None => non_blank(&personal.logo).map(Node::text),
    }
}
