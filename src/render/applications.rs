use log::debug;

use crate::config::SiteConfig;
use crate::content::{non_blank, ApplicationItem, ContentDocument};
use crate::dom::{Element, Node};
use crate::skeleton::{RegionId, Skeleton};

use super::cards::{coming_soon, media, tag_list};
use super::{text_patch, Patch};

/// No-op when the document has no applications section. The subtitle is only
/// written when both the region and the field exist.
pub fn populate(doc: &ContentDocument, skeleton: &Skeleton, _: &SiteConfig) -> Vec<Patch> {
    let apps = match &doc.applications {
        Some(apps) => apps,
        None => {
            debug!("No applications section, skipping");
            return Vec::new();
        }
    };

    let mut patches = vec![text_patch(RegionId::ApplicationsTitle, &apps.title)];
    if skeleton.has_region(RegionId::ApplicationsSubtitle) {
        if let Some(subtitle) = non_blank(&apps.subtitle) {
            patches.push(text_patch(RegionId::ApplicationsSubtitle, subtitle));
        }
    }
    patches.push(Patch::Region(
        RegionId::ApplicationsGrid,
        apps.items.iter().map(application_card).collect(),
    ));
    patches
}

/// With a URL the card is a click-through target (`data-href`) and carries a
/// "Visit Now" link to the same place.
fn application_card(app: &ApplicationItem) -> Node {
    let preview = media("creation-preview", &app.image, &app.icon, &app.title).child(
        Element::new("span")
            .class(&format!("creation-badge {}", app.kind))
            .text(app.kind.as_str()),
    );

    let content = Element::new("div")
        .class("creation-content")
        .child(Element::new("h3").text(app.title.as_str()))
        .child(Element::new("p").text(app.description.as_str()))
        .child(tag_list("creation-tags", "creation-tag", &app.tags));

    let card = match non_blank(&app.url) {
        Some(url) => Element::new("div")
            .class("creation-card is-link")
            .attr("data-href", url)
            .attr("role", "link")
            .attr("tabindex", "0")
            .child(preview)
            .child(
                content.child(
                    Element::new("a")
                        .class("creation-link")
                        .attr("href", url)
                        .attr("target", "_blank")
                        .attr("rel", "noopener noreferrer")
                        .text("Visit Now"),
                ),
            ),
        None => Element::new("div")
            .class("creation-card is-placeholder")
            .child(preview)
            .child(content.child(coming_soon())),
    };
    card.into()
}
