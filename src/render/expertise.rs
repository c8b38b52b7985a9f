use crate::config::SiteConfig;
use crate::content::ContentDocument;
use crate::dom::Element;
use crate::skeleton::{RegionId, Skeleton};

use super::cards::tag_list;
use super::{text_patch, Patch};

/// Expertise cards, each flagged for the pointer spotlight.
pub fn populate(doc: &ContentDocument, _: &Skeleton, _: &SiteConfig) -> Vec<Patch> {
    let cards = doc
        .expertise
        .cards
        .iter()
        .map(|card| {
            Element::new("div")
                .class("expertise-card")
                .flag("data-spotlight")
                .child(Element::new("h3").text(card.title.as_str()))
                .child(Element::new("p").text(card.description.as_str()))
                .child(tag_list("tech-tags", "tag", &card.tags))
                .into()
        })
        .collect();

    vec![
        text_patch(RegionId::ExpertiseTitle, &doc.expertise.title),
        Patch::Region(RegionId::ExpertiseGrid, cards),
    ]
}
