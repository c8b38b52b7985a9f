use crate::config::SiteConfig;
use crate::content::ContentDocument;
use crate::dom::{Element, Node};
use crate::skeleton::{RegionId, Skeleton};

use super::Patch;

/// Heading (greeting, line break, styled name), CTA buttons, and the
/// typewriter target for the tagline. The tagline region starts empty; the
/// text is revealed client-side.
pub fn populate(doc: &ContentDocument, _: &Skeleton, _: &SiteConfig) -> Vec<Patch> {
    let heading = vec![
        Node::text(format!("{} ", doc.hero.greeting)),
        Element::new("br").into(),
        Node::text(" "),
        Element::new("span")
            .class("name")
            .text(doc.personal.name.as_str())
            .into(),
    ];

    let buttons = doc
        .hero
        .cta
        .iter()
        .map(|b| {
            Element::new("a")
                .attr("href", b.href.as_str())
                .class(&format!("btn btn-{}", b.kind))
                .flag("data-magnetic")
                .text(b.text.as_str())
                .into()
        })
        .collect();

    let tagline = Element::new("span")
        .class("typewriter")
        .attr("data-typewriter", doc.personal.tagline.as_str())
        .attr("aria-label", doc.personal.tagline.as_str());

    vec![
        Patch::Region(RegionId::HeroHeading, heading),
        Patch::Region(RegionId::CtaButtons, buttons),
        Patch::Region(RegionId::HeroTagline, vec![tagline.into()]),
    ]
}
