use crate::config::SiteConfig;
use crate::content::ContentDocument;
use crate::dom::Element;
use crate::skeleton::{RegionId, Skeleton};

use super::{text_patch, Patch};

pub fn populate(doc: &ContentDocument, _: &Skeleton, _: &SiteConfig) -> Vec<Patch> {
    let items = doc
        .experience
        .timeline
        .iter()
        .map(|exp| {
            Element::new("div")
                .class("timeline-item")
                .child(
                    Element::new("div")
                        .class("timeline-content")
                        .child(Element::new("h3").text(exp.position.as_str()))
                        .child(Element::new("div").class("company").text(exp.company.as_str()))
                        .child(Element::new("div").class("date").text(exp.period.as_str()))
                        .child(Element::new("p").text(exp.description.as_str())),
                )
                .into()
        })
        .collect();

    vec![
        text_patch(RegionId::ExperienceTitle, &doc.experience.title),
        Patch::Region(RegionId::Timeline, items),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{doc, region, skeleton};

    #[test]
    fn test_timeline_keeps_document_order() {
        let patches = populate(&doc(), &skeleton(), &SiteConfig::default());
        let items = region(&patches, RegionId::Timeline).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].text_content(),
            "Staff EngineerAcme2021 - nowStorage team."
        );
        assert!(items[1].to_html().starts_with(
            r#"<div class="timeline-item"><div class="timeline-content"><h3>Engineer</h3><div class="company">Initech</div>"#
        ));
    }
}
