use crate::config::SiteConfig;
use crate::content::{non_blank, ContentDocument, ProjectItem};
use crate::dom::{Element, Node};
use crate::skeleton::{RegionId, Skeleton};

use super::cards::{coming_soon, media, tag_list};
use super::{text_patch, Patch};

pub fn populate(doc: &ContentDocument, _: &Skeleton, _: &SiteConfig) -> Vec<Patch> {
    let cards = doc.projects.items.iter().map(project_card).collect();
    vec![
        text_patch(RegionId::ProjectsTitle, &doc.projects.title),
        Patch::Region(RegionId::ProjectsGrid, cards),
    ]
}

/// A project with a URL is one anchor covering the whole card; without a
/// URL it is an inert block with a "Coming Soon" indicator.
fn project_card(project: &ProjectItem) -> Node {
    let mut content = Element::new("div")
        .class("project-content")
        .child(Element::new("h3").text(project.title.as_str()))
        .child(Element::new("p").text(project.description.as_str()))
        .child(tag_list("tech-tags", "tag", &project.tags));

    let card = match non_blank(&project.url) {
        Some(url) => Element::new("a")
            .class("project-card is-link")
            .attr("href", url)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer"),
        None => {
            content = content.child(coming_soon());
            Element::new("div")
                .class("project-card is-placeholder")
                .attr("aria-disabled", "true")
        }
    };

    card.child(media("project-image", &project.image, &project.icon, &project.title))
        .child(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{doc, region, skeleton};

    fn cards() -> Vec<Node> {
        let patches = populate(&doc(), &skeleton(), &SiteConfig::default());
        region(&patches, RegionId::ProjectsGrid).unwrap().clone()
    }

    #[test]
    fn test_linked_project_is_one_anchor() {
        let cards = cards();
        let card = cards[0].as_element().unwrap();
        assert_eq!(card.tag, "a");
        assert_eq!(card.get_attr("href"), Some("https://example.com/ledger"));
        assert_eq!(card.get_attr("rel"), Some("noopener noreferrer"));
        // no nested anchors inside the card
        assert_eq!(cards[0].find_all(&|e| e.tag == "a").len(), 1);
        assert!(!cards[0].text_content().contains("Coming Soon"));
    }

    #[test]
    fn test_unlinked_project_has_no_affordance() {
        let cards = cards();
        for card in &cards[1..] {
            assert_eq!(card.find_all(&|e| e.tag == "a" || e.get_attr("href").is_some()).len(), 0);
            assert!(card.text_content().contains("Coming Soon"));
        }
    }

    #[test]
    fn test_missing_image_renders_fallback() {
        let cards = cards();
        assert!(cards[0].contains_tag("img"));

        assert!(!cards[1].contains_tag("img"));
        let marker = cards[1].find_all(&|e| e.has_class("is-fallback"));
        assert_eq!(marker.len(), 1);
        assert!(Node::from(marker[0].clone()).text_content().contains("📡"));

        assert!(!cards[2].contains_tag("img"));
        assert_eq!(cards[2].find_all(&|e| e.has_class("gradient-placeholder")).len(), 1);
    }
}
