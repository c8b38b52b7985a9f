//! Pieces shared by the project and application cards.

use crate::content::non_blank;
use crate::dom::{Element, Node};

pub const COMING_SOON: &str = "Coming Soon";

/// Image when present; otherwise a fallback marker holding the icon, or a
/// gradient placeholder when there is no icon either.
pub fn media(class: &str, image: &Option<String>, icon: &Option<String>, alt: &str) -> Element {
    match non_blank(image) {
        Some(src) => Element::new("div")
            .class(class)
            .child(Element::new("img").attr("src", src).attr("alt", alt).attr("loading", "lazy")),
        None => {
            let marker = Element::new("div").class(&format!("{} is-fallback", class));
            match non_blank(icon) {
                Some(icon) => marker.child(Element::new("span").class("media-icon").text(icon)),
                None => marker.child(
                    Element::new("span")
                        .class("gradient-placeholder")
                        .attr("aria-hidden", "true"),
                ),
            }
        }
    }
}

/// Tags in input order.
pub fn tag_list(wrapper_class: &str, tag_class: &str, tags: &[String]) -> Element {
    Element::new("div").class(wrapper_class).children(
        tags.iter()
            .map(|t| Element::new("span").class(tag_class).text(t.as_str())),
    )
}

pub fn coming_soon() -> Node {
    Element::new("span").class("coming-soon").text(COMING_SOON).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_with_image() {
        let node: Node = media("project-image", &Some("a.png".into()), &Some("🚀".into()), "A").into();
        let imgs = node.find_all(&|e| e.tag == "img");
        assert_eq!(imgs.len(), 1);
        assert_eq!(imgs[0].get_attr("alt"), Some("A"));
        assert!(!node.text_content().contains("🚀"));
    }

    #[test]
    fn test_media_falls_back_to_icon() {
        let node: Node = media("project-image", &None, &Some("🚀".into()), "A").into();
        assert!(!node.contains_tag("img"));
        assert!(node.as_element().unwrap().has_class("is-fallback"));
        assert_eq!(node.text_content(), "🚀");
    }

    #[test]
    fn test_media_falls_back_to_gradient() {
        let node: Node = media("project-image", &Some("".into()), &None, "A").into();
        assert!(!node.contains_tag("img"));
        assert_eq!(node.find_all(&|e| e.has_class("gradient-placeholder")).len(), 1);
    }

    #[test]
    fn test_tag_list_keeps_order() {
        let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let node: Node = tag_list("tech-tags", "tag", &tags).into();
        assert_eq!(node.text_content(), "bab");
    }
}
