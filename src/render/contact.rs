use crate::config::SiteConfig;
use crate::content::{non_blank, ContactItem, ContactKind, ContentDocument};
use crate::dom::{Element, Node};
use crate::icons::icon_for_label;
use crate::skeleton::{RegionId, Skeleton};

use super::{text_patch, Patch};

/// Contact items split by kind: each email becomes a copy-to-clipboard
/// button, everything else goes into one icon link collection. Input order is
/// kept within each group.
pub fn populate(doc: &ContentDocument, _: &Skeleton, config: &SiteConfig) -> Vec<Patch> {
    let (emails, others): (Vec<&ContactItem>, Vec<&ContactItem>) = doc
        .contact
        .items
        .iter()
        .partition(|item| item.kind == ContactKind::Email);

    let mut info: Vec<Node> = emails
        .iter()
        .map(|item| email_item(item, &config.interactions.copy_confirmation))
        .collect();
    if !others.is_empty() {
        info.push(
            Element::new("div")
                .class("contact-links")
                .children(others.iter().map(|item| contact_link(item)))
                .into(),
        );
    }

    let github = Element::new("a")
        .attr("href", doc.personal.contact.github.as_str())
        .class("btn btn-primary")
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(doc.contact.github_button.text.as_str());

    vec![
        text_patch(RegionId::ContactTitle, &doc.contact.title),
        Patch::Region(RegionId::ContactInfo, info),
        Patch::Region(RegionId::GithubButton, vec![github.into()]),
    ]
}

fn email_item(item: &ContactItem, confirmation: &str) -> Node {
    let icon = icon_for_label(&item.label);
    Element::new("div")
        .class("contact-item contact-email")
        .child(Element::new("h3").text(item.label.as_str()))
        .child(
            Element::new("button")
                .attr("type", "button")
                .class("copy-email")
                .attr("data-copy", item.value.as_str())
                .attr("data-copied-label", confirmation)
                .attr("aria-label", format!("Copy {} to clipboard", item.value))
                .child(Element::new("span").class("copy-email__icon").child(Node::Raw(icon.svg.to_string())))
                .child(Element::new("span").class("copy-email__label").text(item.value.as_str())),
        )
        .into()
}

fn contact_link(item: &ContactItem) -> Element {
    let icon = icon_for_label(&item.label);
    let base = match contact_href(item) {
        Some(href) => {
            let a = Element::new("a").class("contact-link").attr("href", href);
            if item.kind == ContactKind::Link {
                a.attr("target", "_blank").attr("rel", "noopener noreferrer")
            } else {
                a
            }
        }
        None => Element::new("span").class("contact-link is-static"),
    };
    base.attr("title", item.label.as_str())
        .attr("data-icon", icon.name)
        .child(Node::Raw(icon.svg.to_string()))
        .child(Element::new("span").class("contact-link__value").text(item.value.as_str()))
}

/// `tel:` without whitespace for phones, the url (or the value) for links,
/// the url if any for everything else.
pub fn contact_href(item: &ContactItem) -> Option<String> {
    match item.kind {
        ContactKind::Phone => {
            let digits: String = item.value.chars().filter(|c| !c.is_whitespace()).collect();
            Some(format!("tel:{}", digits))
        }
        ContactKind::Link => Some(
            non_blank(&item.url)
                .unwrap_or(item.value.as_str())
                .to_string(),
        ),
        ContactKind::Email => Some(format!("mailto:{}", item.value)),
        ContactKind::Other => non_blank(&item.url).map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::{doc, region, skeleton};

    fn info() -> Vec<Node> {
        let patches = populate(&doc(), &skeleton(), &SiteConfig::default());
        region(&patches, RegionId::ContactInfo).unwrap().clone()
    }

    #[test]
    fn test_email_becomes_copy_button() {
        let info = info();
        let buttons = info[0].find_all(&|e| e.has_class("copy-email"));
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].tag, "button");
        assert_eq!(buttons[0].get_attr("data-copy"), Some("vera@example.com"));
        assert_eq!(buttons[0].get_attr("data-copied-label"), Some("Copied!"));
        assert!(info[0].find_all(&|e| e.tag == "a").is_empty());
    }

    #[test]
    fn test_other_items_form_one_link_collection() {
        let info = info();
        assert_eq!(info.len(), 2);
        let links = info[1].find_all(&|e| e.has_class("contact-link"));
        let titles: Vec<_> = links.iter().map(|l| l.get_attr("title").unwrap()).collect();
        assert_eq!(titles, vec!["GitHub", "Phone", "Location"]);

        assert_eq!(links[0].get_attr("href"), Some("https://github.com/veralind"));
        assert_eq!(links[0].get_attr("data-icon"), Some("github"));
        assert_eq!(links[0].get_attr("target"), Some("_blank"));

        assert_eq!(links[1].get_attr("href"), Some("tel:+15550100100"));
        assert_eq!(links[1].get_attr("target"), None);

        assert_eq!(links[2].tag, "span");
        assert_eq!(links[2].get_attr("href"), None);
        assert_eq!(links[2].get_attr("data-icon"), Some("link"));
    }

    #[test]
    fn test_no_link_collection_when_only_emails() {
        let mut d = doc();
        d.contact.items.retain(|i| i.kind == ContactKind::Email);
        let patches = populate(&d, &skeleton(), &SiteConfig::default());
        let info = region(&patches, RegionId::ContactInfo).unwrap();
        assert_eq!(info.len(), 1);
        assert!(info[0].find_all(&|e| e.has_class("contact-links")).is_empty());
    }

    #[test]
    fn test_link_without_url_falls_back_to_value() {
        let item = ContactItem {
            label: "Site".into(),
            kind: ContactKind::Link,
            value: "https://vera.dev".into(),
            url: None,
        };
        assert_eq!(contact_href(&item).as_deref(), Some("https://vera.dev"));
    }

    #[test]
    fn test_github_button() {
        let patches = populate(&doc(), &skeleton(), &SiteConfig::default());
        let html = region(&patches, RegionId::GithubButton).unwrap()[0].to_html();
        assert_eq!(
            html,
            r#"<a href="https://github.com/veralind" class="btn btn-primary" target="_blank" rel="noopener noreferrer">View GitHub</a>"#
        );
    }
}
