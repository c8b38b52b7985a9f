//! Client-side behaviours attached to a populated page.
//!
//! The submodules model each behaviour (timing, geometry, state) in Rust;
//! [`script`] emits the matching browser bootstrap. [`wire`] inspects a
//! populated page and reports what the bootstrap will attach to.

pub mod clipboard;
pub mod pointer;
pub mod reveal;
pub mod script;
pub mod scroll;
pub mod typewriter;

use std::time::Duration;

use log::{debug, warn};

use crate::config::InteractionConfig;
use crate::dom::Element;
use crate::skeleton::Skeleton;

/// What the interaction layer found on a populated page.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionPlan {
    pub reveal_targets: usize,
    pub typewriter: Option<String>,
    /// Time from page load until the tagline is fully typed.
    pub typewriter_duration: Option<Duration>,
    pub spotlights: usize,
    pub magnetic: usize,
    pub copy_buttons: usize,
    /// Same-page anchor targets, in page order, deduplicated.
    pub anchors: Vec<String>,
    /// Anchor targets with no matching id in the shell.
    pub missing_anchors: Vec<String>,
    pub script: String,
}

pub fn wire(page: &Skeleton, config: &InteractionConfig) -> InteractionPlan {
    let elements: Vec<&Element> = page
        .regions()
        .flat_map(|(_, nodes)| nodes.iter())
        .flat_map(|n| n.find_all(&|_| true))
        .collect();

    let count = |attr: &str| elements.iter().filter(|e| e.get_attr(attr).is_some()).count();

    let typewriter = elements
        .iter()
        .find_map(|e| e.get_attr("data-typewriter"))
        .map(String::from);

    let mut anchors: Vec<String> = Vec::new();
    for el in elements.iter().filter(|e| e.tag == "a") {
        if let Some(id) = el.get_attr("href").and_then(scroll::anchor_target) {
            if !anchors.iter().any(|a| a == id) {
                anchors.push(id.to_string());
            }
        }
    }
    let missing_anchors: Vec<String> = anchors
        .iter()
        .filter(|id| !page.anchor_ids().contains(id.as_str()))
        .cloned()
        .collect();
    for id in &missing_anchors {
        warn!("Anchor #{} has no target on the page", id);
    }

    let typewriter_duration = typewriter
        .as_deref()
        .map(|text| typewriter::Typewriter::new(text, config).duration());

    let plan = InteractionPlan {
        reveal_targets: elements.iter().filter(|e| reveal::is_reveal_target(e)).count(),
        typewriter,
        typewriter_duration,
        spotlights: count("data-spotlight"),
        magnetic: count("data-magnetic"),
        copy_buttons: count("data-copy"),
        anchors,
        missing_anchors,
        script: script::build_script(config),
    };
    debug!(
        "Interactions: {} reveal, {} spotlight, {} magnetic, {} copy, {} anchors",
        plan.reveal_targets,
        plan.spotlights,
        plan.magnetic,
        plan.copy_buttons,
        plan.anchors.len()
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::render::test_support::{doc, skeleton};

    #[test]
    fn test_wire_counts_populated_targets() {
        let page = render(&doc(), &skeleton(), &Default::default());
        let plan = wire(&page, &InteractionConfig::default());
        // 2 expertise + 3 projects + 2 applications + 2 timeline
        assert_eq!(plan.reveal_targets, 9);
        assert_eq!(plan.spotlights, 2);
        assert_eq!(plan.magnetic, 2);
        assert_eq!(plan.copy_buttons, 1);
        assert_eq!(plan.typewriter.as_deref(), Some("I build fast, boring infrastructure."));
        // 36 characters: first at 1000 ms, then 35 more at 50 ms
        assert_eq!(plan.typewriter_duration, Some(Duration::from_millis(2750)));
        assert!(plan.script.contains("IntersectionObserver"));
    }

    #[test]
    fn test_wire_reports_anchors_without_target() {
        let page = render(&doc(), &skeleton(), &Default::default());
        let plan = wire(&page, &InteractionConfig::default());
        assert_eq!(plan.anchors, vec!["home", "projects", "contact"]);
        assert!(plan.missing_anchors.is_empty());

        let mut page = page;
        page.replace(
            crate::skeleton::RegionId::NavLinks,
            vec![Element::new("a").attr("href", "#nowhere").into()],
        );
        let plan = wire(&page, &InteractionConfig::default());
        assert_eq!(plan.missing_anchors, vec!["nowhere"]);
    }

    #[test]
    fn test_wire_on_empty_skeleton() {
        let plan = wire(&skeleton(), &InteractionConfig::default());
        assert_eq!(plan.reveal_targets, 0);
        assert_eq!(plan.typewriter, None);
        assert_eq!(plan.typewriter_duration, None);
        assert!(plan.anchors.is_empty());
    }
}
