use std::collections::HashSet;

use crate::config::InteractionConfig;
use crate::dom::Element;

use super::script::{js_number, js_string};

/// Classes whose elements fade in on first sight.
pub const REVEAL_CLASSES: &[&str] = &["expertise-card", "project-card", "creation-card", "timeline-item"];

pub fn is_reveal_target(el: &Element) -> bool {
    REVEAL_CLASSES.iter().any(|c| el.has_class(c))
}

/// One-shot entrance animation: an element gets the animation the first
/// time its visible ratio reaches the threshold, never again.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    animation: String,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new(config: &InteractionConfig) -> Self {
        RevealTracker {
            threshold: config.reveal_threshold,
            animation: config.reveal_animation.clone(),
            revealed: HashSet::new(),
        }
    }

    /// Feed one visibility observation. Returns the animation to apply, if
    /// this observation is the element's first crossing.
    pub fn observe(&mut self, key: &str, visible_ratio: f64) -> Option<&str> {
        if visible_ratio < self.threshold || visible_ratio <= 0.0 {
            return None;
        }
        if self.revealed.insert(key.to_string()) {
            Some(&self.animation)
        } else {
            None
        }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

/// Client twin of [`RevealTracker`]: each element is animated on its first
/// crossing and then dropped from the observer.
pub fn client_js(config: &InteractionConfig) -> String {
    let selector = REVEAL_CLASSES
        .iter()
        .map(|c| format!(".{}", c))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r##"if('IntersectionObserver' in window){{
var obs=new IntersectionObserver(function(entries){{entries.forEach(function(en){{if(en.isIntersecting){{en.target.style.animation='{animation}';obs.unobserve(en.target);}}}});}},{{threshold:{threshold},rootMargin:'{root_margin}'}});
document.querySelectorAll('{selector}').forEach(function(el){{obs.observe(el);}});}}
"##,
        animation = js_string(&config.reveal_animation),
        threshold = js_number(config.reveal_threshold),
        root_margin = js_string(&config.reveal_root_margin),
        selector = selector,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::script::appears_in_order;

    #[test]
    fn test_triggers_once_at_threshold() {
        let mut t = RevealTracker::new(&InteractionConfig::default());
        assert_eq!(t.observe("card-1", 0.05), None);
        assert!(!t.is_revealed("card-1"));
        assert_eq!(t.observe("card-1", 0.1), Some("fadeInUp 1s ease forwards"));
        assert_eq!(t.observe("card-1", 0.0), None);
        assert_eq!(t.observe("card-1", 1.0), None);
        assert!(t.is_revealed("card-1"));
    }

    #[test]
    fn test_elements_are_independent() {
        let mut t = RevealTracker::new(&InteractionConfig::default());
        assert!(t.observe("a", 0.5).is_some());
        assert!(t.observe("b", 0.5).is_some());
        assert!(t.observe("a", 0.5).is_none());
    }

    #[test]
    fn test_reveal_target_classes() {
        assert!(is_reveal_target(&Element::new("a").class("project-card is-link")));
        assert!(is_reveal_target(&Element::new("div").class("timeline-item")));
        assert!(!is_reveal_target(&Element::new("div").class("timeline-content")));
    }

    #[test]
    fn test_client_observes_every_reveal_class_once() {
        let js = client_js(&InteractionConfig::default());
        assert!(js.contains("'.expertise-card, .project-card, .creation-card, .timeline-item'"));
        assert!(js.contains("threshold:0.1,rootMargin:'0px 0px -50px 0px'"));
        assert!(appears_in_order(
            &js,
            &[
                "if(en.isIntersecting)",
                "style.animation='fadeInUp 1s ease forwards'",
                "obs.unobserve(en.target)",
            ]
        ));
    }
}
