use crate::config::InteractionConfig;

use super::{clipboard, pointer, reveal, scroll, typewriter};

/// Mobile menu: the toggle opens and closes the nav list, any nav link or the
/// logo closes it.
const MENU_JS: &str = r##"var nav=document.getElementById('navLinks');
function closeMenu(){if(nav)nav.classList.remove('active');}
document.querySelectorAll('[data-menu-toggle]').forEach(function(t){t.addEventListener('click',function(){if(nav)nav.classList.toggle('active');});});
document.querySelectorAll('[data-close-menu]').forEach(function(a){a.addEventListener('click',closeMenu);});
"##;

/// Whole-card click-through for `data-href` cards. Clicks on an inner link
/// are left to that link.
const CLICK_THROUGH_JS: &str = r##"document.querySelectorAll('[data-href]').forEach(function(card){
function go(e){if(e.target.closest('a'))return;window.open(card.dataset.href,'_blank','noopener');}
card.addEventListener('click',go);
card.addEventListener('keydown',function(e){if(e.key==='Enter')go(e);});});
"##;

/// Client bootstrap wiring every interaction. Each behaviour's snippet lives
/// next to its Rust model and reads the same config.
pub fn build_script(config: &InteractionConfig) -> String {
    let mut js = String::from("<script>\n(function(){\n");
    js.push_str(MENU_JS);
    js.push_str(&typewriter::client_js(config));
    js.push_str(&pointer::client_js(config));
    js.push_str(&reveal::client_js(config));
    js.push_str(&scroll::client_js(config));
    js.push_str(CLICK_THROUGH_JS);
    js.push_str(&clipboard::client_js(config));
    js.push_str("})();\n</script>");
    js
}

/// Non-finite values would break the script; fall back to 1.
pub(crate) fn js_number(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        "1".to_string()
    }
}

/// Escape for a single-quoted JS string inside a `<script>` block.
pub(crate) fn js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\u003c")
        .replace('\n', "\\n")
}

/// True when every needle occurs in `haystack`, each after the previous one.
#[cfg(test)]
pub(crate) fn appears_in_order(haystack: &str, needles: &[&str]) -> bool {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_embeds_config() {
        let js = build_script(&InteractionConfig::default());
        assert!(js.starts_with("<script>"));
        assert!(js.ends_with("</script>"));
        assert!(js.contains("setTimeout(type,1000)"));
        assert!(js.contains("threshold:0.1,rootMargin:'0px 0px -50px 0px'"));
        assert!(js.contains("},2000)"));
        assert!(js.contains("'.expertise-card, .project-card, .creation-card, .timeline-item'"));
        assert!(!js.contains("{{"));
    }

    #[test]
    fn test_script_wires_every_behaviour_once() {
        let js = build_script(&InteractionConfig::default());
        for hook in [
            "[data-menu-toggle]",
            "[data-typewriter]",
            "[data-spotlight]",
            "[data-magnetic]",
            "new IntersectionObserver",
            "a[href^=\"#\"]",
            "[data-href]",
            "[data-copy]",
        ] {
            assert_eq!(js.matches(hook).count(), 1, "{}", hook);
        }
    }

    #[test]
    fn test_string_values_are_escaped() {
        let config = InteractionConfig {
            reveal_animation: "x'</script>".to_string(),
            ..InteractionConfig::default()
        };
        let js = build_script(&config);
        assert!(js.contains(r"animation='x\'\u003c/script>'"));
        assert_eq!(js.matches("</script>").count(), 1);
    }

    #[test]
    fn test_js_number() {
        assert_eq!(js_number(f64::NAN), "1");
        assert_eq!(js_number(0.25), "0.25");
    }

    #[test]
    fn test_click_through_leaves_inner_links_alone() {
        assert!(appears_in_order(
            CLICK_THROUGH_JS,
            &["if(e.target.closest('a'))return", "window.open(card.dataset.href,'_blank','noopener')"]
        ));
    }

    #[test]
    fn test_appears_in_order() {
        assert!(appears_in_order("a b c", &["a", "c"]));
        assert!(!appears_in_order("a b c", &["c", "a"]));
        assert!(!appears_in_order("aa", &["a", "a", "a"]));
    }
}
