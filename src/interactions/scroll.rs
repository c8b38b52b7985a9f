use std::time::Duration;

use crate::config::InteractionConfig;

use super::script::js_number;

/// Target id of a same-page anchor (`#projects` -> `projects`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position `elapsed` into a smooth scroll from `start` to `target`
/// (ease-in-out cubic). Lands exactly on the target once `duration` passes.
pub fn smooth_scroll_position(start: f64, target: f64, elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let t = elapsed.as_secs_f64() / duration.as_secs_f64();
    let eased = if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    };
    start + (target - start) * eased
}

/// Client twin of [`smooth_scroll_position`]. Every same-page anchor click
/// is claimed first, so `#` or an id with no target does nothing at all.
pub fn client_js(config: &InteractionConfig) -> String {
    format!(
        r##"function ease(t){{return t<0.5?4*t*t*t:1-Math.pow(-2*t+2,3)/2;}}
document.querySelectorAll('a[href^="#"]').forEach(function(a){{a.addEventListener('click',function(e){{
e.preventDefault();var id=a.getAttribute('href').slice(1);if(!id)return;var target=document.getElementById(id);if(!target)return;
var start=window.scrollY,end=target.getBoundingClientRect().top+start,t0=null;
function step(ts){{if(t0===null)t0=ts;var p={duration}>0?Math.min((ts-t0)/{duration},1):1;window.scrollTo(0,start+(end-start)*ease(p));if(p<1)requestAnimationFrame(step);}}
requestAnimationFrame(step);}});}});
"##,
        duration = js_number(config.scroll_duration_ms as f64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::script::appears_in_order;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#projects"), Some("projects"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://x.dev/#a"), None);
        assert_eq!(anchor_target("/about"), None);
    }

    #[test]
    fn test_smooth_scroll_endpoints_and_midpoint() {
        let d = Duration::from_millis(600);
        assert_eq!(smooth_scroll_position(100.0, 900.0, Duration::ZERO, d), 100.0);
        assert_eq!(smooth_scroll_position(100.0, 900.0, Duration::from_millis(300), d), 500.0);
        assert_eq!(smooth_scroll_position(100.0, 900.0, d, d), 900.0);
        assert_eq!(smooth_scroll_position(100.0, 900.0, Duration::from_secs(5), d), 900.0);
    }

    #[test]
    fn test_smooth_scroll_is_monotonic_upwards() {
        let d = Duration::from_millis(600);
        let mut last = 800.0;
        for ms in (0..=600).step_by(20) {
            let y = smooth_scroll_position(800.0, 0.0, Duration::from_millis(ms), d);
            assert!(y <= last + 1e-9);
            last = y;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_client_claims_click_before_target_lookup() {
        let js = client_js(&InteractionConfig::default());
        // "#" and "#nowhere" must not fall through to the browser's hash jump
        assert!(appears_in_order(
            &js,
            &["e.preventDefault()", "if(!id)return", "getElementById(id)", "if(!target)return"]
        ));
        assert_eq!(anchor_target("#"), None);
    }

    #[test]
    fn test_client_easing_matches_model() {
        let js = client_js(&InteractionConfig::default());
        assert!(js.contains("return t<0.5?4*t*t*t:1-Math.pow(-2*t+2,3)/2;"));
        assert!(js.contains("var p=600>0?Math.min((ts-t0)/600,1):1;"));

        let zero = InteractionConfig { scroll_duration_ms: 0, ..InteractionConfig::default() };
        assert!(client_js(&zero).contains("var p=0>0?Math.min((ts-t0)/0,1):1;"));
        assert_eq!(smooth_scroll_position(0.0, 10.0, Duration::ZERO, Duration::ZERO), 10.0);
    }
}
