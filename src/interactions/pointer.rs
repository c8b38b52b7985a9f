//! Pointer-relative transforms: hero tilt with blob parallax, card
//! spotlight, and the magnetic button. Each effect recomputes its style on
//! every pointer move and returns to neutral on pointer leave.

use std::fmt;

use crate::config::InteractionConfig;

use super::script::js_number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub const NEUTRAL: Translate = Translate { x: 0.0, y: 0.0 };

    pub fn scale(self, factor: f64) -> Translate {
        Translate {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px)", self.x, self.y)
    }
}

/// Style changes an effect wants applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    Transform(Translate),
    /// Hero content plus one transform per blob, in blob order.
    Parallax {
        content: Translate,
        blobs: Vec<Translate>,
    },
    CssVars(Vec<(&'static str, String)>),
}

pub trait PointerEffect {
    /// `pointer` is in the coordinate space the effect expects (page space
    /// for the tilt, client space for the others).
    fn on_move(&self, pointer: Point) -> StyleUpdate;
    fn on_leave(&self) -> StyleUpdate;
}

// ── Hero tilt ─────────────────────────────────────────

/// Hero content moves opposite to the pointer; blobs follow at `±blob_speed`
/// (positive for the first blob).
pub struct HeroTilt {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub divisor: f64,
    pub blob_speed: f64,
    pub blob_count: usize,
}

impl HeroTilt {
    pub fn new(viewport_width: f64, viewport_height: f64, blob_count: usize, config: &InteractionConfig) -> Self {
        HeroTilt {
            viewport_width,
            viewport_height,
            divisor: config.tilt_divisor,
            blob_speed: config.blob_speed,
            blob_count,
        }
    }

    fn blob_factor(&self, index: usize) -> f64 {
        if index == 0 {
            self.blob_speed
        } else {
            -self.blob_speed
        }
    }
}

impl PointerEffect for HeroTilt {
    fn on_move(&self, pointer: Point) -> StyleUpdate {
        let content = Translate {
            x: (self.viewport_width / 2.0 - pointer.x) / self.divisor,
            y: (self.viewport_height / 2.0 - pointer.y) / self.divisor,
        };
        let blobs = (0..self.blob_count)
            .map(|i| content.scale(self.blob_factor(i)))
            .collect();
        StyleUpdate::Parallax { content, blobs }
    }

    fn on_leave(&self) -> StyleUpdate {
        StyleUpdate::Parallax {
            content: Translate::NEUTRAL,
            blobs: vec![Translate::NEUTRAL; self.blob_count],
        }
    }
}

// ── Spotlight ─────────────────────────────────────────

/// Spotlight position while the pointer is outside the card.
pub const SPOTLIGHT_REST: [(&str, &str); 2] = [("--mouse-x", "50%"), ("--mouse-y", "50%")];

/// Sets `--mouse-x` / `--mouse-y` to the pointer position inside the card.
pub struct Spotlight {
    pub card: Rect,
}

impl PointerEffect for Spotlight {
    fn on_move(&self, pointer: Point) -> StyleUpdate {
        StyleUpdate::CssVars(vec![
            ("--mouse-x", format!("{}px", pointer.x - self.card.left)),
            ("--mouse-y", format!("{}px", pointer.y - self.card.top)),
        ])
    }

    /// Parks the spotlight in the card centre.
    fn on_leave(&self) -> StyleUpdate {
        StyleUpdate::CssVars(
            SPOTLIGHT_REST
                .iter()
                .map(|(name, value)| (*name, value.to_string()))
                .collect(),
        )
    }
}

// ── Magnetic button ───────────────────────────────────

pub struct MagneticButton {
    pub bounds: Rect,
    pub strength: f64,
}

impl MagneticButton {
    pub fn new(bounds: Rect, config: &InteractionConfig) -> Self {
        MagneticButton {
            bounds,
            strength: config.magnetic_strength,
        }
    }
}

impl PointerEffect for MagneticButton {
    fn on_move(&self, pointer: Point) -> StyleUpdate {
        let c = self.bounds.center();
        StyleUpdate::Transform(Translate {
            x: (pointer.x - c.x) * self.strength,
            y: (pointer.y - c.y) * self.strength,
        })
    }

    fn on_leave(&self) -> StyleUpdate {
        StyleUpdate::Transform(Translate::NEUTRAL)
    }
}

// ── Client ────────────────────────────────────────────

/// Client twin of the three effects. Leaving always restores the neutral
/// state the models return from `on_leave`.
pub fn client_js(config: &InteractionConfig) -> String {
    let spotlight_rest: String = SPOTLIGHT_REST
        .iter()
        .map(|(name, value)| format!("card.style.setProperty('{}','{}');", name, value))
        .collect();
    format!(
        r##"var hero=document.querySelector('.hero'),content=document.querySelector('.hero-content');
if(hero&&content){{var blobs=document.querySelectorAll('.blob');
hero.addEventListener('mousemove',function(e){{var x=(window.innerWidth/2-e.pageX)/{divisor},y=(window.innerHeight/2-e.pageY)/{divisor};
content.style.transform='translate('+x+'px, '+y+'px)';
blobs.forEach(function(b){{var s=b.classList.contains('blob-1')?{speed}:-({speed});b.style.transform='translate('+(x*s)+'px, '+(y*s)+'px)';}});}});
hero.addEventListener('mouseleave',function(){{content.style.transform='';blobs.forEach(function(b){{b.style.transform='';}});}});}}
document.querySelectorAll('[data-spotlight]').forEach(function(card){{
card.addEventListener('mousemove',function(e){{var r=card.getBoundingClientRect();card.style.setProperty('--mouse-x',(e.clientX-r.left)+'px');card.style.setProperty('--mouse-y',(e.clientY-r.top)+'px');}});
card.addEventListener('mouseleave',function(){{{spotlight_rest}}});}});
document.querySelectorAll('[data-magnetic]').forEach(function(btn){{
btn.addEventListener('mousemove',function(e){{var r=btn.getBoundingClientRect();var x=(e.clientX-(r.left+r.width/2))*{strength},y=(e.clientY-(r.top+r.height/2))*{strength};btn.style.transform='translate('+x+'px, '+y+'px)';}});
btn.addEventListener('mouseleave',function(){{btn.style.transform='';}});}});
"##,
        divisor = js_number(config.tilt_divisor),
        speed = js_number(config.blob_speed),
        strength = js_number(config.magnetic_strength),
        spotlight_rest = spotlight_rest,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::script::appears_in_order;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_tilt_moves_opposite_to_pointer() {
        let tilt = HeroTilt::new(1000.0, 800.0, 2, &InteractionConfig::default());
        match tilt.on_move(pt(0.0, 0.0)) {
            StyleUpdate::Parallax { content, blobs } => {
                assert_eq!(content, Translate { x: 20.0, y: 16.0 });
                assert_eq!(blobs, vec![Translate { x: 40.0, y: 32.0 }, Translate { x: -40.0, y: -32.0 }]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_tilt_centre_is_neutral_and_leave_resets() {
        let tilt = HeroTilt::new(1000.0, 800.0, 1, &InteractionConfig::default());
        assert_eq!(
            tilt.on_move(pt(500.0, 400.0)),
            StyleUpdate::Parallax { content: Translate::NEUTRAL, blobs: vec![Translate::NEUTRAL] }
        );
        assert_eq!(tilt.on_leave(), tilt.on_move(pt(500.0, 400.0)));
    }

    #[test]
    fn test_spotlight_is_relative_to_card() {
        let s = Spotlight {
            card: Rect { left: 100.0, top: 50.0, width: 300.0, height: 200.0 },
        };
        assert_eq!(
            s.on_move(pt(130.0, 75.5)),
            StyleUpdate::CssVars(vec![("--mouse-x", "30px".into()), ("--mouse-y", "25.5px".into())])
        );
    }

    #[test]
    fn test_magnetic_pulls_towards_pointer() {
        let m = MagneticButton::new(
            Rect { left: 0.0, top: 0.0, width: 100.0, height: 40.0 },
            &InteractionConfig::default(),
        );
        match m.on_move(pt(100.0, 20.0)) {
            StyleUpdate::Transform(t) => {
                assert!((t.x - 15.0).abs() < 1e-9);
                assert_eq!(t.y, 0.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(m.on_leave(), StyleUpdate::Transform(Translate::NEUTRAL));
    }

    #[test]
    fn test_translate_display() {
        assert_eq!(Translate { x: -4.0, y: 2.5 }.to_string(), "translate(-4px, 2.5px)");
    }

    #[test]
    fn test_client_uses_model_geometry() {
        let js = client_js(&InteractionConfig::default());
        assert!(js.contains("(window.innerWidth/2-e.pageX)/25"));
        assert!(js.contains("contains('blob-1')?2:-(2)"));
        assert!(js.contains("(e.clientX-(r.left+r.width/2))*0.3"));
    }

    #[test]
    fn test_client_leave_restores_neutral() {
        let js = client_js(&InteractionConfig::default());
        let spot = Spotlight { card: Rect { left: 0.0, top: 0.0, width: 10.0, height: 10.0 } };
        match spot.on_leave() {
            StyleUpdate::CssVars(vars) => {
                for (name, value) in vars {
                    assert!(js.contains(&format!("setProperty('{}','{}')", name, value)));
                }
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(appears_in_order(&js, &["hero.addEventListener('mouseleave'", "content.style.transform=''"]));
        assert!(appears_in_order(&js, &["btn.addEventListener('mouseleave'", "btn.style.transform=''"]));
    }
}
