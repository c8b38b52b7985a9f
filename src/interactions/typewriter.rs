use std::time::Duration;

use crate::config::InteractionConfig;

use super::script::js_number;

/// Reveals a string one character per interval after an initial delay.
/// Times are offsets on the caller's clock (e.g. time since page load).
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    delay: Duration,
    interval: Duration,
    started_at: Option<Duration>,
}

impl Typewriter {
    pub fn new(text: &str, config: &InteractionConfig) -> Self {
        Typewriter {
            chars: text.chars().collect(),
            delay: Duration::from_millis(config.typewriter_delay_ms),
            interval: Duration::from_millis(config.typewriter_interval_ms),
            started_at: None,
        }
    }

    /// Start the run. Returns false, leaving the running animation untouched,
    /// if it was already started and has not finished.
    pub fn start(&mut self, now: Duration) -> bool {
        if let Some(started) = self.started_at {
            if !self.is_finished_since(started, now) {
                return false;
            }
        }
        self.started_at = Some(now);
        true
    }

    /// Number of characters shown `elapsed` after the start. The first one
    /// appears exactly at the delay.
    pub fn revealed_after(&self, elapsed: Duration) -> usize {
        if elapsed < self.delay || self.chars.is_empty() {
            return 0;
        }
        let interval = self.interval.as_millis().max(1);
        let ticks = (elapsed - self.delay).as_millis() / interval;
        (ticks as usize).saturating_add(1).min(self.chars.len())
    }

    /// Visible text at `now`; empty before `start`.
    pub fn visible_at(&self, now: Duration) -> String {
        match self.started_at {
            Some(started) => {
                let n = self.revealed_after(now.saturating_sub(started));
                self.chars[..n].iter().collect()
            }
            None => String::new(),
        }
    }

    /// Time from start until the last character is shown.
    pub fn duration(&self) -> Duration {
        match self.chars.len() {
            0 => Duration::ZERO,
            n => self.delay + self.interval * (n as u32 - 1),
        }
    }

    fn is_finished_since(&self, started: Duration, now: Duration) -> bool {
        now.saturating_sub(started) >= self.duration()
    }
}

/// Client twin of [`Typewriter`]: `typewrite()` on the target mirrors
/// [`Typewriter::start`], refusing to restart until the last character is out.
pub fn client_js(config: &InteractionConfig) -> String {
    format!(
        r##"var tw=document.querySelector('[data-typewriter]');
if(tw){{var text=Array.from(tw.dataset.typewriter||''),i=0,running=false;
function type(){{if(i<text.length){{tw.textContent+=text[i];i++;}}if(i<text.length)setTimeout(type,{interval});else running=false;}}
tw.typewrite=function(){{if(running)return false;running=true;i=0;tw.textContent='';setTimeout(type,{delay});return true;}};
tw.typewrite();}}
"##,
        delay = js_number(config.typewriter_delay_ms as f64),
        interval = js_number(config.typewriter_interval_ms as f64),
    )
}
