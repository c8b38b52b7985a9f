use std::time::Duration;

use crate::config::InteractionConfig;

use super::script::js_number;

#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardError(pub String);

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "clipboard write failed: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {}

/// The host's clipboard-write capability.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// State of an email copy button: its label flips to a confirmation for a
/// fixed interval after a successful copy, then reverts.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyButton {
    value: String,
    confirmation: String,
    feedback: Duration,
    copied_at: Option<Duration>,
}

impl CopyButton {
    pub fn new(value: &str, config: &InteractionConfig) -> Self {
        CopyButton {
            value: value.to_string(),
            confirmation: config.copy_confirmation.clone(),
            feedback: Duration::from_millis(config.copy_feedback_ms),
            copied_at: None,
        }
    }

    /// Write the value to the clipboard. A failed write leaves the button
    /// state unchanged.
    pub fn activate<C: Clipboard>(&mut self, clipboard: &mut C, now: Duration) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.value)?;
        self.copied_at = Some(now);
        Ok(())
    }

    pub fn is_confirming(&self, now: Duration) -> bool {
        match self.copied_at {
            Some(at) => now >= at && now - at < self.feedback,
            None => false,
        }
    }

    pub fn label_at(&self, now: Duration) -> &str {
        if self.is_confirming(now) {
            &self.confirmation
        } else {
            &self.value
        }
    }
}

/// Client twin of [`CopyButton`]: the label flips only once the write
/// succeeds, and a repeat copy restarts the feedback window.
pub fn client_js(config: &InteractionConfig) -> String {
    format!(
        r##"document.querySelectorAll('[data-copy]').forEach(function(btn){{
var label=btn.querySelector('.copy-email__label'),timer=null;
btn.addEventListener('click',function(){{
navigator.clipboard.writeText(btn.dataset.copy).then(function(){{btn.classList.add('copied');if(label)label.textContent=btn.dataset.copiedLabel;
clearTimeout(timer);timer=setTimeout(function(){{btn.classList.remove('copied');if(label)label.textContent=btn.dataset.copy;}},{feedback});}})
.catch(function(err){{console.error('Copy failed:',err);}});}});}});
"##,
        feedback = js_number(config.copy_feedback_ms as f64),
    )
}
