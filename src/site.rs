use crate::config::SiteConfig;
use crate::loader::ContentSource;
use crate::render;
use crate::skeleton::Skeleton;

// ── Site: everything a page load needs, shared read-only ──────

/// Parsed once at startup and handed to Rocket as managed state. Each page
/// load clones the skeleton, so concurrent loads never share region content.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub skeleton: Skeleton,
    pub source: ContentSource,
}

impl Site {
    pub fn new(config: SiteConfig) -> Result<Self, String> {
        let skeleton = Skeleton::load(&config).map_err(|e| e.to_string())?;
        let source = ContentSource::from_config(&config)?;
        log::info!("Content document: {}", source);
        Ok(Site {
            config,
            skeleton,
            source,
        })
    }

    pub async fn render(&self) -> String {
        render::render_page(&self.source, &self.skeleton, &self.config).await
    }
}
