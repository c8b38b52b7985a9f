use crate::config::SiteConfig;
use crate::content::ContentDocument;
use crate::skeleton::{RegionId, Skeleton};

use super::{text_patch, Patch};

pub fn populate(doc: &ContentDocument, _: &Skeleton, _: &SiteConfig) -> Vec<Patch> {
    vec![text_patch(RegionId::FooterText, &doc.footer.copyright)]
}
