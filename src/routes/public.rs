use rocket::response::content::RawHtml;
use rocket::State;

use crate::site::Site;

// ── Homepage ───────────────────────────────────────────

/// Every load re-reads the content document, so edits show up on refresh.
#[get("/")]
pub async fn homepage(site: &State<Site>) -> RawHtml<String> {
    RawHtml(site.render().await)
}
