pub mod public;

use rocket::fs::{FileServer, Options};
use rocket::{Build, Rocket};

use crate::site::Site;

/// Static files sit below the page route so `/` always renders.
const STATIC_RANK: isize = 20;

pub fn build(site: Site) -> Rocket<Build> {
    let static_dir = site.config.site_dir.clone();
    rocket::build()
        .manage(site)
        .mount("/", routes![public::homepage])
        .mount("/", FileServer::new(static_dir, Options::Missing).rank(STATIC_RANK))
}
