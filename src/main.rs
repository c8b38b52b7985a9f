use clap::Parser;
use std::path::Path;

use folio::cli::{Cli, Cmd};
use folio::config::SiteConfig;
use folio::routes;
use folio::site::Site;

fn load_site(config_path: &Path) -> Result<Site, String> {
    let config = SiteConfig::load(config_path).map_err(|e| e.to_string())?;
    Site::new(config)
}

#[rocket::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.cmd {
        Cmd::Serve { config } => match load_site(&config) {
            Ok(site) => routes::build(site)
                .launch()
                .await
                .map(|_| ())
                .map_err(|e| e.to_string()),
            Err(e) => Err(e),
        },
        Cmd::Render { config, out } => match load_site(&config) {
            Ok(site) => {
                let html = site.render().await;
                match out {
                    Some(path) => std::fs::write(&path, html)
                        .map(|_| log::info!("Wrote {}", path.display()))
                        .map_err(|e| format!("cannot write {}: {}", path.display(), e)),
                    None => {
                        print!("{}", html);
                        Ok(())
                    }
                }
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("folio: {}", e);
        std::process::exit(1);
    }
}
