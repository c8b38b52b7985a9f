use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Personal portfolio renderer")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Serve the rendered page and the site's static files
    Serve {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Render the page once
    Render {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_config_path() {
        let cli = Cli::try_parse_from(["folio", "serve"]).unwrap();
        match cli.cmd {
            Cmd::Serve { config } => assert_eq!(config, PathBuf::from("folio.toml")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_render_with_out() {
        let cli = Cli::try_parse_from(["folio", "render", "--config", "x.toml", "--out", "index.html"]).unwrap();
        match cli.cmd {
            Cmd::Render { config, out } => {
                assert_eq!(config, PathBuf::from("x.toml"));
                assert_eq!(out, Some(PathBuf::from("index.html")));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["folio"]).is_err());
    }
}
