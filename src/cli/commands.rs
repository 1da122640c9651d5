//! CLI commands and argument parsing

use crate::error::Result;
use crate::pagination::{ITEM_PARAM, PAGE_PARAM};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

/// Tamaya music library web frontend
#[derive(Parser, Debug)]
#[command(name = "tamaya-web")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Library backend base URL (overrides config file and TAMAYA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load one page of albums
    Albums {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Load one page of tracks
    Tracks {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Load one page of artists
    Artists {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Load an album and its tracks
    Album {
        /// Album hash
        hash: String,
    },

    /// Load a single track
    Track {
        /// Track hash
        hash: String,
    },

    /// Load an artist and their albums
    Artist {
        /// Artist hash
        hash: String,
    },

    /// Start HTTP server mode
    Serve {
        /// Port to listen on (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration
    Config,
}

/// Page selection, passed through as raw query text
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page number, 1-based
    #[arg(long)]
    pub page: Option<String>,

    /// Items per page
    #[arg(long)]
    pub item: Option<String>,
}

impl PageArgs {
    /// Build the navigation URL a browser would have requested for `route`
    pub fn to_url(&self, route: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("http://localhost/{route}"))?;
        let pairs: Vec<(&str, &str)> = [(PAGE_PARAM, &self.page), (ITEM_PARAM, &self.item)]
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
