pub mod display;
pub mod search;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::sources::{CatalogLocation, DEFAULT_CATALOG_FILE, GUTENDEX_URL};

#[derive(Debug, Parser)]
#[command(author, version, about = "Browse free book catalogs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Search a catalog and print the results
    Search(search::SearchCommand),
}

/// Where the two catalogs are fetched from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(long, global = true, env = "BOOKFINDER_GUTENBERG_URL", default_value = GUTENDEX_URL)]
    pub gutenberg_url: String,

    /// Path or http(s) URL of the NCERT dataset
    #[arg(long, global = true, env = "BOOKFINDER_NCERT_CATALOG", default_value = DEFAULT_CATALOG_FILE)]
    pub ncert_catalog: CatalogLocation,
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "BOOKFINDER_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    /// Open the catalog page in a browser once the server is listening
    #[arg(long, env = "BOOKFINDER_OPEN")]
    pub open: bool,
}
