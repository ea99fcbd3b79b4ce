use anyhow::{Result, bail};
use clap::Args;
use tokio::sync::Mutex;

use super::SourceArgs;
use super::display::TerminalDisplay;
use crate::application::orchestrator::{LoadOrchestrator, LoadOutcome, LoadRequest};
use crate::domain::{BookSource, SortOrder};
use crate::infrastructure::http::build_client;
use crate::infrastructure::sources::SourceRegistry;

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Catalog to search (gutenberg or ncert)
    #[arg(long, default_value = "gutenberg")]
    pub source: BookSource,

    /// popular, ascending or descending; defaults to the source's own default
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Print unified records as JSON instead of text cards
    #[arg(long)]
    pub json: bool,

    /// Search terms, joined with spaces
    pub terms: Vec<String>,
}

pub async fn run(sources: SourceArgs, command: SearchCommand) -> Result<()> {
    let registry = SourceRegistry::from_config(
        build_client()?,
        &sources.gutenberg_url,
        sources.ncert_catalog,
    );
    let orchestrator = LoadOrchestrator::new(registry);
    let display = Mutex::new(TerminalDisplay::new());

    let request = LoadRequest {
        source: command.source,
        search_term: command.terms.join(" "),
        sort_order: command.sort,
    };

    let outcome = orchestrator.load(request, &display).await;
    let display = display.into_inner();

    match outcome {
        LoadOutcome::Rendered { .. } if command.json => print_json(&display.records()),
        LoadOutcome::Rendered { .. } => {
            print!("{}", display.render_text());
            Ok(())
        }
        LoadOutcome::NoResults if command.json => print_json(&display.records()),
        LoadOutcome::NoResults | LoadOutcome::Superseded => {
            if let Some(status) = display.status() {
                eprintln!("{}", status.text);
            }
            Ok(())
        }
        LoadOutcome::Failed(err) => bail!(err),
    }
}

pub(crate) fn print_json<T>(value: &T) -> Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
