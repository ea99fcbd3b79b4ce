pub mod errors;
pub mod orchestrator;
pub mod routes;
pub mod server;
pub mod state;

pub use orchestrator::{CatalogDisplay, LoadOrchestrator, LoadOutcome, LoadRequest, LoadState};
pub use server::{ServerConfig, serve};
