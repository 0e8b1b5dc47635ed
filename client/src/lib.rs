//! Roster Client - terminal front end for a remote user collection.
//!
//! Wires the engine's [`SyncController`](roster_engine::SyncController) to an
//! HTTP [`RemoteCollection`](roster_engine::RemoteCollection) and a
//! line-oriented console.

pub mod config;
pub mod console;
pub mod error;
pub mod http;
pub mod render;
pub mod terminal;

pub use config::Config;
pub use console::{Command, Console};
pub use error::{AppError, Result};
pub use http::HttpCollection;
pub use terminal::Prompter;

/// Run an interactive session on stdin/stdout against the configured
/// collection.
pub async fn run_stdio(config: Config) -> Result<()> {
    let remote = HttpCollection::new(config.api_url, config.timeout)?;
    let mut console = Console::new(remote, Prompter::stdio());
    console.run().await?;
    Ok(())
}
