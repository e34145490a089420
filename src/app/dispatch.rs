use anyhow::Result;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::gateway::run_gateway;

use super::check::run_check;

/// Route the parsed command line onto the matching subsystem.
pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            run_gateway(config).await
        }
        Commands::Check { content } => {
            if let Some(path) = content {
                config.site.content_path = Some(path);
            }
            run_check(&config)
        }
    }
}
