use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// `Arisefolio` - server-rendered personal portfolio site.
#[derive(Parser, Debug)]
#[command(name = "arisefolio")]
#[command(author = "Farras8")]
#[command(version = "0.1.0")]
#[command(about = "A server-rendered personal portfolio site.", long_about = None)]
pub struct Cli {
    /// Config file (default: ./config.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the site server
    Serve {
        /// Port to listen on (use 0 for a random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Audit the content catalog (unique ids, link health, media presence)
    Check {
        /// Catalog TOML to audit instead of the configured/embedded one
        #[arg(long)]
        content: Option<PathBuf>,
    },
}
