mod commands;
mod server;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "couture")]
#[command(version, about = "Bilingual site generator and server for Parlison Code Couture", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Check site.toml and message tables for errors and gaps
    Validate {
        /// Path to site directory
        #[arg(default_value = "site")]
        path: PathBuf,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to site directory
        #[arg(default_value = "site")]
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Serve the site, loading content once at startup
    Serve {
        /// Path to site directory
        #[arg(default_value = "site")]
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
    },

    /// Render every page into a static output directory
    Build {
        /// Path to site directory
        #[arg(default_value = "site")]
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("couture=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Serve { path, port, host } => commands::serve::run(path, host, port).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "couture", &mut io::stdout());
            Ok(())
        }
    }
}
