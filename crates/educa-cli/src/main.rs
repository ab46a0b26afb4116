//! CLI entry point - the composition root.
//!
//! Command dispatch routes to the `educa-axum` bootstrap; no direct
//! database or pool access happens here.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use educa_axum::ServerConfig;
use educa_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before reading any of them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            db_path,
            token,
            allow_origin,
        } => {
            let mut config = ServerConfig::with_defaults();
            config.port = port;
            if let Some(path) = db_path {
                config = config.with_db_path(path);
            }
            if let Some(token) = token {
                config = config.with_admin_token(token);
            }
            if !allow_origin.is_empty() {
                config = config.with_allowed_origins(allow_origin);
            }

            educa_axum::serve(config).await?;
        }
        Commands::Paths => {
            let root = educa_core::data_root()?;
            println!("Data directory:  {}", root.display());
            println!("Database file:   {}", educa_core::database_path()?.display());
        }
    }

    Ok(())
}
