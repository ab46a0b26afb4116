//! Main commands enum and subcommand arguments.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands for the educa platform tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, env = "EDUCA_PORT", default_value = "9480")]
        port: u16,

        /// Path to the SQLite database file (defaults to the user data dir)
        #[arg(long, env = "EDUCA_DB_PATH")]
        db_path: Option<PathBuf>,

        /// Administrator bearer token
        #[arg(long, env = "EDUCA_ADMIN_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Allowed CORS origin (repeatable; default allows all origins)
        #[arg(long = "allow-origin")]
        allow_origin: Vec<String>,
    },

    /// Show resolved paths for the educa data directories
    Paths,
}
