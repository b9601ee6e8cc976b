//! Command-line surface of the `user-management` binary.

use clap::{Parser, Subcommand};

/// User Management - users and their addresses over REST
#[derive(Parser, Debug)]
#[command(name = "user-management")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Inspect or change the database schema
    Migrate(MigrateArgs),
}

/// Arguments for the serve command.
///
/// Unset values come from `SERVER_HOST` / `SERVER_PORT` or their defaults.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Apply every pending migration
    Up,
    /// Revert the latest migration
    Down,
    /// List migrations and whether each is applied
    Status,
    /// Drop both tables and rebuild the schema
    Fresh,
}
