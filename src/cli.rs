use clap::Parser;

use crate::cmd::Commands;

/// A simple CLI program to manage your users.
/// Users are stored in a local MongoDB collection.
#[derive(Parser, Debug)]
#[command(name = "users", version, about = "A simple CLI program to manage your users")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
