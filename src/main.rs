//! # users - record users in MongoDB from the command line
//!
//! A small CLI that stores task-like "user" records in a MongoDB collection
//! and lists them with their completion status.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a user
//! users add "Ada"
//!
//! # List every user (green = completed, yellow = pending)
//! users all
//! ```
//!
//! Records live in the `users` collection of the `user` database on
//! `mongodb://localhost:27017/`. Set `RUST_LOG=debug` to trace store calls.

use std::io;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod db;
pub mod error;
pub mod user;

use cli::Cli;
use cmd::*;
use config::StoreConfig;
use db::MongoStore;
use error::Result;
use user::validate_name;

fn main() {
    let _ = env_logger::builder().parse_default_env().try_init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Execute one command. The store is only contacted by commands that need it.
fn run(command: Commands) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let config = StoreConfig::default();

    match command {
        Commands::Add { args } => {
            let name = first_arg(args);
            validate_name(&name)?;
            let store = MongoStore::connect(&config)?;
            cmd_add(&store, &name, &mut stdout)
        }
        Commands::All => {
            let store = MongoStore::connect(&config)?;
            cmd_all(&store, &mut stdout)
        }
        Commands::Completions { shell } => {
            cmd_completions(shell, &mut stdout);
            Ok(())
        }
    }
}
