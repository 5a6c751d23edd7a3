//! Command implementations for the CLI interface.
//!
//! Each handler takes the store it needs and the writer to print to, and
//! returns its failure to the caller instead of exiting.

use std::io::Write;

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::db::*;
use crate::error::Result;

/// Printed by `all` when the collection is empty.
pub const NOTHING_HINT: &str = "Nothing to see here.\nRun `add 'user'` to add a user";

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Add a user to the list.
    #[command(visible_alias = "a")]
    Add {
        /// Name of the user. Only the first argument is used.
        #[arg(num_args = 0.., trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// List all users.
    #[command(visible_alias = "l")]
    All,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// The name `add` was given: its first argument, or empty when there is none.
pub fn first_arg(args: Vec<String>) -> String {
    args.into_iter().next().unwrap_or_default()
}

/// Insert a user named `name` and report its id.
pub fn cmd_add(store: &impl UserStore, name: &str, out: &mut impl Write) -> Result<()> {
    let user = create_user(store, name)?;
    writeln!(out, "Added user {}", user.id)?;
    Ok(())
}

/// Print every user, or a hint when there are none.
pub fn cmd_all(store: &impl UserStore, out: &mut impl Write) -> Result<()> {
    match list_users(store)? {
        Listing::Empty => writeln!(out, "{NOTHING_HINT}")?,
        Listing::Users(users) => print_users(out, &users)?,
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell, out: &mut impl Write) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, out);
}
