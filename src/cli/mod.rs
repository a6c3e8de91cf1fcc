//! Terminal front end: one-shot commands and an interactive shell

pub mod render;
pub mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::enums::{Category, ItemKind};

pub use render::OutputFormat;
pub use shell::{Flow, Shell};

/// In-memory library catalog: books, magazines and DVDs
#[derive(Parser, Debug)]
#[command(name = "library-catalog")]
#[command(version)]
#[command(about = "In-memory library catalog: books, magazines and DVDs")]
#[command(
    long_about = "Manage an in-memory library catalog. Without a subcommand an interactive shell is started; the catalog lives for the duration of the process."
)]
pub struct Cli {
    /// Configuration file (default: config/default plus CATALOG__* environment variables)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog items
    List {
        /// all, book, magazine, dvd, available, rented (or the Ukrainian labels)
        #[arg(short, long, default_value = "all")]
        filter: Category,
    },

    /// Search by id, title, author, publisher or director
    Search {
        /// Search text
        query: Vec<String>,
    },

    /// Show one item
    Show {
        /// Item id
        id: String,
    },

    /// Catalog statistics
    Stats,

    /// Interactive shell (default)
    Shell,
}

impl Commands {
    /// The shell command performing the same work, if any
    pub fn into_shell_command(self) -> Option<ShellCommand> {
        match self {
            Commands::List { filter } => Some(ShellCommand::List { category: Some(filter) }),
            Commands::Search { query } => Some(ShellCommand::Search { query }),
            Commands::Show { id } => Some(ShellCommand::Show { id }),
            Commands::Stats => Some(ShellCommand::Stats),
            Commands::Shell => None,
        }
    }
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// List items, optionally restricted to a category
    #[command(alias = "filter", alias = "ls")]
    List {
        /// all, book, magazine, dvd, available, rented
        category: Option<Category>,
    },

    /// Search by id, title, author, publisher or director
    #[command(alias = "find")]
    Search { query: Vec<String> },

    /// Show one item in detail
    Show { id: String },

    /// Add an item: add <book|magazine|dvd> <id> <title> <year> <field1> <field2>
    #[command(
        after_help = "Fields per kind:\n  book      <author> <pages>\n  magazine  <issue number> <publisher>\n  dvd       <director> <duration minutes>"
    )]
    Add {
        kind: ItemKind,
        id: String,
        title: String,
        year: String,
        field1: String,
        field2: String,
    },

    /// Edit an item: edit <id> <title> <year> <field1> <field2>
    Edit {
        id: String,
        title: String,
        year: String,
        field1: String,
        field2: String,
    },

    /// Remove an item that is not rented
    #[command(alias = "rm")]
    Remove { id: String },

    /// Rent an item to a user
    Rent {
        id: String,
        /// User name; several words are joined with spaces
        #[arg(required = true)]
        user: Vec<String>,
    },

    /// Return a rented item
    Return { id: String },

    /// Catalog statistics
    Stats,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
