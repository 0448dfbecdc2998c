use clap::{Parser, Subcommand};
use shelf::model::Locale;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version)]
#[command(about = "Keep track of the books on your shelf", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file holding the books (created if missing)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Language for book labels (en, ru)
    #[arg(long, global = true, value_name = "LANG")]
    pub lang: Option<Locale>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        year: String,
    },

    /// Delete a book by ID
    #[command(alias = "rm")]
    Delete { id: String },

    /// Search by title, author and/or year (all filters optional)
    #[command(alias = "s")]
    Search {
        /// Title substring
        #[arg(short, long, default_value = "")]
        title: String,

        /// Author substring
        #[arg(short, long, default_value = "")]
        author: String,

        /// Exact year
        #[arg(short, long, default_value = "")]
        year: String,
    },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Change a book's status (in-stock|issued|0|1)
    Status { id: String, status: String },

    /// Interactive menu (the default)
    Menu,

    /// Get or set configuration (data-file, locale)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
