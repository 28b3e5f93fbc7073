//! CLI module - Command-line interface for medisearch
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// medisearch - Hospital record search service
/// Searches patients, medications, resources and staff
#[derive(Parser)]
#[command(name = "medisearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    #[command(alias = "daemon", alias = "-d", alias = "--daemon")]
    Serve,

    /// Search every category
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Search one category, optionally filtered
    #[command(alias = "c")]
    Category {
        /// Category name (patients, medications, resources, staff)
        name: String,
        /// Search query; omit to list every record
        query: Vec<String>,
        /// Exact-match filter, repeatable
        #[arg(long = "filter", short = 'f', value_name = "FIELD=VALUE")]
        filters: Vec<String>,
    },

    /// Show filterable fields, or the values present for one field
    #[command(alias = "f")]
    Filters {
        /// Category name
        category: String,
        /// Field to list values for
        field: Option<String>,
    },

    /// Search as you type: one query per line, debounced
    #[command(alias = "i")]
    Interactive,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
