//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Catalog command line configuration
#[derive(Debug, Parser)]
#[command(name = "catalog", about = "Product catalog manager", long_about = None)]
pub struct CatalogConfig {
    /// Fixture file with categories, colors and seed products
    #[arg(short, long, env = "CATALOG_FIXTURE", default_value = "fixtures/demo.yml")]
    pub fixture: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Action to run against the seeded catalog
    #[command(subcommand)]
    pub command: Command,
}

impl CatalogConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Catalog actions
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the product list
    List,

    /// Create a product through the "new product" form
    Add {
        /// Field values
        #[command(flatten)]
        fields: FieldArgs,

        /// Color to select (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Category name (defaults to the first category)
        #[arg(long)]
        category: Option<String>,
    },

    /// Edit the product at a list position through the "edit product" form
    Edit {
        /// List position, as shown by `list`
        index: usize,

        /// Field values to change
        #[command(flatten)]
        fields: FieldArgs,

        /// Color to toggle (repeatable)
        #[arg(long = "toggle-color")]
        colors: Vec<String>,

        /// Category name
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a product by id
    Delete {
        /// Product id
        id: String,
    },

    /// Validate field values without changing the catalog
    Validate {
        /// Field values
        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// Editable product fields
#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Product title
    #[arg(long)]
    pub title: Option<String>,

    /// Product description
    #[arg(long)]
    pub description: Option<String>,

    /// Product image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Product price
    #[arg(long)]
    pub price: Option<String>,
}
