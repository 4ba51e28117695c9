//! Catalog client CLI
//!
//! Exercises the data layer against a live (or locally mocked) catalog API.

use std::path::PathBuf;
use std::sync::Arc;

use catalog_client::{
    client::CatalogClient,
    config::resolve_config,
    error::Result,
    models::{Component, Difficulty, Filter, Language, SortOrder},
};
use clap::{Parser, Subcommand};

/// catalog - Component Catalog Client
#[derive(Parser, Debug)]
#[command(name = "catalog", version, about = "UI Component Catalog Client")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "catalog.toml")]
    config: PathBuf,

    /// Override the API base URL (beats file and CATALOG_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog components
    List {
        /// Category slug
        #[arg(long)]
        category: Option<String>,

        /// Framework (html|nextjs|vue|astro|svelte)
        #[arg(long)]
        language: Option<Language>,

        /// Difficulty (beginner|intermediate|advanced)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Tags, repeatable
        #[arg(long)]
        tag: Vec<String>,

        /// 1-based page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        limit: Option<u32>,

        /// Sort field (server-defined)
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Fetch a single component by id
    Get {
        /// Component id (stable slug)
        id: String,

        /// Restrict to one framework implementation
        #[arg(long)]
        language: Option<Language>,

        /// Print the full component as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog
    Search {
        /// Search query
        query: String,

        /// Category slug
        #[arg(long)]
        category: Option<String>,

        /// Result limit
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Warm the cache for a set of categories
    Prefetch {
        /// Categories to warm (defaults to the configured list)
        categories: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Show cache behavior for a repeated listing
    Cache {
        /// Category slug to list twice
        #[arg(long)]
        category: Option<String>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_component_line(component: &Component) {
    let languages: Vec<&str> = component
        .languages()
        .into_iter()
        .map(|language| language.as_str())
        .collect();
    println!(
        "{:<24} {:<12} {:<12} [{}]",
        component.component_id,
        component.category,
        component.difficulty.as_str(),
        languages.join(", ")
    );
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Catalog client starting...");

    let config = resolve_config(Some(&cli.config), cli.api_url.as_deref());
    log::info!("Using API base {}", config.base_url);

    let config = Arc::new(config);
    let client = Arc::new(CatalogClient::new(Arc::clone(&config))?);

    match cli.command {
        Command::List {
            category,
            language,
            difficulty,
            tag,
            page,
            limit,
            sort_by,
            desc,
        } => {
            let filter = Filter {
                category,
                language,
                difficulty,
                tags: if tag.is_empty() { None } else { Some(tag) },
                page,
                limit,
                sort_by,
                sort_order: desc.then_some(SortOrder::Desc),
                search: None,
            };

            let listing = client.list_components(&filter).await?;
            for component in &listing.items {
                print_component_line(component);
            }
            if let Some(pagination) = listing.pagination {
                log::info!(
                    "Page {}/{} ({} total, limit {})",
                    pagination.current,
                    pagination.pages,
                    pagination.total,
                    pagination.limit
                );
            }
        }

        Command::Get { id, language, json } => {
            let component = client.get_component(&id, language).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&component)?);
            } else {
                println!("{} - {}", component.name, component.description);
                for implementation in &component.frameworks {
                    println!(
                        "  {}: {} dependency(ies)",
                        implementation.language.as_str(),
                        implementation.dependencies.len()
                    );
                }
            }
        }

        Command::Search {
            query,
            category,
            limit,
        } => {
            let filter = Filter {
                category,
                limit,
                ..Filter::default()
            };
            let results = client.search_components(&query, &filter).await?;
            log::info!("{} result(s) for '{}'", results.len(), query);
            for component in &results {
                print_component_line(component);
            }
        }

        Command::Prefetch { categories } => {
            let categories = if categories.is_empty() {
                config.prefetch_categories.clone()
            } else {
                categories
            };
            let warmed = client.prefetch(&categories).await;
            log::info!("Warmed {}/{} categories", warmed, categories.len());
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Configuration is valid");
        }

        Command::Cache { category } => {
            let filter = Filter {
                category,
                limit: Some(config.prefetch_limit),
                ..Filter::default()
            };

            client.list_components(&filter).await?;
            let first = client.cache_stats();
            client.list_components(&filter).await?;
            let second = client.cache_stats();

            log::info!(
                "Entries after first call: {}, after repeat: {} (repeat served from cache)",
                first.size,
                second.size
            );
            for key in second.keys {
                log::info!("  key {key}");
            }
        }
    }

    Ok(())
}
