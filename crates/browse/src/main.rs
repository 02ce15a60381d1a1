//! Command-line listing browser.
//!
//! Loads a JSON catalog, evaluates one listing request and prints the
//! resulting page (items, facets, counts) as JSON on stdout.
//!
//! ```text
//! paintshop-browse --catalog catalog.json --view interior --query 'color=greens&sort=price-low'
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use paintshop_catalog::{CatalogSource, JsonFileCatalog};
use paintshop_discovery::{DiscoveryEngine, DiscoveryQuery, EngineConfig, FacetCountMode, ViewKind};

#[derive(Debug, Parser)]
#[command(name = "paintshop-browse")]
#[command(about = "Evaluate a paint catalog listing and print the page as JSON")]
struct Args {
    /// Catalog file: a JSON array of products
    #[arg(short, long)]
    catalog: PathBuf,

    /// Listing view: search, interior, exterior or category:<slug>
    #[arg(short, long, default_value = "search")]
    view: ViewKind,

    /// Listing state as a URL query string, e.g. 'q=sage&color=greens&page=2'
    #[arg(short, long, default_value = "")]
    query: String,

    /// Products per page (overrides PAINTSHOP_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<usize>,

    /// exclude-self or full-catalog (overrides PAINTSHOP_FACET_COUNTS)
    #[arg(long)]
    facet_counts: Option<FacetCountMode>,

    /// Print only the canonical query string for the request and exit
    #[arg(long)]
    link: bool,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::from_env();
        if let Some(size) = self.page_size {
            config = config.with_page_size(size);
        }
        if let Some(mode) = self.facet_counts {
            config = config.with_facet_count_mode(mode);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    paintshop_observability::init();

    let args = Args::parse();
    let request = DiscoveryQuery::from_query_string(&args.query);

    if args.link {
        println!("{}", request.to_query_string());
        return Ok(());
    }

    let catalog = JsonFileCatalog::new(args.catalog.clone())
        .load()
        .await
        .with_context(|| format!("failed to load catalog {}", args.catalog.display()))?;

    let engine = DiscoveryEngine::new(args.view.clone(), args.engine_config());
    let result = engine.evaluate(&catalog, &request);

    tracing::info!(
        view = %args.view,
        total = result.total_count,
        page = result.page,
        pages = result.display_total_pages(),
        "listing evaluated"
    );

    let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
    println!("{json}");
    Ok(())
}
