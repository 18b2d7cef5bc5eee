use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::domain::property::{partition_by_status, select_rentable, PRIVATE_ISLAND};
use crate::market::pricing::DEFAULT_DURATIONS;
use crate::market::{build_price_table, find_comps, load_pool, FetchSettings, ListingCache, ListingFetcher};
use crate::torn::TornClient;
use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod market;
mod report;
mod torn;

#[cfg(test)]
mod tests;

/// Suggests rent prices for your Torn properties from current market listings.
#[derive(Debug, Parser)]
#[command(name = "torn-rentals", version)]
struct Cli {
    /// SQLite file holding the listing cache
    #[arg(long, default_value = "torn_rentals.sqlite3")]
    db: String,

    /// Property type to price (13 = Private Island)
    #[arg(long, default_value_t = PRIVATE_ISLAND)]
    property_type: i64,

    /// Listings requested per market page
    #[arg(long, default_value_t = market::fetcher::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Most market pages read per refresh
    #[arg(long, default_value_t = market::fetcher::DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Widest happiness gap still counted as a comp
    #[arg(long, default_value_t = market::comps::DEFAULT_BAND)]
    band: i64,

    /// Most comps used per property
    #[arg(long, default_value_t = market::comps::DEFAULT_LIMIT)]
    limit: usize,

    /// Ignore cached listings and fetch fresh ones
    #[arg(long)]
    refresh: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let db = Database::new(cli.db.clone());
    init_db(&db).context("database initialization failed")?;

    let client = TornClient::new(config.api_key, config.base_url)?;
    if !client.validate_key() {
        bail!("the Torn API key was rejected");
    }

    let owned = client
        .owned_properties()
        .context("could not load your properties")?;
    let rentable = select_rentable(&owned, cli.property_type);
    let (available, rented) = partition_by_status(&rentable);
    info!(
        owned = owned.len(),
        available = available.len(),
        rented = rented.len(),
        "properties loaded"
    );

    let cache = ListingCache::new(db, cli.property_type);

    // Nothing to price means no reason to hit the market.
    let pool = if available.is_empty() {
        Vec::new()
    } else {
        let fetcher = ListingFetcher::new(&client, cli.property_type);
        let settings = FetchSettings {
            page_size: cli.page_size,
            max_pages: cli.max_pages,
        };
        load_pool(&cache, &fetcher, settings, cli.refresh)
    };

    println!("Total: {} propert(ies) of type {}", rentable.len(), cli.property_type);

    if !available.is_empty() {
        println!("\n== Available to Rent ({}) ==", available.len());
        for p in &available {
            let comps = find_comps(&pool, p.happy, cli.band, cli.limit);
            let table = build_price_table(&comps, &DEFAULT_DURATIONS);
            println!("{}", report::render_available(p, &comps, &table));
        }
    }

    if !rented.is_empty() {
        println!("\n== Rented ({}) ==", rented.len());
        for p in &rented {
            println!("{}", report::render_rented(p));
        }
    }

    Ok(())
}
