//! seed-runner: provisions the Testudo Bank schema and seeds random customers.
//!
//! Usage:
//!   seed-runner --db testudo_bank.db --count 100
//!   seed-runner --config data/seed_config.json --seed 12345
//!   seed-runner --db testudo_bank.db --skip-schema --fixtures data/fixtures/customers.json

use anyhow::{Context, Result};
use bankseed_core::{
    config::SeedConfig,
    fixtures::load_fixtures,
    rng::RngBank,
    seeder::{clock_seed, SeedReport, Seeder},
    store::SeedStore,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = str_arg(&args, "--config").unwrap_or("./data/seed_config.json");
    let mut config = SeedConfig::load_or_default(config_path)?;

    if let Some(db) = str_arg(&args, "--db") {
        config.database.path = db.to_string();
    }
    if let Some(count) = parse_arg::<usize>(&args, "--count")? {
        config.num_customers_to_add = count;
    }
    if let Some(seed) = parse_arg::<u64>(&args, "--seed")? {
        config.seed = Some(seed);
    }
    if let Some(path) = str_arg(&args, "--fixtures") {
        config.fixtures_path = Some(path.to_string());
    }
    if args.iter().any(|a| a == "--skip-schema") {
        config.create_schema = false;
    }
    let json_output = args.iter().any(|a| a == "--json");

    let seed = config.seed.unwrap_or_else(clock_seed);
    let fixtures = match &config.fixtures_path {
        Some(path) => load_fixtures(path).with_context(|| format!("loading fixtures from {path}"))?,
        None => Vec::new(),
    };
    log::debug!("loaded {} fixture customers", fixtures.len());

    if !json_output {
        println!("Testudo Bank seed-runner");
        println!("  db:        {}", config.database.path);
        println!("  customers: {}", config.num_customers_to_add);
        println!("  fixtures:  {}", fixtures.len());
        println!("  seed:      {seed}");
        println!();
    }

    let store = SeedStore::open(&config.database.path)
        .with_context(|| format!("opening {}", config.database.path))?;
    let report = Seeder::new(&store, &config, RngBank::new(seed))
        .with_fixtures(fixtures)
        .run()?;
    let total_customers = store.customer_count()?;
    store.close()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, total_customers);
    }
    Ok(())
}

fn print_summary(report: &SeedReport, total_customers: i64) {
    let elapsed = report.finished_at - report.started_at;
    println!("=== SEED SUMMARY ===");
    println!("  requested:       {}", report.requested);
    println!("  inserted:        {}", report.inserted);
    println!("  collisions:      {}", report.collisions);
    println!("  fixtures:        {}", report.fixtures_inserted);
    println!("  total customers: {total_customers}");
    println!("  elapsed:         {} ms", elapsed.num_milliseconds());
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// A flag that is present must parse; a bad value is an error, never a fallback.
fn parse_arg<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    str_arg(args, flag)
        .map(|v| {
            v.parse::<T>()
                .with_context(|| format!("invalid value for {flag}: {v:?}"))
        })
        .transpose()
}
