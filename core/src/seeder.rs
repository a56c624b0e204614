//! The seeding pipeline: schema, existing IDs, random customers, commit.

use crate::{
    config::SeedConfig,
    customer_generator::{CustomerGenerator, IdRegistry, SeededCustomer},
    error::SeedResult,
    fixtures::validate_fixtures,
    rng::RngBank,
    store::SeedStore,
    types::CustomerId,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What a run did, for the runner's summary.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub seed: u64,
    pub requested: usize,
    pub inserted: usize,
    pub collisions: usize,
    pub fixtures_inserted: usize,
    /// Randomly generated IDs in insertion order.
    pub inserted_ids: Vec<CustomerId>,
}

pub struct Seeder<'a> {
    store: &'a SeedStore,
    config: &'a SeedConfig,
    rng_bank: RngBank,
    fixtures: Vec<SeededCustomer>,
}

impl<'a> Seeder<'a> {
    pub fn new(store: &'a SeedStore, config: &'a SeedConfig, rng_bank: RngBank) -> Self {
        Self {
            store,
            config,
            rng_bank,
            fixtures: Vec::new(),
        }
    }

    pub fn with_fixtures(mut self, fixtures: Vec<SeededCustomer>) -> Self {
        self.fixtures = fixtures;
        self
    }

    /// Run the whole pipeline. The first SQL error aborts the run; inserts
    /// made before it are rolled back so the store can be reused.
    pub fn run(self) -> SeedResult<SeedReport> {
        let started_at = Utc::now();
        let seed = self.rng_bank.master_seed();
        log::info!("seeding with seed={seed}");

        if self.config.create_schema {
            self.store.create_schema()?;
        } else {
            log::info!("skipping schema creation");
        }

        let ids_in_db = self.store.existing_customer_ids()?;
        log::info!("{} customer IDs already in database", ids_in_db.len());
        validate_fixtures(&self.fixtures, &ids_in_db)?;
        let mut registry = IdRegistry::new(ids_in_db);

        self.store.begin()?;
        let (inserted_ids, collisions) = match self.insert_all(&mut registry) {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Err(rb) = self.store.rollback() {
                    log::error!("rollback after failed seed also failed: {rb}");
                }
                return Err(e);
            }
        };
        self.store.commit()?;
        log::info!(
            "committed {} random customers ({collisions} collisions)",
            inserted_ids.len()
        );

        Ok(SeedReport {
            started_at,
            finished_at: Utc::now(),
            seed,
            requested: self.config.num_customers_to_add,
            inserted: inserted_ids.len(),
            collisions,
            fixtures_inserted: self.fixtures.len(),
            inserted_ids,
        })
    }

    /// Fixtures first, then the random customers. Returns the random IDs
    /// inserted and the number of colliding draws.
    fn insert_all(&self, registry: &mut IdRegistry) -> SeedResult<(Vec<CustomerId>, usize)> {
        for fixture in &self.fixtures {
            self.insert(fixture)?;
            registry.record(fixture.record.customer_id.clone());
        }
        if !self.fixtures.is_empty() {
            log::info!("inserted {} fixture customers", self.fixtures.len());
        }

        let mut generator = CustomerGenerator::new(&self.rng_bank);
        let requested = self.config.num_customers_to_add;
        let mut inserted_ids = Vec::with_capacity(requested);
        let mut collisions = 0usize;

        for _ in 0..requested {
            let customer_id = generator.next_customer_id();

            // One draw per iteration; a taken ID just skips this slot.
            if registry.is_taken(&customer_id) {
                log::warn!("customer ID {customer_id} already in use, skipping");
                collisions += 1;
                continue;
            }

            let customer = generator.generate_customer(customer_id);
            self.insert(&customer)?;
            log::debug!(
                "inserted customer {} ({} {})",
                customer.record.customer_id,
                customer.record.first_name,
                customer.record.last_name
            );
            inserted_ids.push(customer.record.customer_id.clone());
            registry.record(customer.record.customer_id);
        }
        Ok((inserted_ids, collisions))
    }

    fn insert(&self, customer: &SeededCustomer) -> SeedResult<()> {
        self.store.insert_customer(&customer.record)?;
        self.store.insert_password(&customer.credential())?;
        Ok(())
    }
}

/// Seed to use when none is configured: the current time in nanoseconds.
pub fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or_else(|| now.timestamp() as u64)
}
