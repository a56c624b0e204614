//! Hand-specified customers seeded verbatim alongside the random ones.
//!
//! File shape:
//! ```json
//! { "customers": [
//!     { "customer_id": "123456789", "password": "password",
//!       "first_name": "Foo", "last_name": "Bar",
//!       "checking_balance": 10000, "savings_balance": 0 }
//! ] }
//! ```
//! Overdraft balances and counters default to 0 when omitted.

use crate::{
    customer_generator::SeededCustomer,
    error::{SeedError, SeedResult},
    types::is_valid_customer_id,
};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct FixtureFile {
    customers: Vec<SeededCustomer>,
}

pub fn load_fixtures(path: &str) -> SeedResult<Vec<SeededCustomer>> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_fixtures(&content)
}

pub fn parse_fixtures(json: &str) -> SeedResult<Vec<SeededCustomer>> {
    let file: FixtureFile = serde_json::from_str(json)?;
    Ok(file.customers)
}

/// Reject fixtures that could not have come out of the generator's
/// invariants: malformed IDs, duplicate IDs, negative amounts.
pub fn validate_fixtures(
    fixtures: &[SeededCustomer],
    ids_in_db: &HashSet<String>,
) -> SeedResult<()> {
    let mut seen = HashSet::new();
    for f in fixtures {
        let r = &f.record;
        let invalid = |reason: &str| SeedError::InvalidFixture {
            customer_id: r.customer_id.clone(),
            reason: reason.to_string(),
        };

        if !is_valid_customer_id(&r.customer_id) {
            return Err(invalid("customer ID must be exactly 9 digits"));
        }
        if ids_in_db.contains(&r.customer_id) {
            return Err(invalid("customer ID already exists in the database"));
        }
        if !seen.insert(r.customer_id.as_str()) {
            return Err(invalid("customer ID appears twice in the fixture file"));
        }
        let amounts = [
            r.checking_balance,
            r.savings_balance,
            r.savings_overdraft_balance,
            r.checking_overdraft_balance,
            r.num_fraud_reversals,
            r.num_deposits_for_interest,
        ];
        if amounts.iter().any(|&a| a < 0) {
            return Err(invalid("balances and counters must be non-negative"));
        }
    }
    Ok(())
}
