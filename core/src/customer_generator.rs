use crate::{
    config::{MAX_BALANCE_DOLLARS, MIN_BALANCE_DOLLARS},
    name_generator::NameGenerator,
    rng::{RngBank, StreamRng, StreamSlot},
    types::{Cents, CustomerId, CUSTOMER_ID_LEN, PASSWORD_LEN},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const DIGITS: &[u8] = b"0123456789";
const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// One row of the Customers table, fields in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub checking_balance: Cents,
    pub savings_balance: Cents,
    #[serde(default)]
    pub savings_overdraft_balance: Cents,
    #[serde(default)]
    pub checking_overdraft_balance: Cents,
    #[serde(default)]
    pub num_fraud_reversals: i64,
    #[serde(default)]
    pub num_deposits_for_interest: i64,
}

/// One row of the Passwords table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCredential {
    pub customer_id: CustomerId,
    pub password: String,
}

/// A customer plus the password that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededCustomer {
    #[serde(flatten)]
    pub record: CustomerRecord,
    pub password: String,
}

impl SeededCustomer {
    pub fn credential(&self) -> CustomerCredential {
        CustomerCredential {
            customer_id: self.record.customer_id.clone(),
            password: self.password.clone(),
        }
    }
}

/// Random 9-digit customer ID. Leading zeros are allowed.
pub fn generate_customer_id(rng: &mut StreamRng) -> CustomerId {
    rng.string_from(DIGITS, CUSTOMER_ID_LEN)
}

/// Random 9-character alphanumeric password, stored in plain text.
pub fn generate_password(rng: &mut StreamRng) -> String {
    rng.string_from(PASSWORD_ALPHABET, PASSWORD_LEN)
}

/// Whole-dollar balance in [100, 10000] dollars, returned in cents.
pub fn generate_balance(rng: &mut StreamRng) -> Cents {
    rng.range_inclusive(MIN_BALANCE_DOLLARS, MAX_BALANCE_DOLLARS) * 100
}

/// IDs that must not be handed out again: those already in the
/// database when the run started, and those inserted during the run.
#[derive(Debug, Default)]
pub struct IdRegistry {
    ids_in_db: HashSet<CustomerId>,
    ids_just_added: HashSet<CustomerId>,
}

impl IdRegistry {
    pub fn new(ids_in_db: HashSet<CustomerId>) -> Self {
        Self {
            ids_in_db,
            ids_just_added: HashSet::new(),
        }
    }

    pub fn is_taken(&self, id: &str) -> bool {
        self.ids_in_db.contains(id) || self.ids_just_added.contains(id)
    }

    pub fn record(&mut self, id: CustomerId) {
        self.ids_just_added.insert(id);
    }

    pub fn ids_just_added(&self) -> &HashSet<CustomerId> {
        &self.ids_just_added
    }
}

/// Owns the per-field RNG streams used to build random customers.
pub struct CustomerGenerator {
    id_rng: StreamRng,
    name_rng: StreamRng,
    balance_rng: StreamRng,
    password_rng: StreamRng,
}

impl CustomerGenerator {
    pub fn new(bank: &RngBank) -> Self {
        Self {
            id_rng: bank.for_stream(StreamSlot::CustomerId),
            name_rng: bank.for_stream(StreamSlot::Name),
            balance_rng: bank.for_stream(StreamSlot::Balance),
            password_rng: bank.for_stream(StreamSlot::Password),
        }
    }

    pub fn next_customer_id(&mut self) -> CustomerId {
        generate_customer_id(&mut self.id_rng)
    }

    /// Build the rest of a customer around an accepted ID.
    /// Overdraft balances and counters always start at zero.
    pub fn generate_customer(&mut self, customer_id: CustomerId) -> SeededCustomer {
        let (first_name, last_name) = NameGenerator::generate(&mut self.name_rng);
        let checking_balance = generate_balance(&mut self.balance_rng);
        let savings_balance = generate_balance(&mut self.balance_rng);
        let password = generate_password(&mut self.password_rng);

        SeededCustomer {
            record: CustomerRecord {
                customer_id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                checking_balance,
                savings_balance,
                savings_overdraft_balance: 0,
                checking_overdraft_balance: 0,
                num_fraud_reversals: 0,
                num_deposits_for_interest: 0,
            },
            password,
        }
    }
}
