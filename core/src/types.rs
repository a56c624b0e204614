//! Shared primitive types used across the seeder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 9-digit customer identifier, kept as a string so leading zeros survive.
pub type CustomerId = String;

/// A monetary amount in pennies.
pub type Cents = i64;

/// Length of every customer ID and every generated password.
pub const CUSTOMER_ID_LEN: usize = 9;
pub const PASSWORD_LEN: usize = 9;

/// The two cash accounts each customer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    /// The value accepted by the transfer tables' CHECK constraints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when `id` has the shape of a customer ID: exactly 9 ASCII digits.
pub fn is_valid_customer_id(id: &str) -> bool {
    id.len() == CUSTOMER_ID_LEN && id.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_shape() {
        assert!(is_valid_customer_id("012345678"));
        assert!(!is_valid_customer_id("12345678"));
        assert!(!is_valid_customer_id("1234567890"));
        assert!(!is_valid_customer_id("12345678a"));
    }

    #[test]
    fn account_type_matches_check_constraint_values() {
        assert_eq!(AccountType::Checking.to_string(), "checking");
        assert_eq!(AccountType::Savings.as_str(), "savings");
    }
}
