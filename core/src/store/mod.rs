//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! The seeder calls store methods; it never executes SQL directly.

use crate::error::SeedResult;
use rusqlite::{Connection, OpenFlags};
use std::collections::HashSet;

mod customer;

/// The banking schema, one CREATE TABLE per entry, in creation order.
pub const SCHEMA: &[(&str, &str)] = &[
    ("Customers", include_str!("../../../migrations/001_customers.sql")),
    ("Passwords", include_str!("../../../migrations/002_passwords.sql")),
    (
        "CheckingOverdraftLogs",
        include_str!("../../../migrations/003_checking_overdraft_logs.sql"),
    ),
    (
        "SavingsOverdraftLogs",
        include_str!("../../../migrations/004_savings_overdraft_logs.sql"),
    ),
    (
        "CheckingTransactionHistory",
        include_str!("../../../migrations/005_checking_transaction_history.sql"),
    ),
    (
        "SavingsTransactionHistory",
        include_str!("../../../migrations/006_savings_transaction_history.sql"),
    ),
    (
        "InternalTransferHistory",
        include_str!("../../../migrations/007_internal_transfer_history.sql"),
    ),
    (
        "TransferHistory",
        include_str!("../../../migrations/008_transfer_history.sql"),
    ),
    (
        "CryptoHoldings",
        include_str!("../../../migrations/009_crypto_holdings.sql"),
    ),
    (
        "CryptoHistory",
        include_str!("../../../migrations/010_crypto_history.sql"),
    ),
];

pub struct SeedStore {
    conn: Connection,
}

impl SeedStore {
    pub fn open(path: &str) -> SeedResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        log::debug!("opened database {path}");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SeedResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Issue every CREATE TABLE in order. Fails on the first table that
    /// already exists; nothing is dropped or altered.
    pub fn create_schema(&self) -> SeedResult<()> {
        for (table, ddl) in SCHEMA {
            log::debug!("creating table {table}");
            self.conn.execute_batch(ddl)?;
        }
        log::info!("created {} tables", SCHEMA.len());
        Ok(())
    }

    // ── Transaction ────────────────────────────────────────────

    pub fn begin(&self) -> SeedResult<()> {
        self.conn.execute_batch("BEGIN;")?;
        Ok(())
    }

    /// Commit the open transaction.
    pub fn commit(&self) -> SeedResult<()> {
        self.conn.execute_batch("COMMIT;")?;
        Ok(())
    }

    /// Discard everything since `begin`.
    pub fn rollback(&self) -> SeedResult<()> {
        self.conn.execute_batch("ROLLBACK;")?;
        Ok(())
    }

    /// Close the connection, surfacing any error instead of dropping it.
    pub fn close(self) -> SeedResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }

    // ── Introspection ──────────────────────────────────────────

    pub fn table_names(&self) -> SeedResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name ASC",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Every CustomerID currently in the Customers table.
    pub fn existing_customer_ids(&self) -> SeedResult<HashSet<String>> {
        let mut stmt = self.conn.prepare("SELECT CustomerID FROM Customers")?;
        let ids = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        // CustomerID is nullable; a NULL can never collide with a generated ID.
        Ok(ids.into_iter().flatten().collect())
    }

    pub fn customer_count(&self) -> SeedResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Customers", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn password_count(&self) -> SeedResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM Passwords", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ddl(table: &str) -> &'static str {
        SCHEMA
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, ddl)| *ddl)
            .unwrap_or_else(|| panic!("no DDL for {table}"))
    }

    #[test]
    fn check_constraints_are_exact() {
        assert!(ddl("CheckingTransactionHistory").contains(
            "Action varchar(255) CHECK (Action IN ('Deposit', 'Withdraw', 'CheckingTransferSend', 'SavingsTransferReceive', 'TransferSend', 'TransferReceive', 'CryptoBuy', 'CryptoSell')),"
        ));
        assert!(ddl("SavingsTransactionHistory").contains(
            "Action varchar(255) CHECK (Action IN ('Deposit', 'Withdraw', 'SavingsTransferSend', 'CheckingTransferReceive', 'TransferSend', 'TransferReceive', 'CryptoBuy', 'CryptoSell')),"
        ));
        assert!(ddl("InternalTransferHistory")
            .contains("TransferFrom varchar(255) CHECK (TransferFrom IN ('checking', 'savings')),"));
        assert!(ddl("InternalTransferHistory")
            .contains("TransferTo varchar(255) CHECK (TransferTo IN ('checking', 'savings')),"));
        assert!(ddl("TransferHistory").contains(
            "SenderAccountType varchar(255) CHECK (SenderAccountType IN ('checking', 'savings')),"
        ));
        assert!(ddl("TransferHistory").contains(
            "RecipientAccountType varchar(255) CHECK (RecipientAccountType IN ('checking', 'savings')),"
        ));
        assert!(ddl("CryptoHistory").contains("Action varchar(255) CHECK (Action IN ('Buy', 'Sell')),"));
        assert!(ddl("CryptoHistory").contains("CryptoAmount decimal(30,18)"));
        assert!(ddl("CryptoHoldings").contains("CryptoAmount decimal(30,18)"));
    }

    #[test]
    fn column_lists_are_exact() {
        let squash = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(
            squash(ddl("Customers")),
            "CREATE TABLE Customers ( CustomerID varchar(255), FirstName varchar(255), \
             LastName varchar(255), CheckingBalance int, SavingsBalance int, \
             SavingsOverdraftBalance int, CheckingOverdraftBalance int, \
             NumFraudReversals int, NumDepositsForInterest int );"
        );
        assert_eq!(
            squash(ddl("Passwords")),
            "CREATE TABLE Passwords ( CustomerID varchar(255), Password varchar(255) );"
        );
        for table in ["CheckingOverdraftLogs", "SavingsOverdraftLogs"] {
            assert_eq!(
                squash(ddl(table)),
                format!(
                    "CREATE TABLE {table} ( CustomerID varchar(255), Timestamp DATETIME, \
                     DepositAmt int, OldOverBalance int, NewOverBalance int );"
                )
            );
        }
    }

    #[test]
    fn check_constraints_are_enforced() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();
        let bad = store.conn.execute(
            "INSERT INTO CryptoHistory (CustomerID, Action) VALUES ('123456789', 'Hold')",
            [],
        );
        assert!(bad.is_err());
        store
            .conn
            .execute(
                "INSERT INTO CryptoHistory (CustomerID, Action) VALUES ('123456789', 'Buy')",
                [],
            )
            .unwrap();
    }

    #[test]
    fn null_customer_ids_are_skipped() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();
        store
            .conn
            .execute("INSERT INTO Customers (FirstName) VALUES ('x')", [])
            .unwrap();
        store
            .conn
            .execute("INSERT INTO Customers (CustomerID) VALUES ('000000001')", [])
            .unwrap();

        let ids = store.existing_customer_ids().unwrap();
        assert_eq!(ids, HashSet::from(["000000001".to_string()]));
    }

    #[test]
    fn rollback_discards_inserts() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();
        store.begin().unwrap();
        store
            .conn
            .execute("INSERT INTO Customers (CustomerID) VALUES ('000000001')", [])
            .unwrap();
        store.rollback().unwrap();

        assert_eq!(store.customer_count().unwrap(), 0);
        store.begin().unwrap();
        store.commit().unwrap();
    }

    #[test]
    fn schema_lists_ten_distinct_tables() {
        let names: HashSet<_> = SCHEMA.iter().map(|(t, _)| *t).collect();
        assert_eq!(names.len(), 10);
        for (table, ddl) in SCHEMA {
            assert!(
                ddl.contains(&format!("CREATE TABLE {table} (")),
                "DDL for {table} does not create {table}"
            );
        }
    }

    #[test]
    fn create_schema_creates_every_table() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();

        let mut expected: Vec<String> = SCHEMA.iter().map(|(t, _)| t.to_string()).collect();
        expected.sort();
        assert_eq!(store.table_names().unwrap(), expected);
    }

    #[test]
    fn empty_customers_table_has_no_ids() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();
        assert!(store.existing_customer_ids().unwrap().is_empty());
        assert_eq!(store.customer_count().unwrap(), 0);
    }
}
