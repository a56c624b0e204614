use super::SeedStore;
use crate::{
    customer_generator::{CustomerCredential, CustomerRecord},
    error::SeedResult,
    types::{AccountType, Cents},
};
use rusqlite::{params, OptionalExtension};

impl SeedStore {
    // ── Customer ──────────────────────────────────────────────────

    pub fn insert_customer(&self, c: &CustomerRecord) -> SeedResult<()> {
        self.conn.execute(
            "INSERT INTO Customers (
                CustomerID, FirstName, LastName, CheckingBalance, SavingsBalance,
                SavingsOverdraftBalance, CheckingOverdraftBalance,
                NumFraudReversals, NumDepositsForInterest
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                &c.customer_id,
                &c.first_name,
                &c.last_name,
                c.checking_balance,
                c.savings_balance,
                c.savings_overdraft_balance,
                c.checking_overdraft_balance,
                c.num_fraud_reversals,
                c.num_deposits_for_interest,
            ],
        )?;
        Ok(())
    }

    pub fn insert_password(&self, cred: &CustomerCredential) -> SeedResult<()> {
        self.conn.execute(
            "INSERT INTO Passwords (CustomerID, Password) VALUES (?1, ?2)",
            params![&cred.customer_id, &cred.password],
        )?;
        Ok(())
    }

    pub fn customer(&self, customer_id: &str) -> SeedResult<Option<CustomerRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT CustomerID, FirstName, LastName, CheckingBalance, SavingsBalance,
                        SavingsOverdraftBalance, CheckingOverdraftBalance,
                        NumFraudReversals, NumDepositsForInterest
                 FROM Customers WHERE CustomerID = ?1",
                params![customer_id],
                |row| {
                    Ok(CustomerRecord {
                        customer_id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        checking_balance: row.get(3)?,
                        savings_balance: row.get(4)?,
                        savings_overdraft_balance: row.get(5)?,
                        checking_overdraft_balance: row.get(6)?,
                        num_fraud_reversals: row.get(7)?,
                        num_deposits_for_interest: row.get(8)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    pub fn all_customers(&self) -> SeedResult<Vec<CustomerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT CustomerID, FirstName, LastName, CheckingBalance, SavingsBalance,
                    SavingsOverdraftBalance, CheckingOverdraftBalance,
                    NumFraudReversals, NumDepositsForInterest
             FROM Customers ORDER BY CustomerID ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CustomerRecord {
                customer_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                checking_balance: row.get(3)?,
                savings_balance: row.get(4)?,
                savings_overdraft_balance: row.get(5)?,
                checking_overdraft_balance: row.get(6)?,
                num_fraud_reversals: row.get(7)?,
                num_deposits_for_interest: row.get(8)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Read-back accessors ───────────────────────────────────────

    pub fn customer_password(&self, customer_id: &str) -> SeedResult<Option<String>> {
        let pw = self
            .conn
            .query_row(
                "SELECT Password FROM Passwords WHERE CustomerID = ?1",
                params![customer_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(pw)
    }

    pub fn customer_cash_balance(
        &self,
        customer_id: &str,
        account: AccountType,
    ) -> SeedResult<Option<Cents>> {
        let sql = match account {
            AccountType::Checking => "SELECT CheckingBalance FROM Customers WHERE CustomerID = ?1",
            AccountType::Savings => "SELECT SavingsBalance FROM Customers WHERE CustomerID = ?1",
        };
        self.customer_int(sql, customer_id)
    }

    pub fn customer_overdraft_balance(
        &self,
        customer_id: &str,
        account: AccountType,
    ) -> SeedResult<Option<Cents>> {
        let sql = match account {
            AccountType::Checking => {
                "SELECT CheckingOverdraftBalance FROM Customers WHERE CustomerID = ?1"
            }
            AccountType::Savings => {
                "SELECT SavingsOverdraftBalance FROM Customers WHERE CustomerID = ?1"
            }
        };
        self.customer_int(sql, customer_id)
    }

    pub fn customer_num_fraud_reversals(&self, customer_id: &str) -> SeedResult<Option<i64>> {
        self.customer_int(
            "SELECT NumFraudReversals FROM Customers WHERE CustomerID = ?1",
            customer_id,
        )
    }

    pub fn customer_num_deposits_for_interest(
        &self,
        customer_id: &str,
    ) -> SeedResult<Option<i64>> {
        self.customer_int(
            "SELECT NumDepositsForInterest FROM Customers WHERE CustomerID = ?1",
            customer_id,
        )
    }

    fn customer_int(&self, sql: &str, customer_id: &str) -> SeedResult<Option<i64>> {
        let value = self
            .conn
            .query_row(sql, params![customer_id], |row| row.get(0))
            .optional()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> CustomerRecord {
        CustomerRecord {
            customer_id: id.into(),
            first_name: "Ada".into(),
            last_name: "Okafor".into(),
            checking_balance: 123_400,
            savings_balance: 50_000,
            savings_overdraft_balance: 0,
            checking_overdraft_balance: 2_500,
            num_fraud_reversals: 1,
            num_deposits_for_interest: 2,
        }
    }

    #[test]
    fn insert_and_read_back_customer() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();
        store.insert_customer(&record("000000042")).unwrap();

        let back = store.customer("000000042").unwrap().unwrap();
        assert_eq!(back, record("000000042"));
        assert_eq!(
            store.customer_cash_balance("000000042", AccountType::Checking).unwrap(),
            Some(123_400)
        );
        assert_eq!(
            store.customer_overdraft_balance("000000042", AccountType::Checking).unwrap(),
            Some(2_500)
        );
        assert_eq!(store.customer_num_fraud_reversals("000000042").unwrap(), Some(1));
        assert_eq!(store.customer_num_deposits_for_interest("000000042").unwrap(), Some(2));
    }

    #[test]
    fn leading_zero_ids_survive_round_trip() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();
        store.insert_customer(&record("001234567")).unwrap();

        let ids = store.existing_customer_ids().unwrap();
        assert!(ids.contains("001234567"), "ids: {ids:?}");
    }

    #[test]
    fn password_lookup() {
        let store = SeedStore::in_memory().unwrap();
        store.create_schema().unwrap();
        store
            .insert_password(&CustomerCredential {
                customer_id: "123456789".into(),
                password: "aB3dE6gH9".into(),
            })
            .unwrap();

        assert_eq!(
            store.customer_password("123456789").unwrap().as_deref(),
            Some("aB3dE6gH9")
        );
        assert_eq!(store.customer_password("999999999").unwrap(), None);
    }
}
