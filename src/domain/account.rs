use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, TransactionEntry, TransactionKind};

/// The single modeled bank account. All business rules live here; the
/// persistence trigger is the session's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub holder_name: String,
    pub account_number: u64,
    pub password: String,
    pub balance: Decimal,
    pub transaction_history: Vec<TransactionEntry>,
}

impl Account {
    /// Validates the raw creation inputs and builds a fresh account with a
    /// zero balance and an empty history.
    pub fn create(holder_name: &str, account_number: &str, password: &str) -> Result<Self, Error> {
        let holder_name = holder_name.trim();
        let account_number = account_number.trim();
        let password = password.trim();

        if holder_name.is_empty() || account_number.is_empty() || password.is_empty() {
            return Err(Error::Validation("Please fill all fields!".to_string()));
        }
        if account_number.len() < 4 {
            return Err(Error::Validation(
                "Account number must be at least 4 digits!".to_string(),
            ));
        }
        if password.len() < 4 {
            return Err(Error::Validation(
                "Password must be at least 4 characters!".to_string(),
            ));
        }
        if !account_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation(
                "Account number must be numeric!".to_string(),
            ));
        }
        let account_number = account_number
            .parse::<u64>()
            .map_err(|_| Error::Validation("Account number is too long!".to_string()))?;

        Ok(Self {
            holder_name: holder_name.to_string(),
            account_number,
            password: password.to_string(),
            balance: Decimal::ZERO,
            transaction_history: Vec::new(),
        })
    }

    /// Pure credential check. A non-numeric account number input can never
    /// match the stored number, so it fails the same way a wrong one does.
    pub fn verify_credentials(&self, account_number: &str, password: &str) -> bool {
        account_number.trim().parse::<u64>() == Ok(self.account_number)
            && password == self.password
    }

    pub fn deposit(
        &mut self,
        account_number: &str,
        password: &str,
        amount: &str,
    ) -> Result<String, Error> {
        if !self.verify_credentials(account_number, password) {
            return Err(Error::WrongCredentials);
        }
        let amount = parse_amount(amount)?;

        self.balance += amount;
        self.transaction_history.push(TransactionEntry::new(
            TransactionKind::Deposit,
            amount,
            self.balance,
        ));

        Ok(format!(
            "Deposited ${:.2}. New balance: ${:.2}",
            amount, self.balance
        ))
    }

    pub fn withdraw(
        &mut self,
        account_number: &str,
        password: &str,
        amount: &str,
    ) -> Result<String, Error> {
        if !self.verify_credentials(account_number, password) {
            return Err(Error::WrongCredentials);
        }
        let amount = parse_amount(amount)?;
        if amount > self.balance {
            return Err(Error::InsufficientFunds);
        }

        self.balance -= amount;
        self.transaction_history.push(TransactionEntry::new(
            TransactionKind::Withdraw,
            amount,
            self.balance,
        ));

        Ok(format!(
            "Withdrew ${:.2}. New balance: ${:.2}",
            amount, self.balance
        ))
    }

    pub fn check_balance(&self, account_number: &str, password: &str) -> Result<String, Error> {
        if !self.verify_credentials(account_number, password) {
            return Err(Error::WrongCredentials);
        }
        Ok(format!("Current balance: ${:.2}", self.balance))
    }

    /// Renders the full history, one 1-indexed line per entry in insertion
    /// order. Uses a distinct denial message from the other operations.
    pub fn history_report(&self, account_number: &str, password: &str) -> Result<String, Error> {
        if !self.verify_credentials(account_number, password) {
            return Err(Error::AccessDenied);
        }
        if self.transaction_history.is_empty() {
            return Ok("No transactions yet".to_string());
        }

        let mut report = format!("Transaction History for: {}\n", self.holder_name);
        for (i, entry) in self.transaction_history.iter().enumerate() {
            report.push_str(&format!("\n{}. {}", i + 1, entry));
        }
        Ok(report)
    }

    /// Structural check applied to deserialized state. Stored data bypasses
    /// the creation gates, so a corrupted slot is rejected here instead of
    /// being silently accepted.
    pub fn validate_loaded(&self) -> Result<(), Error> {
        if self.balance < Decimal::ZERO {
            return Err(Error::CorruptState("negative balance".to_string()));
        }

        let mut running = Decimal::ZERO;
        for (i, entry) in self.transaction_history.iter().enumerate() {
            if entry.amount <= Decimal::ZERO {
                return Err(Error::CorruptState(format!(
                    "entry {} has a non-positive amount",
                    i + 1
                )));
            }
            running = match entry.kind {
                TransactionKind::Deposit => running + entry.amount,
                TransactionKind::Withdraw => running - entry.amount,
            };
            if running < Decimal::ZERO {
                return Err(Error::CorruptState(format!(
                    "entry {} drives the balance negative",
                    i + 1
                )));
            }
            if entry.resulting_balance != running {
                return Err(Error::CorruptState(format!(
                    "entry {} snapshot disagrees with the running balance",
                    i + 1
                )));
            }
        }

        if running != self.balance {
            return Err(Error::CorruptState(
                "stored balance does not match the transaction history".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_amount(input: &str) -> Result<Decimal, Error> {
    let amount = Decimal::from_str(input.trim()).map_err(|_| Error::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount);
    }
    Ok(amount)
}
