use chrono::Local;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
        }
    }
}

/// One balance-affecting event. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub resulting_balance: Decimal,
    pub timestamp: String,
}

impl TransactionEntry {
    pub fn new(kind: TransactionKind, amount: Decimal, resulting_balance: Decimal) -> Self {
        Self {
            kind,
            amount,
            resulting_balance,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl core::fmt::Display for TransactionEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: ${:.2} on {} (Balance: ${:.2})",
            self.kind.label(),
            self.amount,
            self.timestamp,
            self.resulting_balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_renders_label_amount_and_balance() {
        let entry = TransactionEntry {
            kind: TransactionKind::Deposit,
            amount: Decimal::from(100),
            resulting_balance: Decimal::from(100),
            timestamp: "2026-01-02 10:30:00".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            "DEPOSIT: $100.00 on 2026-01-02 10:30:00 (Balance: $100.00)"
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Withdraw).unwrap(),
            "\"withdraw\""
        );
    }
}
