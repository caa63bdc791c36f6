use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Amount;

/// Description recorded on every withdrawal.
pub const WITHDRAW_DESCRIPTION: &str = "Withdraw";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money entering the account (deposits)
    Credit,
    /// Money leaving the account (withdrawals)
    Debit,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Credit => "credit",
            OperationKind::Debit => "debit",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry of an account statement.
/// Operations are immutable once appended; there is no edit or removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub description: String,
    #[serde(with = "crate::domain::json_amount")]
    pub amount: Amount,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl Operation {
    pub fn credit(description: impl Into<String>, amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            description: description.into(),
            amount,
            created_at,
            kind: OperationKind::Credit,
        }
    }

    pub fn debit(amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            description: WITHDRAW_DESCRIPTION.to_string(),
            amount,
            created_at,
            kind: OperationKind::Debit,
        }
    }

    /// Amount with the sign it contributes to the balance.
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            OperationKind::Credit => self.amount,
            OperationKind::Debit => -self.amount,
        }
    }

    /// Returns true if the operation was recorded on the given UTC calendar day.
    pub fn occurred_on(&self, date: NaiveDate) -> bool {
        self.created_at.date_naive() == date
    }
}
