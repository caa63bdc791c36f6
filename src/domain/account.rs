use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Amount, LedgerError, Operation, compute_balance, operations_on};

pub type AccountId = Uuid;

/// A customer account: identity plus its append-only statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Fiscal identifier of the customer, unique across the ledger
    #[serde(rename = "cpf", alias = "fiscal_id")]
    pub fiscal_id: String,
    pub name: String,
    pub id: AccountId,
    #[serde(default)]
    statement: Vec<Operation>,
}

impl Account {
    pub fn new(fiscal_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            fiscal_id: fiscal_id.into(),
            name: name.into(),
            id: Uuid::new_v4(),
            statement: Vec::new(),
        }
    }

    pub fn statement(&self) -> &[Operation] {
        &self.statement
    }

    pub fn statement_on(&self, date: NaiveDate) -> Vec<Operation> {
        operations_on(&self.statement, date)
    }

    pub fn balance(&self) -> Result<Amount, LedgerError> {
        compute_balance(&self.statement)
    }

    pub(crate) fn append(&mut self, operation: Operation) {
        self.statement.push(operation);
    }
}
