use std::path::Path;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::{
    Account, AccountId, Amount, Ledger, LedgerError, Operation, format_amount,
};
use crate::storage::Snapshot;

use super::AppError;

/// Application service providing high-level operations for the ledger.
/// This is the primary interface for any client (HTTP, CLI, tests).
///
/// Reads share the lock; every mutation holds the write guard for its whole
/// check-then-append sequence, so concurrent withdrawals on the same account
/// cannot both pass the balance check.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: RwLock<Ledger>,
}

impl LedgerService {
    /// Create a service over an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service over an existing ledger.
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RwLock::new(ledger),
        }
    }

    /// Restore a service from a snapshot file, starting empty if it does not exist.
    pub async fn restore(path: &Path) -> Result<Self, AppError> {
        match Snapshot::load(path).await? {
            Some(snapshot) => {
                let ledger = snapshot.into_ledger()?;
                info!(path = %path.display(), accounts = ledger.len(), "restored ledger snapshot");
                Ok(Self::with_ledger(ledger))
            }
            None => {
                info!(path = %path.display(), "no snapshot found, starting with an empty ledger");
                Ok(Self::new())
            }
        }
    }

    /// Write the current ledger to a snapshot file. Returns the number of accounts written.
    pub async fn save_snapshot(&self, path: &Path) -> Result<usize, AppError> {
        let snapshot = self.snapshot().await;
        let count = snapshot.accounts.len();
        snapshot.save(path).await?;
        info!(path = %path.display(), accounts = count, "saved ledger snapshot");
        Ok(count)
    }

    pub async fn snapshot(&self) -> Snapshot {
        let ledger = self.ledger.read().await;
        Snapshot::new(ledger.accounts().to_vec())
    }

    // ========================
    // Account operations
    // ========================

    /// Register a new customer account.
    pub async fn create_account(&self, fiscal_id: String, name: String) -> Result<Account, AppError> {
        let mut ledger = self.ledger.write().await;
        let account = ledger.create_account(fiscal_id, name)?.clone();
        info!(account_id = %account.id, "account created");
        Ok(account)
    }

    /// Resolve a fiscal identifier to the id of a live account.
    pub async fn resolve_customer(&self, fiscal_id: &str) -> Result<AccountId, AppError> {
        let ledger = self.ledger.read().await;
        Ok(ledger.find_account(fiscal_id)?.id)
    }

    /// Get an account with its full statement.
    pub async fn get_account(&self, fiscal_id: &str) -> Result<Account, AppError> {
        let ledger = self.ledger.read().await;
        Ok(ledger.find_account(fiscal_id)?.clone())
    }

    pub async fn list_accounts(&self) -> Vec<Account> {
        self.ledger.read().await.accounts().to_vec()
    }

    pub async fn rename_account(&self, fiscal_id: &str, name: String) -> Result<Account, AppError> {
        let mut ledger = self.ledger.write().await;
        let account = ledger.rename_account(fiscal_id, name)?.clone();
        info!(account_id = %account.id, "account renamed");
        Ok(account)
    }

    /// Delete an account by id. Other accounts are left untouched.
    pub async fn delete_account(&self, id: AccountId) -> Result<Account, AppError> {
        let mut ledger = self.ledger.write().await;
        let account = ledger.delete_account(id)?;
        info!(account_id = %account.id, "account deleted");
        Ok(account)
    }

    // ========================
    // Statement operations
    // ========================

    pub async fn statement(&self, fiscal_id: &str) -> Result<Vec<Operation>, AppError> {
        Ok(self.ledger.read().await.statement(fiscal_id)?)
    }

    /// Operations recorded on the given UTC calendar day.
    pub async fn statement_on(
        &self,
        fiscal_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Operation>, AppError> {
        Ok(self.ledger.read().await.statement_on(fiscal_id, date)?)
    }

    pub async fn balance(&self, fiscal_id: &str) -> Result<Amount, AppError> {
        Ok(self.ledger.read().await.balance(fiscal_id)?)
    }

    /// Record a deposit timestamped now.
    pub async fn deposit(
        &self,
        fiscal_id: &str,
        description: String,
        amount: Amount,
    ) -> Result<Operation, AppError> {
        let mut ledger = self.ledger.write().await;
        match ledger.deposit(fiscal_id, description, amount, Utc::now()) {
            Ok(operation) => {
                info!(amount = %format_amount(amount), "deposit recorded");
                Ok(operation)
            }
            Err(err @ LedgerError::BalanceOverflow) => {
                warn!(%err, "deposit rejected");
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Record a withdrawal timestamped now, unless it would overdraw the account.
    pub async fn withdraw(&self, fiscal_id: &str, amount: Amount) -> Result<Operation, AppError> {
        let mut ledger = self.ledger.write().await;
        match ledger.withdraw(fiscal_id, amount, Utc::now()) {
            Ok(operation) => {
                info!(amount = %format_amount(amount), "withdrawal completed");
                Ok(operation)
            }
            Err(err @ LedgerError::InsufficientFunds { .. }) => {
                warn!(%err, "withdrawal rejected");
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
