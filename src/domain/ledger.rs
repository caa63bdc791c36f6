use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use super::{
    Account, AccountId, Amount, Operation, is_valid_amount, validate_deposit, validate_withdrawal,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),

    #[error("Balance out of range")]
    BalanceOverflow,
}

/// The owning collection of all customer accounts.
///
/// Accounts are kept in creation order. Lookups go through the fiscal
/// identifier, which is unique across live accounts; removal goes through the
/// account id so that deleting one account can never touch another.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from existing accounts, rejecting duplicate fiscal ids
    /// and statements whose balance does not fit in an `Amount`.
    pub fn from_accounts(accounts: Vec<Account>) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for account in accounts {
            if ledger.contains(&account.fiscal_id) {
                return Err(LedgerError::DuplicateAccount(account.fiscal_id));
            }
            account.balance()?;
            ledger.accounts.push(account);
        }
        Ok(ledger)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, fiscal_id: &str) -> bool {
        self.accounts.iter().any(|a| a.fiscal_id == fiscal_id)
    }

    // ========================
    // Account registry
    // ========================

    pub fn create_account(
        &mut self,
        fiscal_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<&Account, LedgerError> {
        let fiscal_id = fiscal_id.into();
        if self.contains(&fiscal_id) {
            return Err(LedgerError::DuplicateAccount(fiscal_id));
        }

        self.accounts.push(Account::new(fiscal_id, name));
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn find_account(&self, fiscal_id: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .iter()
            .find(|a| a.fiscal_id == fiscal_id)
            .ok_or_else(|| LedgerError::AccountNotFound(fiscal_id.to_string()))
    }

    fn find_account_mut(&mut self, fiscal_id: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|a| a.fiscal_id == fiscal_id)
            .ok_or_else(|| LedgerError::AccountNotFound(fiscal_id.to_string()))
    }

    pub fn rename_account(
        &mut self,
        fiscal_id: &str,
        name: impl Into<String>,
    ) -> Result<&Account, LedgerError> {
        let account = self.find_account_mut(fiscal_id)?;
        account.name = name.into();
        Ok(account)
    }

    /// Remove the account with the given id and return it.
    pub fn delete_account(&mut self, id: AccountId) -> Result<Account, LedgerError> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;
        Ok(self.accounts.remove(index))
    }

    // ========================
    // Statement operations
    // ========================

    pub fn statement(&self, fiscal_id: &str) -> Result<Vec<Operation>, LedgerError> {
        Ok(self.find_account(fiscal_id)?.statement().to_vec())
    }

    pub fn statement_on(
        &self,
        fiscal_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Operation>, LedgerError> {
        Ok(self.find_account(fiscal_id)?.statement_on(date))
    }

    pub fn balance(&self, fiscal_id: &str) -> Result<Amount, LedgerError> {
        self.find_account(fiscal_id)?.balance()
    }

    /// Append a credit to the account's statement.
    /// Fails without touching the statement if the resulting balance would leave the decimal range.
    pub fn deposit(
        &mut self,
        fiscal_id: &str,
        description: impl Into<String>,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> Result<Operation, LedgerError> {
        let account = self.find_account_mut(fiscal_id)?;
        if !is_valid_amount(amount) {
            return Err(LedgerError::InvalidAmount(amount));
        }
        validate_deposit(account.statement(), amount)?;

        let operation = Operation::credit(description, amount, at);
        account.append(operation.clone());
        Ok(operation)
    }

    /// Append a debit to the account's statement.
    /// Fails without touching the statement if the balance does not cover `amount`.
    /// Any amount the balance covers is accepted, zero included.
    pub fn withdraw(
        &mut self,
        fiscal_id: &str,
        amount: Amount,
        at: DateTime<Utc>,
    ) -> Result<Operation, LedgerError> {
        let account = self.find_account_mut(fiscal_id)?;
        validate_withdrawal(account.statement(), amount)?;

        let operation = Operation::debit(amount, at);
        account.append(operation.clone());
        Ok(operation)
    }
}
