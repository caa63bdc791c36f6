use chrono::NaiveDate;

use super::{Amount, LedgerError, Operation};

/// Compute the balance of a statement.
/// Balance = sum of credits - sum of debits, folded from zero in order.
/// Fails with `BalanceOverflow` instead of panicking when the sum leaves the decimal range.
pub fn compute_balance(statement: &[Operation]) -> Result<Amount, LedgerError> {
    statement.iter().try_fold(Amount::ZERO, |balance, operation| {
        balance
            .checked_add(operation.signed_amount())
            .ok_or(LedgerError::BalanceOverflow)
    })
}

/// Operations recorded on the given UTC calendar day, in statement order.
pub fn operations_on(statement: &[Operation], date: NaiveDate) -> Vec<Operation> {
    statement
        .iter()
        .filter(|operation| operation.occurred_on(date))
        .cloned()
        .collect()
}

/// Validate that crediting `amount` leaves a representable balance.
pub fn validate_deposit(statement: &[Operation], amount: Amount) -> Result<(), LedgerError> {
    compute_balance(statement)?
        .checked_add(amount)
        .ok_or(LedgerError::BalanceOverflow)?;
    Ok(())
}

/// Validate that withdrawing `amount` keeps the statement's balance non-negative.
pub fn validate_withdrawal(statement: &[Operation], amount: Amount) -> Result<(), LedgerError> {
    let balance = compute_balance(statement)?;
    if balance < amount {
        return Err(LedgerError::InsufficientFunds {
            balance,
            requested: amount,
        });
    }
    balance
        .checked_sub(amount)
        .ok_or(LedgerError::BalanceOverflow)?;
    Ok(())
}
