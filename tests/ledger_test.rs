mod common;

use anyhow::Result;
use cashbook::application::AppError;
use cashbook::domain::{Ledger, LedgerError, OperationKind};
use common::{noon, parse_day, test_service};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn is_not_found(err: &AppError) -> bool {
    matches!(err, AppError::Ledger(LedgerError::AccountNotFound(_)))
}

#[tokio::test]
async fn test_deposit_withdraw_balance_scenario() -> Result<()> {
    let service = test_service();

    service.create_account("111".into(), "Alice".into()).await?;
    service.deposit("111", "Salary".into(), dec!(100)).await?;
    service.withdraw("111", dec!(30)).await?;

    assert_eq!(service.balance("111").await?, dec!(70));

    let statement = service.statement("111").await?;
    assert_eq!(statement.len(), 2);
    assert_eq!(statement[0].kind, OperationKind::Credit);
    assert_eq!(statement[1].kind, OperationKind::Debit);
    assert_eq!(statement[1].description, "Withdraw");

    Ok(())
}

#[tokio::test]
async fn test_withdraw_on_empty_account_fails() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;

    let err = service.withdraw("111", dec!(1)).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Ledger(LedgerError::InsufficientFunds { .. })
    ));
    assert_eq!(service.balance("111").await?, Decimal::ZERO);
    assert!(service.statement("111").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_overdraw_leaves_statement_unchanged() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;
    service.deposit("111", "Salary".into(), dec!(25.50)).await?;
    let before = service.statement("111").await?;

    assert!(service.withdraw("111", dec!(25.51)).await.is_err());

    assert_eq!(service.statement("111").await?, before);
    assert_eq!(service.balance("111").await?, dec!(25.50));

    Ok(())
}

#[tokio::test]
async fn test_deposit_round_trip() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;

    service.deposit("111", "Gift".into(), dec!(42.17)).await?;

    assert_eq!(service.balance("111").await?, dec!(42.17));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_registration() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;

    let err = service
        .create_account("111".into(), "Impostor".into())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Ledger(LedgerError::DuplicateAccount(ref id)) if id == "111"
    ));
    let accounts = service.list_accounts().await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].name, "Alice");

    Ok(())
}

#[tokio::test]
async fn test_unknown_customer() {
    let service = test_service();

    assert!(is_not_found(&service.get_account("404").await.unwrap_err()));
    assert!(is_not_found(&service.resolve_customer("404").await.unwrap_err()));
    assert!(is_not_found(&service.balance("404").await.unwrap_err()));
}

#[tokio::test]
async fn test_rename_account() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;

    let renamed = service.rename_account("111", "Alice Smith".into()).await?;

    assert_eq!(renamed.name, "Alice Smith");
    assert_eq!(service.get_account("111").await?.name, "Alice Smith");
    Ok(())
}

#[tokio::test]
async fn test_delete_account_only_removes_target() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;
    service.create_account("222".into(), "Bob".into()).await?;
    service.create_account("333".into(), "Carol".into()).await?;
    service.deposit("333", "Salary".into(), dec!(10)).await?;

    let id = service.resolve_customer("222").await?;
    service.delete_account(id).await?;

    assert!(is_not_found(&service.get_account("222").await.unwrap_err()));
    assert_eq!(service.get_account("111").await?.name, "Alice");
    assert_eq!(service.get_account("333").await?.name, "Carol");
    assert_eq!(service.balance("333").await?, dec!(10));
    assert_eq!(service.list_accounts().await.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_fiscal_id_reusable_after_delete() -> Result<()> {
    let service = test_service();
    let first = service.create_account("111".into(), "Alice".into()).await?;
    service.delete_account(first.id).await?;

    let second = service.create_account("111".into(), "Alice".into()).await?;

    assert_ne!(first.id, second.id);
    assert!(service.statement("111").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_statement_by_date() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.create_account("111", "Alice")?;
    ledger.deposit("111", "New year", dec!(10), noon("2024-01-01"))?;
    ledger.deposit("111", "Day after", dec!(20), noon("2024-01-02"))?;

    let service = cashbook::LedgerService::with_ledger(ledger);

    let first_day = service.statement_on("111", parse_day("2024-01-01")).await?;
    assert_eq!(first_day.len(), 1);
    assert_eq!(first_day[0].description, "New year");

    let other_day = service.statement_on("111", parse_day("2024-03-01")).await?;
    assert!(other_day.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_statement_today_includes_new_deposit() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;
    let operation = service.deposit("111", "Now".into(), dec!(5)).await?;

    let today = operation.created_at.date_naive();
    assert_eq!(service.statement_on("111", today).await?.len(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_withdrawals_never_overdraw() -> Result<()> {
    let service = test_service();
    service.create_account("111".into(), "Alice".into()).await?;
    service.deposit("111", "Salary".into(), dec!(100)).await?;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.withdraw("111", dec!(10)).await.is_ok()
        }));
    }

    let mut succeeded = 0;
    for handle in handles {
        if handle.await? {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 10);
    assert_eq!(service.balance("111").await?, Decimal::ZERO);
    Ok(())
}
