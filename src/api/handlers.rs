use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::application::LedgerService;
use crate::domain::{Account, Operation};

use super::dto::{
    BalanceResponse, CreateAccountRequest, DepositRequest, MessageResponse, StatementDateQuery,
    UpdateAccountRequest, WithdrawRequest,
};
use super::error::ApiError;
use super::extract::{Customer, JsonBody};

type ApiResult<T> = Result<T, ApiError>;

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn create_account(
    State(service): State<Arc<LedgerService>>,
    JsonBody(body): JsonBody<CreateAccountRequest>,
) -> ApiResult<StatusCode> {
    service.create_account(body.cpf, body.name).await?;
    Ok(StatusCode::CREATED)
}

pub async fn get_account(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
) -> ApiResult<Json<Account>> {
    Ok(Json(service.get_account(&customer.fiscal_id).await?))
}

pub async fn update_account(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
    JsonBody(body): JsonBody<UpdateAccountRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    service.rename_account(&customer.fiscal_id, body.name).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::CUSTOMER_UPDATED)))
}

pub async fn delete_account(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
) -> ApiResult<StatusCode> {
    service.delete_account(customer.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_statement(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
) -> ApiResult<Json<Vec<Operation>>> {
    Ok(Json(service.statement(&customer.fiscal_id).await?))
}

pub async fn get_statement_by_date(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
    Query(query): Query<StatementDateQuery>,
) -> ApiResult<Json<Vec<Operation>>> {
    let date = query
        .date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
        .ok_or(ApiError::InvalidDate)?;

    Ok(Json(service.statement_on(&customer.fiscal_id, date).await?))
}

pub async fn deposit(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
    JsonBody(body): JsonBody<DepositRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    service
        .deposit(&customer.fiscal_id, body.description, body.amount)
        .await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::DEPOSIT_RECORDED)))
}

pub async fn withdraw(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
    JsonBody(body): JsonBody<WithdrawRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    service.withdraw(&customer.fiscal_id, body.amount).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::WITHDRAWAL_COMPLETED)))
}

pub async fn get_balance(
    State(service): State<Arc<LedgerService>>,
    customer: Customer,
) -> ApiResult<Json<BalanceResponse>> {
    Ok(Json(BalanceResponse(service.balance(&customer.fiscal_id).await?)))
}
