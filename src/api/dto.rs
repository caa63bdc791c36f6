use serde::{Deserialize, Serialize};

use crate::domain::Amount;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(alias = "fiscal_id")]
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: String,
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Amount,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const CUSTOMER_UPDATED: Self = Self {
        message: "customer updated",
    };
    pub const DEPOSIT_RECORDED: Self = Self {
        message: "deposit recorded",
    };
    pub const WITHDRAWAL_COMPLETED: Self = Self {
        message: "withdrawal completed",
    };
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// Balance rendered as a bare JSON number.
#[derive(Debug, Serialize)]
pub struct BalanceResponse(#[serde(with = "crate::domain::json_amount")] pub Amount);
