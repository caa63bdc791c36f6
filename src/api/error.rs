use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::AppError;
use crate::domain::LedgerError;

use super::dto::ErrorResponse;

pub const CUSTOMER_EXISTS: &str = "customer already exists!";
pub const CUSTOMER_NOT_FOUND: &str = "customer not found";
pub const INSUFFICIENT_FUNDS: &str = "insufficient funds";
pub const INVALID_AMOUNT: &str = "invalid amount";
pub const INVALID_DATE: &str = "invalid date";
pub const INVALID_BODY: &str = "invalid request body";

/// Everything a handler can fail with, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    InvalidBody,
    InvalidDate,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::App(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::App(err.into())
    }
}

impl ApiError {
    pub fn customer_not_found(fiscal_id: impl Into<String>) -> Self {
        LedgerError::AccountNotFound(fiscal_id.into()).into()
    }

    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::App(AppError::Ledger(err)) => match err {
                LedgerError::DuplicateAccount(_) => (StatusCode::BAD_REQUEST, CUSTOMER_EXISTS),
                LedgerError::AccountNotFound(_) => (StatusCode::BAD_REQUEST, CUSTOMER_NOT_FOUND),
                LedgerError::InsufficientFunds { .. } => {
                    (StatusCode::BAD_REQUEST, INSUFFICIENT_FUNDS)
                }
                LedgerError::InvalidAmount(_) | LedgerError::BalanceOverflow => {
                    (StatusCode::BAD_REQUEST, INVALID_AMOUNT)
                }
            },
            ApiError::App(AppError::Snapshot(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
            ApiError::InvalidBody => (StatusCode::BAD_REQUEST, INVALID_BODY),
            ApiError::InvalidDate => (StatusCode::BAD_REQUEST, INVALID_DATE),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::debug!(error = ?self, "request rejected");
        }
        (status, Json(ErrorResponse { error })).into_response()
    }
}
