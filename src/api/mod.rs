//! HTTP boundary: routes, request/response shapes and error rendering.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::application::LedgerService;

pub mod dto;
pub mod error;
pub mod extract;
mod handlers;

pub use error::ApiError;
pub use extract::{CPF_HEADER, Customer};

/// Build the application router over a shared ledger service.
pub fn router(service: Arc<LedgerService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/account",
            post(handlers::create_account)
                .get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .route("/statement", get(handlers::get_statement))
        .route("/statement/date", get(handlers::get_statement_by_date))
        .route("/deposit", post(handlers::deposit))
        .route("/withdraw", post(handlers::withdraw))
        .route("/balance", get(handlers::get_balance))
        .with_state(service)
}

/// Serve the router on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    service: Arc<LedgerService>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown)
        .await
}
