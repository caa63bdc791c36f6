use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::{Json, async_trait};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::application::LedgerService;
use crate::domain::AccountId;

use super::error::ApiError;

/// Request header carrying the caller's fiscal identifier.
pub const CPF_HEADER: &str = "cpf";

/// A customer resolved from the `cpf` header.
///
/// Every route except account creation takes this extractor, so an unknown or
/// missing identifier is rejected before the handler runs.
#[derive(Debug, Clone)]
pub struct Customer {
    pub fiscal_id: String,
    pub id: AccountId,
}

#[async_trait]
impl FromRequestParts<Arc<LedgerService>> for Customer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        service: &Arc<LedgerService>,
    ) -> Result<Self, Self::Rejection> {
        let fiscal_id = parts
            .headers
            .get(CPF_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::customer_not_found(""))?
            .to_string();

        let id = service.resolve_customer(&fiscal_id).await?;
        Ok(Customer { fiscal_id, id })
    }
}

/// JSON body extractor that answers malformed input with the API error shape.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "invalid request body");
                Err(ApiError::InvalidBody)
            }
        }
    }
}
