// Application layer - use cases over the shared ledger.
// The HTTP layer and the CLI both go through `LedgerService`.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
