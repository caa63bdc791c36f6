mod account;
mod ledger;
mod money;
mod operation;
mod statement;

pub use account::*;
pub use ledger::*;
pub use money::*;
pub use operation::*;
pub use statement::*;
