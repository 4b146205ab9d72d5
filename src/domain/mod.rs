pub mod account;
pub mod error;
pub mod traits;
pub mod transaction;

pub use account::Account;
pub use error::Error;
pub use traits::AccountStore;
pub use transaction::{TransactionEntry, TransactionKind};
