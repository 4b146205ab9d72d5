pub mod domain;
pub mod session;
pub mod store;

pub use domain::{Account, AccountStore, Error, TransactionEntry, TransactionKind};
pub use session::{Reply, Session};
pub use store::{JsonFileStore, MemoryStore};
