use crate::domain::{Account, Error};

/// Durable round-trip of one account's full state. Saves overwrite the slot
/// wholesale; an absent slot loads as `None`.
pub trait AccountStore {
    fn save(&mut self, account: &Account) -> Result<(), Error>;

    fn load(&self) -> Result<Option<Account>, Error>;
}
