use tracing::{info, warn};

use crate::domain::{Account, AccountStore, Error};

/// Uniform operation outcome consumed by the presentation layer. Every
/// failure is reported here as a value; nothing unwinds past the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub success: bool,
    pub message: String,
}

impl From<Result<String, Error>> for Reply {
    fn from(result: Result<String, Error>) -> Self {
        match result {
            Ok(message) => Self {
                success: true,
                message,
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
            },
        }
    }
}

/// Owns at most one account and the store it persists to. Creating a new
/// account replaces the previous one, in memory and in the slot.
#[derive(Debug)]
pub struct Session<S: AccountStore> {
    store: S,
    account: Option<Account>,
}

impl<S: AccountStore> Session<S> {
    /// Starts a session, restoring the persisted account if the slot holds one.
    pub fn open(store: S) -> Result<Self, Error> {
        let account = store.load()?;
        if let Some(account) = &account {
            info!(holder = %account.holder_name, "restored persisted account");
        }
        Ok(Self { store, account })
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn create_account(
        &mut self,
        holder_name: &str,
        account_number: &str,
        password: &str,
    ) -> Reply {
        self.try_create(holder_name, account_number, password)
            .into()
    }

    fn try_create(
        &mut self,
        holder_name: &str,
        account_number: &str,
        password: &str,
    ) -> Result<String, Error> {
        let account = Account::create(holder_name, account_number, password)?;
        self.store.save(&account)?;
        info!(
            holder = %account.holder_name,
            number = account.account_number,
            "account created"
        );
        let message = format!(
            "Congratulations {}! Account created successfully. Account number: {}. Initial balance: $0.00",
            account.holder_name, account.account_number
        );
        self.account = Some(account);
        Ok(message)
    }

    pub fn deposit(&mut self, account_number: &str, password: &str, amount: &str) -> Reply {
        self.mutate(|account| account.deposit(account_number, password, amount))
            .into()
    }

    pub fn withdraw(&mut self, account_number: &str, password: &str, amount: &str) -> Reply {
        self.mutate(|account| account.withdraw(account_number, password, amount))
            .into()
    }

    pub fn check_balance(&self, account_number: &str, password: &str) -> Reply {
        self.query(|account| account.check_balance(account_number, password))
            .into()
    }

    pub fn transaction_history(&self, account_number: &str, password: &str) -> Reply {
        self.query(|account| account.history_report(account_number, password))
            .into()
    }

    // Persists only after the domain accepted the mutation; a rejected
    // operation leaves both memory and the slot untouched. A failed save is
    // reported to the caller, the in-memory mutation stands.
    fn mutate(
        &mut self,
        op: impl FnOnce(&mut Account) -> Result<String, Error>,
    ) -> Result<String, Error> {
        let account = self.account.as_mut().ok_or(Error::NoAccount)?;
        let message = op(account).inspect_err(|e| warn!(error = %e, "operation rejected"))?;
        self.store.save(account)?;
        Ok(message)
    }

    fn query(&self, op: impl FnOnce(&Account) -> Result<String, Error>) -> Result<String, Error> {
        let account = self.account.as_ref().ok_or(Error::NoAccount)?;
        op(account)
    }
}
