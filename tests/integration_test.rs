use minibank::{JsonFileStore, Session, TransactionKind};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("account.json"))
}

#[test]
fn full_scenario_survives_a_restart() {
    let dir = TempDir::new().expect("create temp dir");

    {
        let mut session = Session::open(store_in(&dir)).unwrap();
        assert!(session.account().is_none());

        let reply = session.create_account("Alice", "1234", "pass");
        assert!(reply.success, "{}", reply.message);

        let reply = session.deposit("1234", "pass", "100");
        assert!(reply.success);
        assert_eq!(reply.message, "Deposited $100.00. New balance: $100.00");

        let reply = session.withdraw("1234", "pass", "150");
        assert!(!reply.success);
        assert_eq!(reply.message, "Insufficient funds!");

        let reply = session.withdraw("1234", "pass", "40");
        assert!(reply.success);
        assert_eq!(reply.message, "Withdrew $40.00. New balance: $60.00");
    }

    // A fresh session restores the account from the slot, deep-equal state.
    let session = Session::open(store_in(&dir)).unwrap();
    let account = session.account().expect("account restored");
    assert_eq!(account.holder_name, "Alice");
    assert_eq!(account.account_number, 1234);
    assert_eq!(account.password, "pass");
    assert_eq!(account.balance, Decimal::from(60));
    assert_eq!(account.transaction_history.len(), 2);
    assert_eq!(account.transaction_history[0].kind, TransactionKind::Deposit);
    assert_eq!(
        account.transaction_history[1].kind,
        TransactionKind::Withdraw
    );
    assert_eq!(
        account.transaction_history[1].resulting_balance,
        Decimal::from(60)
    );

    let reply = session.check_balance("1234", "pass");
    assert!(reply.success);
    assert_eq!(reply.message, "Current balance: $60.00");

    let reply = session.transaction_history("1234", "pass");
    assert!(reply.success);
    assert!(reply.message.contains("1. DEPOSIT: $100.00"));
    assert!(reply.message.contains("2. WITHDRAW: $40.00"));
}

#[test]
fn failed_credentials_never_reach_the_slot() {
    let dir = TempDir::new().expect("create temp dir");

    let mut session = Session::open(store_in(&dir)).unwrap();
    session.create_account("Alice", "1234", "pass");
    session.deposit("1234", "pass", "100");

    let reply = session.deposit("1234", "wrong", "50");
    assert!(!reply.success);
    assert_eq!(reply.message, "Wrong Account Number or Password");

    let reply = session.transaction_history("4321", "pass");
    assert!(!reply.success);
    assert_eq!(reply.message, "You don't have access to this account");

    // Restart and confirm the rejected operations left no trace.
    let session = Session::open(store_in(&dir)).unwrap();
    let account = session.account().unwrap();
    assert_eq!(account.balance, Decimal::from(100));
    assert_eq!(account.transaction_history.len(), 1);
}

#[test]
fn creating_a_new_account_overwrites_the_slot() {
    let dir = TempDir::new().expect("create temp dir");

    let mut session = Session::open(store_in(&dir)).unwrap();
    session.create_account("Alice", "1234", "pass");
    session.deposit("1234", "pass", "100");

    let reply = session.create_account("Bob", "5678", "word");
    assert!(reply.success);

    let session = Session::open(store_in(&dir)).unwrap();
    let account = session.account().unwrap();
    assert_eq!(account.holder_name, "Bob");
    assert_eq!(account.balance, Decimal::ZERO);
    assert!(account.transaction_history.is_empty());
}

#[test]
fn tampered_slot_fails_to_open() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("account.json");

    {
        let mut session = Session::open(JsonFileStore::new(&path)).unwrap();
        session.create_account("Alice", "1234", "pass");
        session.deposit("1234", "pass", "100");
    }

    let mut json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    json["balance"] = serde_json::Value::String("999".to_string());
    std::fs::write(&path, json.to_string()).unwrap();

    assert!(Session::open(JsonFileStore::new(&path)).is_err());
}
