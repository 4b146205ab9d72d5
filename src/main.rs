use std::env;
use std::path::PathBuf;

use dialoguer::{Input, Password, Select};
use tracing_subscriber::EnvFilter;

use minibank::{JsonFileStore, Reply, Session};

fn slot_path() -> PathBuf {
    if let Some(path) = env::args().nth(1) {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("minibank")
        .join("account.json")
}

fn credentials() -> Result<(String, String), dialoguer::Error> {
    let number: String = Input::new().with_prompt("Account number").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;
    Ok((number, password))
}

fn render(reply: &Reply) {
    if reply.success {
        println!("{}\n", reply.message);
    } else {
        eprintln!("Error: {}\n", reply.message);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let store = JsonFileStore::new(slot_path());
    let mut session = Session::open(store)?;

    let items = [
        "Create account",
        "Deposit",
        "Withdraw",
        "Check balance",
        "Transaction history",
        "Exit",
    ];

    loop {
        let choice = Select::new()
            .with_prompt("minibank")
            .items(&items)
            .default(0)
            .interact()?;

        let reply = match choice {
            0 => {
                let holder: String = Input::new()
                    .with_prompt("Account holder name")
                    .interact_text()?;
                let number: String = Input::new().with_prompt("Account number").interact_text()?;
                let password = Password::new().with_prompt("Password").interact()?;
                session.create_account(&holder, &number, &password)
            }
            1 | 2 => {
                let (number, password) = credentials()?;
                let amount: String = Input::new().with_prompt("Amount").interact_text()?;
                if choice == 1 {
                    session.deposit(&number, &password, &amount)
                } else {
                    session.withdraw(&number, &password, &amount)
                }
            }
            3 => {
                let (number, password) = credentials()?;
                session.check_balance(&number, &password)
            }
            4 => {
                let (number, password) = credentials()?;
                session.transaction_history(&number, &password)
            }
            _ => break,
        };
        render(&reply);
    }

    Ok(())
}
