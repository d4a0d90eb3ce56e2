//! EasyCard Vending Machine CLI
//!
//! An interactive vending machine over an in-memory stored-value card
//! ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run                              # built-in catalog, default balance 300
//! cargo run -- catalog.csv               # custom catalog CSV (code,name,price,stock)
//! cargo run -- catalog.csv 100           # custom catalog and default balance
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use easycard_vending::{Catalog, Ledger, MachineError, Result, VendingMachine};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let catalog = match args.get(1) {
        Some(path) => {
            let file = File::open(path)?;
            Catalog::from_csv(BufReader::new(file))?
        }
        None => Catalog::builtin(),
    };

    let default_balance = match args.get(2) {
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|balance| *balance >= 0)
            .ok_or_else(|| MachineError::InvalidBalanceArgument { value: raw.clone() })?,
        None => Ledger::DEFAULT_BALANCE,
    };

    let mut machine = VendingMachine::new(Ledger::new(default_balance), catalog);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    machine.run(&mut input, &mut output)
}
