//! # EasyCard Vending
//!
//! A stored-value card ledger with an interactive vending machine CLI.
//!
//! The [`Ledger`] is the core: it maps 8-digit card numbers to integer
//! balances, lazily initializing each account on first reference. The
//! insufficiency rule picks the opening balance (cards whose digit sum is
//! divisible by 3 open at zero and always decline charges); afterwards only
//! charges and top-ups move a balance.
//!
//! ## Design Principles
//!
//! - **Whole currency units**: balances are `i64`, no sub-unit precision
//! - **Failures as data**: every decline is a [`LedgerError`] value with a
//!   verbatim, user-facing reason string
//! - **No global state**: the ledger and catalog are constructed explicitly
//!   and handed to the machine
//!
//! ## Example
//!
//! ```
//! use easycard_vending::Ledger;
//!
//! let mut ledger = Ledger::new(300);
//! // Digit sum 8: opens at the default balance.
//! assert_eq!(ledger.balance("11111112"), Ok(300));
//! assert_eq!(ledger.charge("11111112", 25), Ok(275));
//!
//! // Digit sum 12: rule-insufficient, opens at zero and never charges.
//! assert_eq!(ledger.balance("11112222"), Ok(0));
//! assert!(ledger.charge("11112222", 10).is_err());
//! ```

pub mod account;
pub mod card;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod machine;

pub use account::CardAccount;
pub use card::CardNumber;
pub use catalog::{Catalog, Item};
pub use error::{LedgerError, MachineError, Result};
pub use ledger::Ledger;
pub use machine::VendingMachine;
