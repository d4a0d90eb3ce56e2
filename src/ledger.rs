//! Core stored-value ledger service.
//!
//! Owns the in-memory map from card number to account and the configured
//! default opening balance. Accounts are created lazily on first reference,
//! applying the insufficiency rule once at creation; afterwards only charges
//! and top-ups change a balance.

use crate::account::CardAccount;
use crate::card::CardNumber;
use crate::error::LedgerError;
use log::debug;
use std::collections::HashMap;

/// The stored-value card ledger.
///
/// Explicitly constructed and passed to callers; there is no global instance.
/// All operations take `&mut self`, so the lazy-init-then-mutate sequences
/// are exclusive by construction. If this service is ever put behind a
/// network boundary, the whole map must sit behind a single lock, since
/// initialization plus balance mutation is a compound operation.
///
/// Every failure is returned as a [`LedgerError`] value; the service never
/// panics on input and remains usable after any failure, including for the
/// card that just failed.
#[derive(Debug)]
pub struct Ledger {
    /// Accounts indexed by card number. Entries are created lazily and
    /// never deleted.
    accounts: HashMap<CardNumber, CardAccount>,

    /// Opening balance for cards the insufficiency rule does not zero out.
    /// Fixed at construction.
    default_balance: i64,
}

impl Ledger {
    /// Default opening balance in whole currency units.
    pub const DEFAULT_BALANCE: i64 = 300;

    /// Creates an empty ledger with the given default opening balance.
    pub fn new(default_balance: i64) -> Self {
        Ledger {
            accounts: HashMap::new(),
            default_balance,
        }
    }

    /// The configured default opening balance.
    pub fn default_balance(&self) -> i64 {
        self.default_balance
    }

    /// Returns `true` iff `number` is a well-formed card number.
    pub fn is_valid_card(&self, number: &str) -> bool {
        CardNumber::is_valid(number)
    }

    /// Number of accounts the ledger has initialized so far.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Idempotent lazy initialization: creates the account on first
    /// reference, branching the opening balance on the insufficiency rule.
    fn ensure_initialized(&mut self, card: &CardNumber) -> &mut CardAccount {
        let default_balance = self.default_balance;
        self.accounts
            .entry(card.clone())
            .or_insert_with_key(|c| CardAccount::open(c, default_balance))
    }

    /// Looks up the balance for `number`, initializing the account on first
    /// reference.
    ///
    /// Returns [`LedgerError::InvalidCardFormat`] for malformed numbers
    /// rather than a `-1` sentinel, so "invalid card" and "valid card, zero
    /// balance" stay distinguishable. Successful results are always `>= 0`.
    pub fn balance(&mut self, number: &str) -> Result<i64, LedgerError> {
        let card: CardNumber = number.parse()?;
        Ok(self.ensure_initialized(&card).balance)
    }

    /// Returns `true` iff `number` is valid and its balance covers `amount`.
    ///
    /// Triggers lazy initialization as a side effect of the balance lookup.
    pub fn has_sufficient_balance(&mut self, number: &str, amount: i64) -> bool {
        matches!(self.balance(number), Ok(balance) if balance >= amount)
    }

    /// Charges `amount` against the card, returning the new balance.
    ///
    /// Checks run in a fixed order: card format, amount positivity, the
    /// insufficiency rule, then funds. Rule-insufficient cards decline every
    /// charge regardless of the requested amount; the attempt still opens
    /// their account at zero. This always-decline behavior is intentional,
    /// not a missing funds check.
    pub fn charge(&mut self, number: &str, amount: i64) -> Result<i64, LedgerError> {
        let card: CardNumber = number.parse()?;

        if amount <= 0 {
            return Err(LedgerError::NonPositiveChargeAmount);
        }

        if card.is_rule_insufficient() {
            self.ensure_initialized(&card);
            debug!(
                "Declined charge of {} on rule-insufficient card {}",
                amount, card
            );
            return Err(LedgerError::InsufficientBalance);
        }

        let account = self.ensure_initialized(&card);
        if !account.debit(amount) {
            debug!(
                "Declined charge of {} on card {} (balance {})",
                amount, card, account.balance
            );
            return Err(LedgerError::InsufficientBalance);
        }

        let balance = account.balance;
        debug!("Charged {} to card {}, new balance {}", amount, card, balance);
        Ok(balance)
    }

    /// Tops up the card by `amount`, returning the new balance.
    ///
    /// Unguarded apart from card format and amount positivity; top-ups work
    /// on rule-insufficient cards too (they open at zero and accumulate
    /// normally, they just never charge).
    pub fn top_up(&mut self, number: &str, amount: i64) -> Result<i64, LedgerError> {
        let card: CardNumber = number
            .parse()
            .map_err(|_| LedgerError::InvalidTopUpCardFormat)?;

        if amount <= 0 {
            return Err(LedgerError::NonPositiveTopUpAmount);
        }

        let account = self.ensure_initialized(&card);
        let balance = account.credit(amount);
        debug!("Topped up {} on card {}, new balance {}", amount, card, balance);
        Ok(balance)
    }
}
