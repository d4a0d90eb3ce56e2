//! Per-card account model and balance operations.
//!
//! Maintains the invariant: `balance >= 0` at all times. Debits are guarded,
//! credits are not.

use crate::card::CardNumber;

/// A stored-value account for a single card.
///
/// The opening balance is fixed once at creation by [`CardAccount::open`]:
/// zero for rule-insufficient cards, the configured default otherwise. The
/// rule is never re-evaluated afterwards; only credits and debits change the
/// balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAccount {
    /// Current balance in whole currency units. Never negative.
    pub balance: i64,
}

impl CardAccount {
    /// Opens an account for `card`, applying the insufficiency rule to pick
    /// the opening balance.
    pub fn open(card: &CardNumber, default_balance: i64) -> Self {
        let balance = if card.is_rule_insufficient() {
            0
        } else {
            default_balance
        };
        CardAccount { balance }
    }

    /// Credits the account, returning the new balance.
    ///
    /// Unguarded apart from the caller's amount-positivity check.
    pub fn credit(&mut self, amount: i64) -> i64 {
        self.balance += amount;
        self.balance
    }

    /// Debits the account if the balance covers `amount`.
    ///
    /// Returns `true` if the debit was applied, `false` on a balance
    /// shortfall (the balance is left untouched).
    pub fn debit(&mut self, amount: i64) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }
}
