//! Edge case tests for the stored-value card ledger.
//!
//! Exercises validation, the insufficiency rule, lazy initialization, check
//! ordering, and the verbatim failure reason strings through the public API.

use easycard_vending::{CardNumber, Ledger, LedgerError};

fn ledger() -> Ledger {
    Ledger::new(Ledger::DEFAULT_BALANCE)
}

// ==================== CARD VALIDATION ====================

#[test]
fn test_validation_requires_exactly_eight_digits() {
    let ledger = ledger();

    assert!(ledger.is_valid_card("12345678"));
    assert!(ledger.is_valid_card("00000000"));

    assert!(!ledger.is_valid_card(""));
    assert!(!ledger.is_valid_card("1234567"));
    assert!(!ledger.is_valid_card("123456789"));
    assert!(!ledger.is_valid_card("1234567a"));
    assert!(!ledger.is_valid_card("abc"));
    assert!(!ledger.is_valid_card("-1234567"));
    assert!(!ledger.is_valid_card("1234 678"));
}

#[test]
fn test_invalid_cards_never_touch_the_ledger() {
    let mut ledger = ledger();

    assert!(ledger.balance("1234567").is_err());
    assert!(ledger.charge("abc", 10).is_err());
    assert!(ledger.top_up("123456789", 10).is_err());
    assert!(!ledger.has_sufficient_balance("abc", 0));

    assert_eq!(ledger.account_count(), 0);
}

// ==================== INSUFFICIENCY RULE ====================

#[test]
fn test_sample_rule_insufficient_cards_open_at_zero() {
    let mut ledger = ledger();

    // Digit sums 12, 36, 0, 81, 36, 36: all divisible by 3.
    for number in [
        "11112222", "12345678", "00000000", "99999999", "13572468", "87654321",
    ] {
        let card: CardNumber = number.parse().unwrap();
        assert!(card.is_rule_insufficient());
        assert_eq!(ledger.balance(number), Ok(0), "card {}", number);
    }
}

#[test]
fn test_non_multiple_of_three_card_opens_at_default() {
    let mut ledger = ledger();

    // Digit sum 37.
    let card: CardNumber = "94444444".parse().unwrap();
    assert_eq!(card.digit_sum(), 37);
    assert!(!card.is_rule_insufficient());
    assert_eq!(ledger.balance("94444444"), Ok(300));
}

#[test]
fn test_rule_insufficient_card_declines_any_charge() {
    let mut ledger = ledger();

    assert_eq!(ledger.balance("11112222"), Ok(0));
    assert_eq!(
        ledger.charge("11112222", 10),
        Err(LedgerError::InsufficientBalance)
    );
    assert_eq!(ledger.balance("11112222"), Ok(0));

    // Funds on the card change nothing about charging.
    assert_eq!(ledger.top_up("11112222", 1000), Ok(1000));
    assert_eq!(
        ledger.charge("11112222", 1),
        Err(LedgerError::InsufficientBalance)
    );
    assert_eq!(ledger.balance("11112222"), Ok(1000));
}

#[test]
fn test_declined_charge_still_opens_the_account() {
    let mut ledger = ledger();

    assert_eq!(
        ledger.charge("99999999", 50),
        Err(LedgerError::InsufficientBalance)
    );
    assert_eq!(ledger.account_count(), 1);
    assert_eq!(ledger.balance("99999999"), Ok(0));
}

#[test]
fn test_opening_balance_is_fixed_at_creation() {
    // An account opened under one ledger keeps its balance through any
    // later sequence of lookups; the rule is not re-evaluated.
    let mut ledger = ledger();

    assert_eq!(ledger.balance("94444444"), Ok(300));
    assert_eq!(ledger.charge("94444444", 300), Ok(0));
    // Balance is now zero, but the card is not rule-insufficient: top-up
    // and charge keep working.
    assert_eq!(
        ledger.charge("94444444", 1),
        Err(LedgerError::InsufficientBalance)
    );
    assert_eq!(ledger.top_up("94444444", 5), Ok(5));
    assert_eq!(ledger.charge("94444444", 5), Ok(0));
}

// ==================== LAZY INITIALIZATION ====================

#[test]
fn test_initialization_is_idempotent() {
    let mut ledger = ledger();

    let first = ledger.balance("11111112").unwrap();
    let second = ledger.balance("11111112").unwrap();
    assert_eq!(first, second);
    assert_eq!(ledger.account_count(), 1);
}

#[test]
fn test_has_sufficient_balance_initializes_lazily() {
    let mut ledger = ledger();

    assert_eq!(ledger.account_count(), 0);
    assert!(ledger.has_sufficient_balance("11111112", 300));
    assert_eq!(ledger.account_count(), 1);
}

// ==================== CHECK ORDERING ====================

#[test]
fn test_format_is_checked_before_amount() {
    let mut ledger = ledger();

    assert_eq!(
        ledger.charge("abc", -5),
        Err(LedgerError::InvalidCardFormat)
    );
    assert_eq!(
        ledger.top_up("abc", -5),
        Err(LedgerError::InvalidTopUpCardFormat)
    );
}

#[test]
fn test_amount_is_checked_before_rule_and_balance() {
    let mut ledger = ledger();

    // "12345678" is rule-insufficient, yet the amount error wins and no
    // account gets created.
    assert_eq!(
        ledger.charge("12345678", -5),
        Err(LedgerError::NonPositiveChargeAmount)
    );
    assert_eq!(
        ledger.charge("12345678", 0),
        Err(LedgerError::NonPositiveChargeAmount)
    );
    assert_eq!(ledger.account_count(), 0);
}

// ==================== CHARGE / TOP-UP ====================

#[test]
fn test_charge_and_top_up_round_trip() {
    let mut ledger = ledger();

    assert_eq!(ledger.balance("11111112"), Ok(300));
    assert_eq!(ledger.top_up("11111112", 120), Ok(420));
    assert_eq!(ledger.charge("11111112", 120), Ok(300));
}

#[test]
fn test_charge_of_exact_balance_succeeds() {
    let mut ledger = ledger();

    assert_eq!(ledger.charge("11111112", 300), Ok(0));
    assert_eq!(
        ledger.charge("11111112", 1),
        Err(LedgerError::InsufficientBalance)
    );
}

#[test]
fn test_emptied_card_recovers_via_top_up() {
    let mut ledger = ledger();

    assert_eq!(ledger.balance("87654321"), Ok(0));
    assert_eq!(
        ledger.charge("87654321", 25),
        Err(LedgerError::InsufficientBalance)
    );
    assert_eq!(ledger.top_up("87654321", 100), Ok(100));
}

#[test]
fn test_accounts_are_independent() {
    let mut ledger = ledger();

    assert_eq!(ledger.charge("11111112", 100), Ok(200));
    assert_eq!(ledger.balance("94444444"), Ok(300));
    assert_eq!(ledger.top_up("94444444", 50), Ok(350));
    assert_eq!(ledger.balance("11111112"), Ok(200));
    assert_eq!(ledger.account_count(), 2);
}

// ==================== REASON STRINGS ====================

#[test]
fn test_charge_reason_strings_are_verbatim() {
    let mut ledger = ledger();

    assert_eq!(
        ledger.charge("abc", 10).unwrap_err().to_string(),
        "invalid card format (must be 8 digits)"
    );
    assert_eq!(
        ledger.charge("12345678", -5).unwrap_err().to_string(),
        "charge amount must be a positive integer"
    );
    assert_eq!(
        ledger.charge("11112222", 10).unwrap_err().to_string(),
        "insufficient balance"
    );
}

#[test]
fn test_top_up_reason_strings_are_verbatim() {
    let mut ledger = ledger();

    assert_eq!(
        ledger.top_up("abc", 10).unwrap_err().to_string(),
        "invalid card format"
    );
    assert_eq!(
        ledger.top_up("11111112", 0).unwrap_err().to_string(),
        "top-up amount must be a positive integer"
    );
}
