//! Interactive vending machine loop.
//!
//! A thin CLI client over the [`Ledger`]: renders the catalog menu, runs the
//! purchase/top-up/balance flows, and renders ledger failure reasons to the
//! buyer. The session is generic over `BufRead`/`Write` so it can be driven
//! from scripted input in tests.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ledger::Ledger;
use std::io::{BufRead, Write};

/// Width of the menu frame lines.
const MENU_WIDTH: usize = 50;

/// A vending machine session: a ledger plus an item catalog.
///
/// Purchase failures are counted per purchase session; after
/// [`VendingMachine::MAX_ATTEMPTS`] combined failures the purchase is
/// abandoned and control returns to the menu. The ledger itself has no retry
/// concept.
pub struct VendingMachine {
    ledger: Ledger,
    catalog: Catalog,
}

impl VendingMachine {
    /// Combined failed attempts allowed per purchase before giving up.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Creates a machine over an owned ledger and catalog.
    pub fn new(ledger: Ledger, catalog: Catalog) -> Self {
        VendingMachine { ledger, catalog }
    }

    /// The machine's ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The machine's catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs the menu loop until the buyer quits or input ends.
    ///
    /// Ledger failures are rendered and never terminate the session; only
    /// I/O errors propagate.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            self.print_menu(output)?;

            let Some(line) = read_line(input)? else {
                break;
            };
            let choice = line.trim().to_uppercase();

            let keep_going = match choice.as_str() {
                "" => true,
                "Q" => {
                    writeln!(output, "Goodbye, thanks for shopping!")?;
                    false
                }
                "B" => self.balance_inquiry(input, output)?,
                "T" => self.top_up(input, output)?,
                code => self.purchase(code, input, output)?,
            };

            if !keep_going {
                break;
            }
        }

        Ok(())
    }

    fn print_menu<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "{}", "=".repeat(MENU_WIDTH))?;
        writeln!(output, "EasyCard Vending Machine")?;
        writeln!(output, "{}", "-".repeat(MENU_WIDTH))?;
        writeln!(output, "{:<8}{:<26}{:>7}{:>8}", "CODE", "ITEM", "PRICE", "STOCK")?;
        for item in self.catalog.iter() {
            writeln!(
                output,
                "{:<8}{:<26}{:>7}{:>8}",
                item.code, item.name, item.price, item.stock
            )?;
        }
        writeln!(output, "{}", "-".repeat(MENU_WIDTH))?;
        writeln!(
            output,
            "Enter an item code to buy, B for balance, T to top up, Q to quit."
        )?;
        writeln!(output, "{}", "=".repeat(MENU_WIDTH))?;
        Ok(())
    }

    /// Purchase flow for one item code. Returns `false` on end of input.
    fn purchase<R: BufRead, W: Write>(
        &mut self,
        code: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        let (name, price) = match self.catalog.get(code) {
            Some(item) if item.stock == 0 => {
                writeln!(output, "This item is currently out of stock.")?;
                return Ok(true);
            }
            Some(item) => (item.name.clone(), item.price),
            None => {
                writeln!(output, "Unknown item code, please try again.")?;
                return Ok(true);
            }
        };

        writeln!(output, "You picked: {} ({} per unit)", name, price)?;

        let mut failed_attempts = 0;
        loop {
            let Some(card) = prompt(input, output, "Enter your card number (8 digits): ")? else {
                return Ok(false);
            };

            match self.ledger.charge(&card, price) {
                Ok(balance) => {
                    self.catalog.take_one(code);
                    writeln!(output, "Transaction approved!")?;
                    writeln!(output, "Remaining card balance: {}", balance)?;
                    writeln!(output, "Please take your item, thank you!")?;
                    return Ok(true);
                }
                Err(reason) => {
                    failed_attempts += 1;
                    let remaining = Self::MAX_ATTEMPTS - failed_attempts;
                    if remaining > 0 {
                        writeln!(
                            output,
                            "Transaction failed: {}. {} attempt(s) left.",
                            reason, remaining
                        )?;
                    } else {
                        writeln!(
                            output,
                            "Transaction failed {} times, returning to the menu.",
                            Self::MAX_ATTEMPTS
                        )?;
                        return Ok(true);
                    }
                }
            }
        }
    }

    /// Top-up flow: one card, one amount, one attempt.
    fn top_up<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<bool> {
        let Some(card) = prompt(input, output, "Enter your card number (8 digits): ")? else {
            return Ok(false);
        };
        let Some(raw_amount) = prompt(input, output, "Enter top-up amount: ")? else {
            return Ok(false);
        };

        let Ok(amount) = raw_amount.parse::<i64>() else {
            writeln!(output, "Top-up failed: amount must be a whole number.")?;
            return Ok(true);
        };

        match self.ledger.top_up(&card, amount) {
            Ok(balance) => writeln!(output, "Top-up successful! New balance: {}", balance)?,
            Err(reason) => writeln!(output, "Top-up failed: {}.", reason)?,
        }
        Ok(true)
    }

    /// Balance inquiry flow.
    fn balance_inquiry<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        let Some(card) = prompt(input, output, "Enter your card number (8 digits): ")? else {
            return Ok(false);
        };

        match self.ledger.balance(&card) {
            Ok(balance) => writeln!(output, "Card balance: {}", balance)?,
            Err(reason) => writeln!(output, "Balance inquiry failed: {}.", reason)?,
        }
        Ok(true)
    }
}

/// Reads one line, returning `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// Prints a prompt and reads the trimmed response, `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    Ok(read_line(input)?.map(|line| line.trim().to_string()))
}
