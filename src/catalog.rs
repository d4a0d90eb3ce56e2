//! Item catalog for the vending machine.
//!
//! The machine ships a built-in three-item catalog and can load a custom one
//! from CSV (`code,name,price,stock`). The catalog is owned by the CLI layer;
//! the ledger knows nothing about items or stock.

use crate::error::{MachineError, Result};
use csv::{ReaderBuilder, Trim};
use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;

/// A vending machine item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Item code the buyer types at the menu, e.g. "A01". Stored uppercase.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Price in whole currency units. Always positive.
    pub price: i64,

    /// Units left in the machine.
    pub stock: u32,
}

/// The set of items on sale, keyed by item code.
///
/// Backed by a `BTreeMap` so the menu renders in a stable code order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<String, Item>,
}

impl Catalog {
    /// The built-in catalog the machine starts with when no CSV is given.
    pub fn builtin() -> Self {
        let items = [
            Item {
                code: "A01".to_string(),
                name: "Bubble Green Tea".to_string(),
                price: 25,
                stock: 10,
            },
            Item {
                code: "B02".to_string(),
                name: "Pepsi Cola Can".to_string(),
                price: 30,
                stock: 2,
            },
            Item {
                code: "C03".to_string(),
                name: "Mixed Cranberry Juice".to_string(),
                price: 29,
                stock: 5,
            },
        ];

        Catalog {
            items: items
                .into_iter()
                .map(|item| (item.code.clone(), item))
                .collect(),
        }
    }

    /// Loads a catalog from a CSV reader with header `code,name,price,stock`.
    ///
    /// Fields are whitespace-trimmed and codes are uppercased. Records with
    /// an empty code or name, or a non-positive price, fail the load with a
    /// row-numbered error. Duplicate codes keep the later record.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut items = BTreeMap::new();

        for (row_idx, result) in csv_reader.deserialize::<Item>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            let mut item = result?;
            item.code = item.code.to_uppercase();

            if item.code.is_empty() || item.name.is_empty() {
                return Err(MachineError::InvalidCatalogRecord {
                    row,
                    message: "code and name must be non-empty".to_string(),
                });
            }
            if item.price <= 0 {
                return Err(MachineError::InvalidCatalogRecord {
                    row,
                    message: format!("price must be positive, got {}", item.price),
                });
            }

            if let Some(previous) = items.insert(item.code.clone(), item) {
                warn!(
                    "Row {}: duplicate item code {}, keeping the later record",
                    row, previous.code
                );
            }
        }

        Ok(Catalog { items })
    }

    /// Looks up an item by code.
    pub fn get(&self, code: &str) -> Option<&Item> {
        self.items.get(code)
    }

    /// Items in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Removes one unit of stock for `code`.
    ///
    /// Returns `false` if the code is unknown or the item is sold out.
    pub fn take_one(&mut self, code: &str) -> bool {
        match self.items.get_mut(code) {
            Some(item) if item.stock > 0 => {
                item.stock -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of items on sale.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
