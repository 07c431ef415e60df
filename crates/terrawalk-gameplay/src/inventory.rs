//! Item-counting inventory.
//!
//! Items are identified by name and carry a positive count. Removing more
//! than is held clamps at zero, and a count that reaches zero deletes the
//! entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Inventory error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Item name is empty or whitespace
    #[error("Item name must not be empty")]
    EmptyName,
    /// Count would exceed `u32::MAX`
    #[error("Count overflow for {item}")]
    Overflow {
        /// Item name
        item: String,
    },
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Item name to count mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Items and their quantities, sorted by name for stable display
    items: BTreeMap<String, u32>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the count of a specific item.
    #[must_use]
    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Adds `quantity` of `item`. Adding zero is a no-op.
    pub fn add(&mut self, item: &str, quantity: u32) -> InventoryResult<()> {
        if item.trim().is_empty() {
            return Err(InventoryError::EmptyName);
        }
        if quantity == 0 {
            return Ok(());
        }
        let current = self.count(item);
        let total = current
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::Overflow {
                item: item.to_string(),
            })?;
        self.items.insert(item.to_string(), total);
        Ok(())
    }

    /// Removes up to `quantity` of `item` and returns how many were removed.
    pub fn remove(&mut self, item: &str, quantity: u32) -> u32 {
        let current = self.count(item);
        let removed = current.min(quantity);
        if removed == current {
            self.items.remove(item);
        } else {
            self.items.insert(item.to_string(), current - removed);
        }
        removed
    }

    /// Returns an iterator over all items in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.items.iter().map(|(name, &count)| (name.as_str(), count))
    }
}
