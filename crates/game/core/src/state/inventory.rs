//! Inventory system: named item stacks mutated in place by battle and shop rules.

use crate::error::{ErrorSeverity, GameError};

/// Item stack containing an item name and its quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub name: String,
    pub count: u32,
}

impl ItemStack {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Errors raised when an inventory cannot cover a request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("You don't have any {item}!")]
    Missing { item: String },

    #[error("not enough {item}: need {needed}, have {available}")]
    Insufficient {
        item: String,
        needed: u32,
        available: u32,
    },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "INVENTORY_MISSING",
            Self::Insufficient { .. } => "INVENTORY_INSUFFICIENT",
        }
    }
}

/// Ordered list of item stacks. Stacks that reach zero are removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    items: Vec<ItemStack>,
}

impl Inventory {
    pub fn new(items: Vec<ItemStack>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    pub fn count(&self, name: &str) -> u32 {
        self.items
            .iter()
            .find(|stack| stack.name == name)
            .map_or(0, |stack| stack.count)
    }

    pub fn has(&self, name: &str) -> bool {
        self.count(name) > 0
    }

    /// Add `amount` units, creating the stack if absent.
    pub fn add(&mut self, name: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        match self.items.iter_mut().find(|stack| stack.name == name) {
            Some(stack) => stack.count = stack.count.saturating_add(amount),
            None => self.items.push(ItemStack::new(name, amount)),
        }
    }

    /// Remove exactly `amount` units. Returns the remaining count.
    pub fn take(&mut self, name: &str, amount: u32) -> Result<u32, InventoryError> {
        let index = self
            .items
            .iter()
            .position(|stack| stack.name == name && stack.count > 0)
            .ok_or_else(|| InventoryError::Missing {
                item: name.to_string(),
            })?;

        let available = self.items[index].count;
        if available < amount {
            return Err(InventoryError::Insufficient {
                item: name.to_string(),
                needed: amount,
                available,
            });
        }

        let remaining = available - amount;
        if remaining == 0 {
            self.items.remove(index);
        } else {
            self.items[index].count = remaining;
        }
        Ok(remaining)
    }

    /// Consume a single unit.
    pub fn consume(&mut self, name: &str) -> Result<u32, InventoryError> {
        self.take(name, 1)
    }
}

impl From<Vec<ItemStack>> for Inventory {
    fn from(items: Vec<ItemStack>) -> Self {
        Self::new(items)
    }
}
