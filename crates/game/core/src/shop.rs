//! Item shop: buying and selling against the currency stack.

use tracing::info;

use crate::error::{ErrorSeverity, GameError};
use crate::state::Inventory;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopListing {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "ShopListing::default_price"))]
    pub price: u32,
}

impl ShopListing {
    pub const DEFAULT_PRICE: u32 = 1;

    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    #[cfg(feature = "serde")]
    fn default_price() -> u32 {
        Self::DEFAULT_PRICE
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("Not enough money! {item} costs {price}, you have {available}")]
    InsufficientFunds {
        item: String,
        price: u32,
        available: u32,
    },

    #[error("{item} is not sold here")]
    UnknownItem { item: String },

    #[error("You don't have any {item}!")]
    NotOwned { item: String },

    #[error("{item} cannot be sold")]
    NotForSale { item: String },
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } | Self::NotOwned { .. } => ErrorSeverity::Recoverable,
            Self::UnknownItem { .. } | Self::NotForSale { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "SHOP_INSUFFICIENT_FUNDS",
            Self::UnknownItem { .. } => "SHOP_UNKNOWN_ITEM",
            Self::NotOwned { .. } => "SHOP_NOT_OWNED",
            Self::NotForSale { .. } => "SHOP_NOT_FOR_SALE",
        }
    }
}

/// A shop catalog priced in `currency` units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shop {
    listings: Vec<ShopListing>,
    currency: String,
}

impl Shop {
    pub fn new(listings: Vec<ShopListing>, currency: impl Into<String>) -> Self {
        Self {
            listings,
            currency: currency.into(),
        }
    }

    pub fn listings(&self) -> &[ShopListing] {
        &self.listings
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn price(&self, item: &str) -> Option<u32> {
        self.listings
            .iter()
            .find(|listing| listing.name == item)
            .map(|listing| listing.price)
    }

    /// Half the catalog price, never below 1. Unlisted items sell for 1.
    pub fn sell_price(&self, item: &str) -> u32 {
        (self.price(item).unwrap_or(0) / 2).max(1)
    }

    /// Buys one unit. Returns the price paid.
    pub fn buy(&self, item: &str, inventory: &mut Inventory) -> Result<u32, ShopError> {
        let price = self.price(item).ok_or_else(|| ShopError::UnknownItem {
            item: item.to_string(),
        })?;

        let available = inventory.count(&self.currency);
        if available < price {
            return Err(ShopError::InsufficientFunds {
                item: item.to_string(),
                price,
                available,
            });
        }

        if price > 0 {
            inventory
                .take(&self.currency, price)
                .map_err(|_| ShopError::InsufficientFunds {
                    item: item.to_string(),
                    price,
                    available,
                })?;
        }
        inventory.add(item, 1);

        info!("Bought {} for {}", item, price);
        Ok(price)
    }

    /// Sells one owned unit. Returns the coins received.
    pub fn sell(&self, item: &str, inventory: &mut Inventory) -> Result<u32, ShopError> {
        if item == self.currency {
            return Err(ShopError::NotForSale {
                item: item.to_string(),
            });
        }

        inventory.consume(item).map_err(|_| ShopError::NotOwned {
            item: item.to_string(),
        })?;

        let price = self.sell_price(item);
        inventory.add(&self.currency, price);

        info!("Sold {} for {}", item, price);
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemStack;

    fn shop() -> Shop {
        Shop::new(
            vec![
                ShopListing::new("Heal Potion", 30),
                ShopListing::new("Pokeball", 1),
            ],
            "Coins",
        )
    }

    #[test]
    fn buy_deducts_coins_and_adds_item() {
        let mut inventory = Inventory::new(vec![ItemStack::new("Coins", 100)]);

        assert_eq!(shop().buy("Heal Potion", &mut inventory), Ok(30));
        assert_eq!(inventory.count("Coins"), 70);
        assert_eq!(inventory.count("Heal Potion"), 1);
    }

    #[test]
    fn buy_spending_every_coin_removes_the_stack() {
        let mut inventory = Inventory::new(vec![ItemStack::new("Coins", 30)]);

        shop().buy("Heal Potion", &mut inventory).unwrap();
        assert!(!inventory.has("Coins"));
    }

    #[test]
    fn buy_rejects_insufficient_funds() {
        let mut inventory = Inventory::new(vec![ItemStack::new("Coins", 10)]);
        let err = shop().buy("Heal Potion", &mut inventory).unwrap_err();

        assert_eq!(err.error_code(), "SHOP_INSUFFICIENT_FUNDS");
        assert_eq!(inventory.count("Coins"), 10);
        assert!(!inventory.has("Heal Potion"));
    }

    #[test]
    fn buy_rejects_unlisted_items() {
        let mut inventory = Inventory::new(vec![ItemStack::new("Coins", 10)]);
        assert!(matches!(
            shop().buy("Master Ball", &mut inventory),
            Err(ShopError::UnknownItem { .. })
        ));
    }

    #[test]
    fn sell_pays_half_price_at_least_one() {
        let mut inventory = Inventory::new(vec![
            ItemStack::new("Heal Potion", 2),
            ItemStack::new("Pokeball", 1),
            ItemStack::new("Old Boot", 1),
        ]);
        let shop = shop();

        assert_eq!(shop.sell("Heal Potion", &mut inventory), Ok(15));
        assert_eq!(shop.sell("Pokeball", &mut inventory), Ok(1));
        assert_eq!(shop.sell("Old Boot", &mut inventory), Ok(1));
        assert_eq!(inventory.count("Coins"), 17);
        assert_eq!(inventory.count("Heal Potion"), 1);
        assert!(!inventory.has("Pokeball"));
    }

    #[test]
    fn sell_requires_ownership() {
        let mut inventory = Inventory::default();
        assert_eq!(
            shop().sell("Heal Potion", &mut inventory),
            Err(ShopError::NotOwned {
                item: "Heal Potion".to_string()
            })
        );
        assert!(matches!(
            shop().sell("Coins", &mut inventory),
            Err(ShopError::NotForSale { .. })
        ));
    }
}
