//! Buy and sell at the mart.

use anyhow::{Result, bail};
use clap::Subcommand;
use game_core::{GameError, Shop};
use tracing::warn;

use crate::game::GameContext;

#[derive(Subcommand, Debug)]
pub enum ShopCommand {
    /// Show the catalog and your coins
    List,

    /// Buy items from the catalog
    Buy {
        item: String,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },

    /// Sell items from your bag
    Sell {
        item: String,
        #[arg(default_value_t = 1)]
        quantity: u32,
    },
}

impl ShopCommand {
    pub fn execute(self, game: &mut GameContext) -> Result<()> {
        let shop = game.shop()?;

        let (item, quantity, selling) = match self {
            Self::List => {
                list(&shop, game);
                return Ok(());
            }
            Self::Buy { item, quantity } => (item, quantity, false),
            Self::Sell { item, quantity } => (item, quantity, true),
        };

        let mut done = 0;
        for _ in 0..quantity {
            let result = if selling {
                shop.sell(&item, &mut game.save.inventory)
            } else {
                shop.buy(&item, &mut game.save.inventory)
            };

            match result {
                Ok(coins) => {
                    done += 1;
                    let verb = if selling { "Sold" } else { "Bought" };
                    println!("{} {} for {} {}", verb, item, coins, shop.currency());
                }
                Err(error) => {
                    warn!("Shop refused: {}", error.error_code());
                    println!("{}", error);
                    break;
                }
            }
        }

        println!(
            "{}: {}",
            shop.currency(),
            game.save.inventory.count(shop.currency())
        );

        if done == 0 {
            bail!("nothing changed hands");
        }
        game.persist()
    }
}

fn list(shop: &Shop, game: &GameContext) {
    for listing in shop.listings() {
        println!(
            "{:<18} buy {:>4}  sell {:>4}",
            listing.name,
            listing.price,
            shop.sell_price(&listing.name)
        );
    }
    println!(
        "{}: {}",
        shop.currency(),
        game.save.inventory.count(shop.currency())
    );
}
