//! Player commands accepted during `PLAYER_TURN`.

use crate::config::ItemRules;

/// Consumables usable from the battle menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleItem {
    /// Restores a fixed amount of HP, capped at max.
    Heal,
    /// Raises attack for the rest of the battle.
    Strength,
    /// Raises defense for the rest of the battle.
    Defense,
}

impl BattleItem {
    /// Inventory name of the item backing this effect.
    pub fn item_name<'a>(&self, rules: &'a ItemRules) -> &'a str {
        match self {
            Self::Heal => &rules.heal_item,
            Self::Strength => &rules.attack_item,
            Self::Defense => &rules.defense_item,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleAction {
    Fight,
    Catch,
    Switch,
    UseItem(BattleItem),
    Run,
}

impl BattleAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fight => "fight",
            Self::Catch => "catch",
            Self::Switch => "switch",
            Self::UseItem(BattleItem::Heal) => "heal",
            Self::UseItem(BattleItem::Strength) => "strength",
            Self::UseItem(BattleItem::Defense) => "defense",
            Self::Run => "run",
        }
    }
}

impl core::str::FromStr for BattleAction {
    type Err = strum::ParseError;

    /// Accepts `fight`, `catch`, `switch`, `run`, or any [`BattleItem`] name.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fight" => Ok(Self::Fight),
            "catch" => Ok(Self::Catch),
            "switch" => Ok(Self::Switch),
            "run" => Ok(Self::Run),
            other => other.parse().map(Self::UseItem),
        }
    }
}

impl core::fmt::Display for BattleAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_commands() {
        assert_eq!("Fight".parse::<BattleAction>(), Ok(BattleAction::Fight));
        assert_eq!(
            " heal ".parse::<BattleAction>(),
            Ok(BattleAction::UseItem(BattleItem::Heal))
        );
        assert!("dance".parse::<BattleAction>().is_err());
    }

    #[test]
    fn item_names_follow_rules() {
        let rules = ItemRules::default();
        assert_eq!(BattleItem::Heal.item_name(&rules), "Heal Potion");
        assert_eq!(BattleItem::Strength.item_name(&rules), "Strength Potion");
        assert_eq!(BattleItem::Defense.item_name(&rules), "Defense Potion");
    }
}
