//! Species database: static, authored creature templates.
//!
//! The database is external content, so every lookup is lenient. A miss never
//! fails; it resolves to [`SpeciesDefinition::unknown`] and logs a warning.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

/// Identifier keying a species in the database (e.g. `"sproutkit"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeciesId(pub String);

impl SpeciesId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpeciesId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Elemental type of a species.
///
/// Advantage is a cyclic triangle: fire beats grass, water beats fire,
/// grass beats water.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ElementType {
    #[default]
    Grass,
    Fire,
    Water,
}

impl ElementType {
    /// The type this one deals bonus damage to.
    pub const fn advantage_over(self) -> ElementType {
        match self {
            ElementType::Fire => ElementType::Grass,
            ElementType::Water => ElementType::Fire,
            ElementType::Grass => ElementType::Water,
        }
    }

    pub fn beats(self, other: ElementType) -> bool {
        self.advantage_over() == other
    }
}

// Content may spell types in any case; unknown spellings fall back to grass.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ElementType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|_| {
            warn!("Unknown element type '{}', defaulting to grass", raw);
            ElementType::default()
        }))
    }
}

/// Level-triggered transformation into another species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionRule {
    /// Minimum level at which the evolution fires. Defaults to 100.
    #[cfg_attr(feature = "serde", serde(default = "EvolutionRule::default_level"))]
    pub level: u32,
    /// Empty means the rule never fires.
    #[cfg_attr(feature = "serde", serde(default))]
    pub next_id: SpeciesId,
}

impl EvolutionRule {
    pub const DEFAULT_LEVEL: u32 = 100;

    #[cfg(feature = "serde")]
    fn default_level() -> u32 {
        Self::DEFAULT_LEVEL
    }

    pub fn new(level: u32, next_id: impl Into<SpeciesId>) -> Self {
        Self {
            level,
            next_id: next_id.into(),
        }
    }
}

/// Static template for a creature kind. Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpeciesDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub element: ElementType,
    pub base_hp: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub evolution: Option<EvolutionRule>,
}

impl SpeciesDefinition {
    pub const UNKNOWN_NAME: &'static str = "Unknown";
    pub const DEFAULT_BASE_HP: u32 = 50;
    pub const DEFAULT_BASE_ATTACK: u32 = 10;
    pub const DEFAULT_BASE_DEFENSE: u32 = 10;

    pub fn new(
        name: impl Into<String>,
        element: ElementType,
        base_hp: u32,
        base_attack: u32,
        base_defense: u32,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            base_hp,
            base_attack,
            base_defense,
            evolution: None,
        }
    }

    /// Placeholder used whenever an id is missing from the database.
    pub fn unknown() -> Self {
        Self::new(
            Self::UNKNOWN_NAME,
            ElementType::Grass,
            Self::DEFAULT_BASE_HP,
            Self::DEFAULT_BASE_ATTACK,
            Self::DEFAULT_BASE_DEFENSE,
        )
    }

    pub fn with_evolution(mut self, level: u32, next_id: impl Into<SpeciesId>) -> Self {
        self.evolution = Some(EvolutionRule::new(level, next_id));
        self
    }
}

impl Default for SpeciesDefinition {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Read-only species lookup injected into the creature model.
pub trait SpeciesOracle: Send + Sync {
    fn definition(&self, id: &SpeciesId) -> Option<SpeciesDefinition>;

    /// Returns every definition, in a stable order.
    fn all_definitions(&self) -> Vec<(SpeciesId, SpeciesDefinition)>;

    /// Lenient lookup: falls back to [`SpeciesDefinition::unknown`] with a warning.
    fn resolve(&self, id: &SpeciesId) -> SpeciesDefinition {
        self.definition(id).unwrap_or_else(|| {
            warn!("Species '{}' not found in database, using defaults", id);
            SpeciesDefinition::unknown()
        })
    }
}

/// In-memory species database ordered by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeciesTable {
    definitions: BTreeMap<SpeciesId, SpeciesDefinition>,
}

impl SpeciesTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<SpeciesId>, definition: SpeciesDefinition) {
        self.definitions.insert(id.into(), definition);
    }

    /// Builder-style insert.
    pub fn with(mut self, id: impl Into<SpeciesId>, definition: SpeciesDefinition) -> Self {
        self.insert(id, definition);
        self
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<(SpeciesId, SpeciesDefinition)> for SpeciesTable {
    fn from_iter<T: IntoIterator<Item = (SpeciesId, SpeciesDefinition)>>(iter: T) -> Self {
        Self {
            definitions: iter.into_iter().collect(),
        }
    }
}

impl SpeciesOracle for SpeciesTable {
    fn definition(&self, id: &SpeciesId) -> Option<SpeciesDefinition> {
        self.definitions.get(id).cloned()
    }

    fn all_definitions(&self) -> Vec<(SpeciesId, SpeciesDefinition)> {
        self.definitions
            .iter()
            .map(|(id, def)| (id.clone(), def.clone()))
            .collect()
    }
}
