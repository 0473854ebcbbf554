//! Species database loader.

use std::path::Path;

use game_core::{SpeciesOracle, SpeciesTable};

use crate::loaders::{LoadResult, is_json, read_file};

/// Loader for the species database.
///
/// Accepts a RON map (`species.ron`) or the same map as JSON, keyed by species
/// id. Evolution targets that are not in the database are kept but reported,
/// since evolving into them falls back to placeholder stats.
pub struct SpeciesLoader;

impl SpeciesLoader {
    pub fn load(path: &Path) -> LoadResult<SpeciesTable> {
        let content = read_file(path)?;
        let table = if is_json(path) {
            Self::parse_json(&content)?
        } else {
            Self::parse_ron(&content)?
        };

        for (id, definition) in table.all_definitions() {
            if let Some(rule) = &definition.evolution
                && table.definition(&rule.next_id).is_none()
            {
                tracing::warn!(
                    "Species '{}' evolves into unknown species '{}'",
                    id,
                    rule.next_id
                );
            }
        }

        tracing::info!("Loaded {} species from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn parse_ron(content: &str) -> LoadResult<SpeciesTable> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse species RON: {}", e))
    }

    pub fn parse_json(content: &str) -> LoadResult<SpeciesTable> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse species JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ElementType, EvolutionRule, SpeciesId};

    const SPECIES_RON: &str = r#"{
        "sproutkit": (
            name: "Sproutkit",
            type: "grass",
            base_hp: 45,
            base_attack: 12,
            base_defense: 11,
            evolution: Some((level: 16, next_id: "bloomcat")),
        ),
        "bloomcat": (
            name: "Bloomcat",
            type: "Grass",
            base_hp: 70,
            base_attack: 20,
            base_defense: 18,
        ),
    }"#;

    #[test]
    fn parses_ron_database() {
        let table = SpeciesLoader::parse_ron(SPECIES_RON).unwrap();
        let sproutkit = table.definition(&SpeciesId::from("sproutkit")).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(sproutkit.base_hp, 45);
        assert_eq!(sproutkit.evolution, Some(EvolutionRule::new(16, "bloomcat")));
        assert_eq!(
            table.definition(&SpeciesId::from("bloomcat")).unwrap().element,
            ElementType::Grass
        );
    }

    #[test]
    fn json_entries_tolerate_missing_fields() {
        let table = SpeciesLoader::parse_json(
            r#"{ "emberpup": { "name": "Emberpup", "type": "fire", "base_attack": 14 },
                 "oddity":   { "name": "Oddity", "type": "plasma" } }"#,
        )
        .unwrap();

        let emberpup = table.definition(&SpeciesId::from("emberpup")).unwrap();
        assert_eq!(emberpup.element, ElementType::Fire);
        assert_eq!(emberpup.base_attack, 14);
        assert_eq!(emberpup.base_hp, 50);
        assert_eq!(emberpup.evolution, None);

        let oddity = table.definition(&SpeciesId::from("oddity")).unwrap();
        assert_eq!(oddity.element, ElementType::Grass);
    }

    #[test]
    fn evolution_level_defaults_to_100() {
        let table = SpeciesLoader::parse_ron(
            r#"{
                "pebblit": (name: "Pebblit", evolution: Some((next_id: "boulderox"))),
            }"#,
        )
        .unwrap();

        let pebblit = table.definition(&SpeciesId::from("pebblit")).unwrap();
        assert_eq!(pebblit.evolution, Some(EvolutionRule::new(100, "boulderox")));
    }

    #[test]
    fn load_picks_format_from_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let ron_path = dir.path().join("species.ron");
        std::fs::write(&ron_path, SPECIES_RON).unwrap();
        let json_path = dir.path().join("species.json");
        std::fs::write(&json_path, r#"{ "bloomcat": { "name": "Bloomcat" } }"#).unwrap();

        assert_eq!(SpeciesLoader::load(&ron_path).unwrap().len(), 2);
        assert_eq!(SpeciesLoader::load(&json_path).unwrap().len(), 1);
        assert!(SpeciesLoader::load(&dir.path().join("missing.ron")).is_err());
    }
}
