//! Collision map loader.
//!
//! Maps are ASCII rows: `#` marks a solid tile, anything else is walkable.

use std::path::Path;

use game_core::CollisionMap;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    name: String,
    rows: Vec<String>,
}

/// Loader for collision maps from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<CollisionMap> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CollisionMap> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        if data.rows.is_empty() {
            anyhow::bail!("Map '{}' has no rows", data.name);
        }
        Ok(CollisionMap::from_rows(data.name, &data.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MapDimensions, MapOracle, Position};

    #[test]
    fn parses_ascii_rows() {
        let map = MapLoader::parse(
            r#"(
                name: "route1",
                rows: [
                    "....",
                    ".##.",
                    "....",
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(map.name(), "route1");
        assert_eq!(map.dimensions(), MapDimensions::new(4, 3));
        assert!(map.is_blocked(Position::new(1, 1)));
        assert!(!map.is_blocked(Position::new(0, 1)));
    }

    #[test]
    fn rejects_empty_maps() {
        assert!(MapLoader::parse(r#"(name: "void", rows: [])"#).is_err());
    }
}
