//! Static collision layout for one overworld map.

use std::collections::BTreeSet;

use crate::state::Position;

/// Read-only collision oracle consulted by navigation.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// True when a mover may not enter `position`.
    fn is_blocked(&self, position: Position) -> bool;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }
}

/// Grid of solid cells. Cells outside the map count as blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionMap {
    name: String,
    dimensions: MapDimensions,
    blocked: BTreeSet<Position>,
}

impl CollisionMap {
    /// Tile glyph marking a solid cell in [`Self::from_rows`].
    pub const SOLID: char = '#';

    pub fn new(name: impl Into<String>, dimensions: MapDimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
            blocked: BTreeSet::new(),
        }
    }

    /// Builds a map from ASCII rows, one row per `y`. `#` is solid, anything
    /// else is walkable. Width is the longest row; short rows are padded open.
    pub fn from_rows<S: AsRef<str>>(name: impl Into<String>, rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut map = Self::new(name, MapDimensions::new(width as u32, rows.len() as u32));

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.as_ref().chars().enumerate() {
                if glyph == Self::SOLID {
                    map.block(Position::new(x as i32, y as i32));
                }
            }
        }
        map
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn block(&mut self, position: Position) {
        self.blocked.insert(position);
    }

    pub fn unblock(&mut self, position: Position) {
        self.blocked.remove(&position);
    }

    pub fn blocked_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.blocked.iter().copied()
    }

    /// Snapshot predicate for the pathfinder.
    pub fn predicate(&self) -> impl Fn(Position) -> bool + '_ {
        move |position| self.is_blocked(position)
    }
}

impl MapOracle for CollisionMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn is_blocked(&self, position: Position) -> bool {
        !self.dimensions.contains(position) || self.blocked.contains(&position)
    }
}
