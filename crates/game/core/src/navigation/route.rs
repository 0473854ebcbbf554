use std::collections::VecDeque;

use tracing::{info, warn};

use super::pathfinder::find_path;
use crate::config::SearchLimits;
use crate::state::Position;

/// The most recent auto-move path, consumed one cell at a time.
///
/// Planning again discards whatever was left of the previous route. Obstacles
/// are not re-checked while following it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationRoute {
    steps: VecDeque<Position>,
}

impl NavigationRoute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current route. Returns true when a non-empty path was found.
    pub fn plan(
        &mut self,
        start: Position,
        goal: Position,
        is_blocked: impl Fn(Position) -> bool,
        limits: &SearchLimits,
    ) -> bool {
        info!("Start navigation: {} -> {}", start, goal);
        self.steps = find_path(start, goal, is_blocked, limits).into();

        if self.steps.is_empty() {
            warn!("No path found to destination {}", goal);
            false
        } else {
            info!("Path found! Length: {}", self.steps.len());
            true
        }
    }

    /// The cell the mover is heading to next.
    pub fn next_step(&self) -> Option<Position> {
        self.steps.front().copied()
    }

    /// Marks the next cell as reached and returns it.
    pub fn advance(&mut self) -> Option<Position> {
        self.steps.pop_front()
    }

    pub fn cancel(&mut self) {
        self.steps.clear();
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    pub fn is_active(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn steps(&self) -> impl Iterator<Item = Position> + '_ {
        self.steps.iter().copied()
    }
}
