//! Breadth-first grid search.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, warn};

use crate::config::SearchLimits;
use crate::state::Position;

/// Shortest 4-connected path from `start` to `goal`.
///
/// Returns the cells strictly after `start`, ending at `goal`. Empty means no
/// movement: start equals goal, the goal is blocked, no route exists, or the
/// search hit [`SearchLimits::max_expansions`]. Callers cannot and should not
/// tell these apart.
///
/// Both axes are bounded to `0..=limits.max_coordinate`. Neighbours are visited
/// up, down, left, right, so ties resolve to the first-discovered route.
pub fn find_path(
    start: Position,
    goal: Position,
    is_blocked: impl Fn(Position) -> bool,
    limits: &SearchLimits,
) -> Vec<Position> {
    if start == goal {
        return Vec::new();
    }

    if is_blocked(goal) {
        warn!("No path: destination {} is blocked", goal);
        return Vec::new();
    }

    let in_bounds = |cell: Position| {
        (0..=limits.max_coordinate).contains(&cell.x)
            && (0..=limits.max_coordinate).contains(&cell.y)
    };

    // Doubles as the visited set; `start` maps to itself.
    let mut came_from = BTreeMap::from([(start, start)]);
    let mut frontier = VecDeque::from([start]);
    let mut expansions = 0usize;

    while let Some(current) = frontier.pop_front() {
        expansions += 1;
        if expansions > limits.max_expansions {
            warn!(
                "No path: search exceeded {} expansions ({} -> {})",
                limits.max_expansions, start, goal
            );
            return Vec::new();
        }

        for neighbor in current.cardinal_neighbors() {
            if !in_bounds(neighbor) || came_from.contains_key(&neighbor) || is_blocked(neighbor) {
                continue;
            }

            came_from.insert(neighbor, current);
            if neighbor == goal {
                let path = reconstruct(&came_from, start, goal);
                debug!("Path {} -> {} found, {} steps", start, goal, path.len());
                return path;
            }
            frontier.push_back(neighbor);
        }
    }

    debug!("No path: {} unreachable from {}", goal, start);
    Vec::new()
}

fn reconstruct(came_from: &BTreeMap<Position, Position>, start: Position, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while let Some(&previous) = came_from.get(&cursor) {
        if previous == start {
            break;
        }
        path.push(previous);
        cursor = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_: Position) -> bool {
        false
    }

    #[test]
    fn open_grid_path_has_manhattan_length() {
        let path = find_path(
            Position::new(0, 0),
            Position::new(2, 2),
            open,
            &SearchLimits::default(),
        );

        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&Position::new(2, 2)));
        assert!(!path.contains(&Position::new(0, 0)));
    }

    #[test]
    fn consecutive_cells_are_adjacent() {
        let start = Position::new(3, 7);
        let path = find_path(start, Position::new(9, 1), open, &SearchLimits::default());

        let mut previous = start;
        for cell in path {
            assert_eq!(previous.manhattan_distance(cell), 1);
            previous = cell;
        }
    }

    #[test]
    fn first_step_prefers_down_over_right() {
        // up and left are out of bounds from the origin
        let path = find_path(
            Position::new(0, 0),
            Position::new(1, 1),
            open,
            &SearchLimits::default(),
        );
        assert_eq!(path, vec![Position::new(0, 1), Position::new(1, 1)]);
    }

    #[test]
    fn same_cell_needs_no_movement() {
        let here = Position::new(4, 4);
        assert!(find_path(here, here, open, &SearchLimits::default()).is_empty());
    }

    #[test]
    fn blocked_goal_fails_without_search() {
        let goal = Position::new(2, 2);
        let path = find_path(
            Position::new(0, 0),
            goal,
            |cell| cell == goal,
            &SearchLimits::default(),
        );
        assert!(path.is_empty());
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        // goal (5, 5) is open but boxed in by its four neighbours
        let walls = [(5, 4), (5, 6), (4, 5), (6, 5)].map(Position::from);
        let path = find_path(
            Position::new(0, 0),
            Position::new(5, 5),
            |cell| walls.contains(&cell),
            &SearchLimits::default(),
        );
        assert!(path.is_empty());
    }

    #[test]
    fn goal_beyond_coordinate_bound_is_unreachable() {
        let limits = SearchLimits {
            max_coordinate: 5,
            ..SearchLimits::default()
        };
        assert!(find_path(Position::new(0, 0), Position::new(6, 0), open, &limits).is_empty());
        assert_eq!(
            find_path(Position::new(0, 0), Position::new(5, 0), open, &limits).len(),
            5
        );
    }

    #[test]
    fn expansion_cap_reports_no_path() {
        let limits = SearchLimits {
            max_expansions: 10,
            ..SearchLimits::default()
        };
        assert!(find_path(Position::new(0, 0), Position::new(50, 50), open, &limits).is_empty());
    }

    #[test]
    fn routes_around_a_wall() {
        // vertical wall at x = 2 from y = 0..=3, gap at y = 4
        let path = find_path(
            Position::new(0, 0),
            Position::new(4, 0),
            |cell| cell.x == 2 && cell.y <= 3,
            &SearchLimits::default(),
        );

        assert_eq!(path.len(), 12);
        assert!(path.contains(&Position::new(2, 4)));
    }
}
