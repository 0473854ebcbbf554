//! Plan a walking route across a collision map.

use std::collections::BTreeSet;

use anyhow::Result;
use clap::Args;
use game_core::{CollisionMap, MapOracle, NavigationRoute, Position};

use crate::game::GameContext;

#[derive(Args, Debug)]
pub struct Navigate {
    /// Map name under `maps/`
    #[arg(long, default_value = "town")]
    map: String,

    /// Start cell as `x,y`
    #[arg(long, value_parser = parse_position)]
    from: Position,

    /// Goal cell as `x,y`
    #[arg(long, value_parser = parse_position)]
    to: Position,

    /// Print every step instead of drawing the map
    #[arg(long)]
    steps: bool,
}

impl Navigate {
    pub fn execute(self, game: &GameContext) -> Result<()> {
        let map = game.factory.load_map(&self.map)?;

        let mut route = NavigationRoute::new();
        if !route.plan(self.from, self.to, map.predicate(), &game.config.navigation) {
            println!("No path from {} to {} on {}", self.from, self.to, map.name());
            return Ok(());
        }

        println!("Path found! Length: {}", route.remaining());
        if self.steps {
            let mut index = 1;
            while let Some(step) = route.advance() {
                println!("{:>4}. {}", index, step);
                index += 1;
            }
        } else {
            let path: BTreeSet<Position> = route.steps().collect();
            for row in render(&map, self.from, self.to, &path) {
                println!("{}", row);
            }
        }
        Ok(())
    }
}

/// Draws the map with `S` at the start, `*` on the path and `G` at the goal.
fn render(
    map: &CollisionMap,
    start: Position,
    goal: Position,
    path: &BTreeSet<Position>,
) -> Vec<String> {
    let dimensions = map.dimensions();

    (0..dimensions.height as i32)
        .map(|y| {
            (0..dimensions.width as i32)
                .map(|x| {
                    let cell = Position::new(x, y);
                    if cell == start {
                        'S'
                    } else if cell == goal {
                        'G'
                    } else if path.contains(&cell) {
                        '*'
                    } else if map.is_blocked(cell) {
                        CollisionMap::SOLID
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

fn parse_position(raw: &str) -> Result<Position, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", raw))?;
    let x = x.trim().parse().map_err(|_| format!("bad x in '{}'", raw))?;
    let y = y.trim().parse().map_err(|_| format!("bad y in '{}'", raw))?;
    Ok(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_position("3,4"), Ok(Position::new(3, 4)));
        assert_eq!(parse_position(" 1 , 2"), Ok(Position::new(1, 2)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,4").is_err());
    }

    #[test]
    fn render_marks_route() {
        let map = CollisionMap::from_rows("strip", &["....", ".#.."]);
        let path: BTreeSet<Position> = [Position::new(1, 0), Position::new(2, 0)].into();

        let rows = render(&map, Position::new(0, 0), Position::new(2, 0), &path);

        assert_eq!(rows, vec!["S*G.".to_string(), ".#..".to_string()]);
    }
}
