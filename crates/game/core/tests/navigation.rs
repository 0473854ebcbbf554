use game_core::{CollisionMap, MapOracle, NavigationRoute, Position, SearchLimits, find_path};

fn town() -> CollisionMap {
    CollisionMap::from_rows(
        "town",
        &[
            "..........",
            ".####.....",
            ".#..#.....",
            ".#..#.###.",
            ".#........",
            "..........",
        ],
    )
}

#[test]
fn path_through_collision_map_avoids_walls() {
    let map = town();
    let path = find_path(
        Position::new(0, 0),
        Position::new(2, 2),
        map.predicate(),
        &SearchLimits::default(),
    );

    assert!(!path.is_empty());
    assert_eq!(path.last(), Some(&Position::new(2, 2)));
    assert!(path.iter().all(|&cell| !map.is_blocked(cell)));
    // in through the gap at (2, 4)
    assert!(path.contains(&Position::new(2, 4)));
}

#[test]
fn off_map_goal_is_blocked() {
    let map = town();
    let path = find_path(
        Position::new(0, 0),
        Position::new(20, 0),
        map.predicate(),
        &SearchLimits::default(),
    );
    assert!(path.is_empty());
}

#[test]
fn route_follows_path_cell_by_cell() {
    let map = town();
    let mut route = NavigationRoute::new();
    let start = Position::new(9, 5);

    assert!(route.plan(start, Position::new(5, 0), map.predicate(), &SearchLimits::default()));

    let mut position = start;
    while let Some(next) = route.advance() {
        assert_eq!(position.manhattan_distance(next), 1);
        position = next;
    }
    assert_eq!(position, Position::new(5, 0));
}

#[test]
fn path_length_is_shortest() {
    let path = find_path(
        Position::new(0, 0),
        Position::new(2, 2),
        |_| false,
        &SearchLimits::default(),
    );
    assert_eq!(path.len(), 4);
}
