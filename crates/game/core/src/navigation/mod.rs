//! Grid navigation for click-to-move.
//!
//! [`find_path`] runs synchronously to completion; [`NavigationRoute`] holds the
//! resulting cells for a movement executor that steps one tile at a time.
mod pathfinder;
mod route;

pub use pathfinder::find_path;
pub use route::NavigationRoute;
