// Data Models
pub mod content;
pub mod fixtures;
pub mod grid_state;
pub mod tile;

pub use content::{resolve_tile, TileContent, TileKind};
pub use fixtures::MockFeed;
pub use grid_state::{Direction, GridBlock, GridState};
pub use tile::{Orientation, TilePlacement};
