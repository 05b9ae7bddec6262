// UI Components
pub mod command_bar;
pub mod header;
pub mod status_bar;
pub mod theme_menu;
pub mod tile_card;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use header::Header;
pub use status_bar::StatusBar;
pub use theme_menu::{ThemeMenu, ThemeMenuState};
pub use tile_card::TileCard;
pub use warning::WarningScreen;
