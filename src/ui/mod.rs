// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{LayoutManager, LayoutMode};

// Re-export theme types
pub use theme::{Theme, ThemeManager};

// Re-export components
pub use components::{
    CommandBar, Header, StatusBar, ThemeMenu, ThemeMenuState, TileCard, WarningScreen,
};
