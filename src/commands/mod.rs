//! Tauri command handlers for QuickBite

pub mod cart;
pub mod menu;
pub mod orders;

// Re-export all commands
pub use cart::*;
pub use menu::*;
pub use orders::*;
