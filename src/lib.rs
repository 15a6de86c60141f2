//! QuickBite - Food Ordering Kiosk
//!
//! A Tauri application for browsing a categorized menu, filling a cart,
//! and placing pickup orders. The Rust side owns all ordering state; the
//! frontend invokes commands and paints the returned view structures.

use serde::{Deserialize, Serialize};
use tauri::Manager;

mod cart;
mod commands;
mod error;
mod menu;
mod state;
mod views;

use state::AppState;

/// Get application info
#[tauri::command]
fn get_app_info() -> AppInfo {
    AppInfo {
        name: "QuickBite".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Food Ordering Kiosk".to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // All ordering state lives here; the catalog is fixed for the
            // lifetime of the app, the session starts empty.
            app.manage(AppState::new());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_app_info,
            // Menu commands
            commands::get_categories,
            commands::get_menu,
            commands::select_category,
            // Cart commands
            commands::update_quantity,
            commands::update_cart_item,
            commands::open_cart,
            commands::close_cart,
            commands::get_cart,
            // Order commands
            commands::place_order,
            commands::dismiss_confirmation,
            commands::dismiss_overlays,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
