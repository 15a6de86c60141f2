//! Cart commands
//!
//! Quantity changes come from two contexts: the menu grid (only the item's
//! counter and the badge need refreshing) and the cart panel (the whole
//! panel is re-rendered too). Each command returns exactly what its context
//! must repaint.

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;
use crate::views::{render_cart, CartView};

/// Result of a menu-context quantity change
#[derive(Debug, Serialize, Deserialize)]
pub struct QuantityUpdate {
    pub item_id: String,
    /// New quantity for this item
    pub quantity: u32,
    /// New cart badge count
    pub cart_count: u32,
}

/// Result of a cart-context quantity change
#[derive(Debug, Serialize, Deserialize)]
pub struct CartUpdate {
    pub item_id: String,
    pub quantity: u32,
    pub cart_count: u32,
    /// Re-rendered cart panel
    pub cart: CartView,
}

/// Change an item's quantity from the menu grid
#[tauri::command]
pub fn update_quantity(
    state: State<'_, AppState>,
    item_id: String,
    delta: i32,
) -> Result<QuantityUpdate, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    let quantity = session.cart.adjust_quantity(&item_id, delta);
    Ok(QuantityUpdate {
        item_id,
        quantity,
        cart_count: session.cart.total_count(),
    })
}

/// Change an item's quantity from inside the cart panel
#[tauri::command]
pub fn update_cart_item(
    state: State<'_, AppState>,
    item_id: String,
    delta: i32,
) -> Result<CartUpdate, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    let quantity = session.cart.adjust_quantity(&item_id, delta);
    Ok(CartUpdate {
        item_id,
        quantity,
        cart_count: session.cart.total_count(),
        cart: render_cart(&state.catalog, &session.cart),
    })
}

/// Show the cart panel and return its contents
#[tauri::command]
pub fn open_cart(state: State<'_, AppState>) -> Result<CartView, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.cart_open = true;
    Ok(render_cart(&state.catalog, &session.cart))
}

/// Hide the cart panel
#[tauri::command]
pub fn close_cart(state: State<'_, AppState>) -> Result<(), String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.cart_open = false;
    Ok(())
}

/// Re-render the cart panel without changing anything
#[tauri::command]
pub fn get_cart(state: State<'_, AppState>) -> Result<CartView, String> {
    let session = state.session.lock().map_err(|e| e.to_string())?;
    Ok(render_cart(&state.catalog, &session.cart))
}
