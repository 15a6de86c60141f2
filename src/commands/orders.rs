//! Order placement commands

use rand::Rng;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::{AppState, OrderStage};
use crate::views::{render_menu, MenuView};

/// Acknowledgment returned after a successful checkout
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Two-digit pickup number shown on the confirmation
    pub order_number: u8,
    /// Re-rendered menu, all quantities back at zero
    pub menu: MenuView,
}

/// Draw a pickup number. Uniform over 10..=99; numbers may repeat across
/// orders, which is fine for a counter display.
fn draw_order_number() -> u8 {
    rand::thread_rng().gen_range(10..=99)
}

/// Finalize the order. Fails with the empty-cart notification when nothing
/// is in the cart; otherwise clears the cart, closes the cart panel, and
/// returns the confirmation.
#[tauri::command]
pub fn place_order(state: State<'_, AppState>) -> Result<OrderConfirmation, String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    let order_number = session
        .place_order(draw_order_number())
        .map_err(|e| e.to_string())?;
    log::info!("order placed, pickup number {}", order_number);
    Ok(OrderConfirmation {
        order_number,
        menu: render_menu(&state.catalog, &session.cart, &session.selected_category),
    })
}

/// Hide the order confirmation
#[tauri::command]
pub fn dismiss_confirmation(state: State<'_, AppState>) -> Result<(), String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.dismiss_confirmation();
    Ok(())
}

/// Outside-click gesture: dismiss whichever overlay is showing
#[tauri::command]
pub fn dismiss_overlays(state: State<'_, AppState>) -> Result<(), String> {
    let mut session = state.session.lock().map_err(|e| e.to_string())?;
    session.cart_open = false;
    if matches!(session.stage, OrderStage::Confirming { .. }) {
        session.dismiss_confirmation();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_numbers_stay_two_digit() {
        for _ in 0..500 {
            let n = draw_order_number();
            assert!((10..=99).contains(&n), "out of range: {}", n);
        }
    }
}
