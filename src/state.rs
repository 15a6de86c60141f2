//! Application state management

use std::sync::Mutex;

use crate::cart::Cart;
use crate::error::AppError;
use crate::menu::{Catalog, DEFAULT_CATEGORY};

/// Where the order flow stands for this session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStage {
    /// Browsing and filling the cart
    Idle,
    /// Order placed; the confirmation with this number is showing
    Confirming { order_number: u8 },
}

/// All mutable per-session state. Transitions live here, away from Tauri,
/// so they are testable without a display.
#[derive(Debug)]
pub struct Session {
    pub cart: Cart,
    pub selected_category: String,
    /// Whether the cart panel is showing
    pub cart_open: bool,
    pub stage: OrderStage,
}

impl Session {
    pub fn new() -> Self {
        Self {
            cart: Cart::new(),
            selected_category: DEFAULT_CATEGORY.to_string(),
            cart_open: false,
            stage: OrderStage::Idle,
        }
    }

    /// Switch the menu view to another category
    pub fn select_category(&mut self, catalog: &Catalog, name: &str) -> Result<(), AppError> {
        if !catalog.has_category(name) {
            return Err(AppError::UnknownCategory(name.to_string()));
        }
        self.selected_category = name.to_string();
        Ok(())
    }

    /// Finalize the order: rejects an empty cart with no state change,
    /// otherwise clears the cart, closes the cart panel, and moves to the
    /// confirmation stage with the given order number.
    pub fn place_order(&mut self, order_number: u8) -> Result<u8, AppError> {
        if self.cart.is_empty() {
            return Err(AppError::EmptyCart);
        }
        self.cart.clear();
        self.cart_open = false;
        self.stage = OrderStage::Confirming { order_number };
        Ok(order_number)
    }

    /// Hide the confirmation and return to browsing
    pub fn dismiss_confirmation(&mut self) {
        self.stage = OrderStage::Idle;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state shared across Tauri commands
pub struct AppState {
    /// Immutable menu catalog, built once at startup
    pub catalog: Catalog,
    /// Mutable session state behind a lock; commands run one at a time
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::standard(),
            session: Mutex::new(Session::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
