//! Display projections of the catalog and cart
//!
//! Pure functions from state to the view structures the frontend paints.
//! Nothing here is cached; every call reflects the cart at call time.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::menu::Catalog;

/// Format a cent amount with two decimal places, no currency symbol
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// One row of the menu grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub price: String,
    /// Live cart quantity for this item
    pub quantity: u32,
}

/// The menu grid for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuView {
    pub category: String,
    pub items: Vec<MenuItemView>,
}

/// One line of the cart panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// The cart panel: lines in insertion order plus the grand total.
/// An empty cart renders as no lines and a total of "0.00".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
}

/// Project one category of the catalog into menu rows, with each row
/// carrying the current cart quantity. An unknown category yields no rows.
pub fn render_menu(catalog: &Catalog, cart: &Cart, category: &str) -> MenuView {
    let items = catalog.items_in(category).unwrap_or(&[]);
    MenuView {
        category: category.to_string(),
        items: items
            .iter()
            .map(|item| MenuItemView {
                id: item.id.clone(),
                name: item.name.clone(),
                description: item.description.clone(),
                icon: item.icon.clone(),
                price: format_price(u64::from(item.price_cents)),
                quantity: cart.quantity(&item.id),
            })
            .collect(),
    }
}

/// Project the cart into panel lines. Entries whose id is missing from the
/// catalog are skipped and contribute nothing to the total.
pub fn render_cart(catalog: &Catalog, cart: &Cart) -> CartView {
    let mut lines = Vec::new();
    let mut total_cents = 0u64;

    for entry in cart.entries() {
        let Some(item) = catalog.find_item(&entry.item_id) else {
            continue;
        };
        // u64 math: no cart contents can overflow a line or the grand total
        let line_cents = u64::from(item.price_cents) * u64::from(entry.quantity);
        total_cents = total_cents.saturating_add(line_cents);
        lines.push(CartLineView {
            id: item.id.clone(),
            name: item.name.clone(),
            icon: item.icon.clone(),
            unit_price: format_price(u64::from(item.price_cents)),
            quantity: entry.quantity,
            line_total: format_price(line_cents),
        });
    }

    CartView {
        lines,
        total: format_price(total_cents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formatting_pads_cents() {
        assert_eq!(format_price(0), "0.00");
        assert_eq!(format_price(249), "2.49");
        assert_eq!(format_price(1099), "10.99");
        assert_eq!(format_price(2047), "20.47");
        assert_eq!(format_price(500), "5.00");
    }

    #[test]
    fn menu_rows_reflect_cart_at_call_time() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        let before = render_menu(&catalog, &cart, "burgers");
        assert_eq!(before.items.len(), 6);
        assert!(before.items.iter().all(|row| row.quantity == 0));

        cart.adjust_quantity("b2", 3);
        let after = render_menu(&catalog, &cart, "burgers");
        let row = after.items.iter().find(|r| r.id == "b2").unwrap();
        assert_eq!(row.quantity, 3);
        assert_eq!(row.price, "10.99");
    }

    #[test]
    fn empty_cart_renders_zero_total() {
        let catalog = Catalog::standard();
        let cart = Cart::new();
        let view = render_cart(&catalog, &cart);
        assert!(view.lines.is_empty());
        assert_eq!(view.total, "0.00");
    }

    #[test]
    fn cart_lines_carry_totals_in_insertion_order() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.adjust_quantity("d1", 1);
        cart.adjust_quantity("b1", 2);

        let view = render_cart(&catalog, &cart);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].id, "d1");
        assert_eq!(view.lines[0].line_total, "2.49");
        assert_eq!(view.lines[1].id, "b1");
        assert_eq!(view.lines[1].unit_price, "8.99");
        assert_eq!(view.lines[1].line_total, "17.98");
        assert_eq!(view.total, "20.47");
    }

    #[test]
    fn huge_quantities_do_not_overflow_cart_totals() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.adjust_quantity("p5", i32::MAX); // 16.99 each
        cart.adjust_quantity("p5", i32::MAX);

        let quantity = cart.quantity("p5");
        let view = render_cart(&catalog, &cart);
        assert_eq!(view.lines[0].quantity, quantity);
        assert_eq!(
            view.lines[0].line_total,
            format_price(1699 * u64::from(quantity))
        );
        assert_eq!(view.total, view.lines[0].line_total);
    }

    #[test]
    fn unknown_cart_ids_are_dropped_from_the_panel() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.adjust_quantity("ghost", 2);
        let view = render_cart(&catalog, &cart);
        assert!(view.lines.is_empty());
        assert_eq!(view.total, "0.00");
    }
}
