//! Session cart state
//!
//! Entries keep the insertion order of the first addition, so the cart panel
//! lists items in the order the customer first picked them. An item with
//! quantity zero is removed, never stored.

use crate::menu::Catalog;

/// One cart line: an item id and how many of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub item_id: String,
    pub quantity: u32,
}

/// Mapping from item id to a positive quantity
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a signed quantity change, clamping at zero and saturating at
    /// `u32::MAX`. Returns the new quantity. Ids not yet in the cart start
    /// at zero; an entry that reaches zero is removed.
    pub fn adjust_quantity(&mut self, item_id: &str, delta: i32) -> u32 {
        let current = self.quantity(item_id);
        let next = (i64::from(current) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32;

        let pos = self.entries.iter().position(|e| e.item_id == item_id);
        match (pos, next) {
            (Some(i), 0) => {
                self.entries.remove(i);
            }
            (Some(i), n) => self.entries[i].quantity = n,
            (None, 0) => {}
            (None, n) => self.entries.push(CartEntry {
                item_id: item_id.to_string(),
                quantity: n,
            }),
        }
        next
    }

    /// Stored quantity for an id, zero if absent
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item_id == item_id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// Sum of all stored quantities, saturating at `u32::MAX`
    pub fn total_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.quantity))
    }

    /// Total price in cents. Ids missing from the catalog are skipped.
    /// Accumulates in `u64` so no cart contents can overflow it.
    pub fn total_price_cents(&self, catalog: &Catalog) -> u64 {
        self.entries
            .iter()
            .filter_map(|e| {
                catalog
                    .find_item(&e.item_id)
                    .map(|item| u64::from(item.price_cents) * u64::from(e.quantity))
            })
            .fold(0u64, u64::saturating_add)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order of first addition
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_clamps_at_zero() {
        let mut cart = Cart::new();
        assert_eq!(cart.adjust_quantity("b1", -1), 0);
        assert_eq!(cart.quantity("b1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn entry_removed_when_quantity_reaches_zero() {
        let mut cart = Cart::new();
        cart.adjust_quantity("b1", 2);
        cart.adjust_quantity("b1", -2);
        assert!(cart.entries().is_empty());
        assert_eq!(cart.quantity("b1"), 0);
    }

    #[test]
    fn no_sequence_leaves_a_non_positive_entry() {
        let mut cart = Cart::new();
        for delta in [3, -5, 1, 1, -1, -1, -1, 4, -2, -10, 2] {
            cart.adjust_quantity("p2", delta);
            assert!(cart.entries().iter().all(|e| e.quantity > 0));
            assert_eq!(cart.total_count(), cart.quantity("p2"));
        }
    }

    #[test]
    fn drop_below_zero_and_back_matches_direct_set() {
        let mut cart = Cart::new();
        cart.adjust_quantity("d2", 2);
        cart.adjust_quantity("d2", -5);
        cart.adjust_quantity("d2", 3);

        let mut direct = Cart::new();
        direct.adjust_quantity("d2", 3);
        assert_eq!(cart.quantity("d2"), direct.quantity("d2"));
    }

    #[test]
    fn totals_match_catalog_prices() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.adjust_quantity("b1", 2); // 8.99 each
        cart.adjust_quantity("d1", 1); // 2.49
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.total_price_cents(&catalog), 2047);
    }

    #[test]
    fn unknown_ids_are_skipped_in_price_total() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.adjust_quantity("ghost", 4);
        cart.adjust_quantity("d1", 1);
        assert_eq!(cart.total_count(), 5);
        assert_eq!(cart.total_price_cents(&catalog), 249);
    }

    #[test]
    fn entries_keep_first_addition_order() {
        let mut cart = Cart::new();
        cart.adjust_quantity("p1", 1);
        cart.adjust_quantity("b1", 1);
        cart.adjust_quantity("p1", 2);
        let ids: Vec<_> = cart.entries().iter().map(|e| e.item_id.as_str()).collect();
        assert_eq!(ids, ["p1", "b1"]);
    }

    #[test]
    fn extreme_deltas_saturate_instead_of_wrapping() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        let q1 = cart.adjust_quantity("p5", i32::MAX); // 16.99 each
        let q2 = cart.adjust_quantity("p5", i32::MAX);
        let q3 = cart.adjust_quantity("p5", i32::MAX);
        assert_eq!(q1, i32::MAX as u32);
        assert!(q2 > q1);
        // A positive delta never decreases the quantity; it pins at the cap
        assert_eq!(q3, u32::MAX);

        // Derivations stay total over the saturated quantity
        assert_eq!(cart.total_count(), u32::MAX);
        assert_eq!(
            cart.total_price_cents(&catalog),
            1699u64 * u64::from(u32::MAX)
        );

        // And the zero clamp still holds on the way back down
        cart.adjust_quantity("p5", i32::MIN);
        assert_eq!(cart.adjust_quantity("p5", i32::MIN), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut cart = Cart::new();
        cart.adjust_quantity("b3", 2);
        cart.adjust_quantity("d4", 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
    }
}
