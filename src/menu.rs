//! Static menu catalog
//!
//! The catalog is built once at startup and never mutated. Lookups use a
//! linear scan; the catalog is small and static, so no index is kept.

use serde::{Deserialize, Serialize};

/// Category shown when a session starts
pub const DEFAULT_CATEGORY: &str = "burgers";

/// A single purchasable menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique across all categories
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in integer cents, so totals stay exact
    pub price_cents: u32,
    /// Emoji shown in place of a product photo
    pub icon: String,
}

/// A named, ordered group of menu items
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// The full menu, grouped by category
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

fn item(id: &str, name: &str, description: &str, price_cents: u32, icon: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        icon: icon.to_string(),
    }
}

impl Catalog {
    /// The standard QuickBite menu
    pub fn standard() -> Self {
        Self {
            categories: vec![
                Category {
                    name: "burgers".to_string(),
                    items: vec![
                        item("b1", "Classic Burger", "Juicy beef patty with fresh lettuce, tomato, and our special sauce", 899, "🍔"),
                        item("b2", "Cheese Burger", "Double cheese, caramelized onions, and crispy bacon", 1099, "🍔"),
                        item("b3", "Veggie Burger", "Grilled veggie patty with avocado and sprouts", 949, "🥬"),
                        item("b4", "BBQ Burger", "Smoky BBQ sauce, onion rings, and cheddar cheese", 1199, "🍔"),
                        item("b5", "Spicy Burger", "Jalapeños, pepper jack cheese, and sriracha mayo", 1049, "🌶️"),
                        item("b6", "Mushroom Swiss", "Sautéed mushrooms and melted Swiss cheese", 1149, "🍄"),
                    ],
                },
                Category {
                    name: "pizzas".to_string(),
                    items: vec![
                        item("p1", "Margherita", "Fresh tomatoes, mozzarella, and basil on thin crust", 1299, "🍕"),
                        item("p2", "Pepperoni", "Classic pepperoni with extra cheese", 1499, "🍕"),
                        item("p3", "Hawaiian", "Ham, pineapple, and mozzarella cheese", 1399, "🍍"),
                        item("p4", "Veggie Supreme", "Bell peppers, olives, mushrooms, and onions", 1349, "🥗"),
                        item("p5", "Meat Lovers", "Pepperoni, sausage, bacon, and ham", 1699, "🥓"),
                        item("p6", "BBQ Chicken", "Grilled chicken, BBQ sauce, and red onions", 1549, "🍗"),
                    ],
                },
                Category {
                    name: "drinks".to_string(),
                    items: vec![
                        item("d1", "Cola", "Ice-cold classic cola drink", 249, "🥤"),
                        item("d2", "Lemonade", "Fresh squeezed lemonade with mint", 349, "🍋"),
                        item("d3", "Iced Tea", "Refreshing iced tea with lemon", 299, "🧊"),
                        item("d4", "Milkshake", "Creamy vanilla milkshake with whipped cream", 499, "🥛"),
                        item("d5", "Orange Juice", "Freshly squeezed orange juice", 399, "🍊"),
                        item("d6", "Coffee", "Premium roasted coffee, hot or iced", 349, "☕"),
                    ],
                },
            ],
        }
    }

    /// Category names in menu order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Items in the named category, or `None` if no such category exists
    pub fn items_in(&self, category: &str) -> Option<&[MenuItem]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.items.as_slice())
    }

    /// Find an item by id, scanning every category
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.id == id)
    }
}
