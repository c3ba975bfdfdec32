//! The client-held cart: selected pizzas prior to order submission.
//!
//! The cart is plain data plus arithmetic. The storefront keeps one per
//! session and mutates it only inside request handlers; nothing here does
//! I/O. Field names serialize in camelCase because cart lines are sent
//! verbatim inside the order payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::PizzaId;

/// One line of the cart: a pizza and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Menu ID of the pizza.
    pub pizza_id: PizzaId,
    /// Pizza name, denormalized for display and for the order payload.
    pub name: String,
    /// Number of this pizza in the cart.
    pub quantity: u32,
    /// Price of a single pizza.
    pub unit_price: Decimal,
    /// `unit_price * quantity`, kept in sync by [`Cart`].
    pub total_price: Decimal,
}

impl CartItem {
    /// Create a single-quantity line for a pizza.
    #[must_use]
    pub fn new(pizza_id: PizzaId, name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            pizza_id,
            name: name.into(),
            quantity: 1,
            unit_price,
            total_price: unit_price,
        }
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = self.unit_price * Decimal::from(quantity);
    }
}

/// The session cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one of a pizza. An existing line is incremented, otherwise a new
    /// line is appended.
    pub fn add(&mut self, pizza_id: PizzaId, name: &str, unit_price: Decimal) {
        match self.items.iter_mut().find(|i| i.pizza_id == pizza_id) {
            Some(item) => item.set_quantity(item.quantity + 1),
            None => self.items.push(CartItem::new(pizza_id, name, unit_price)),
        }
    }

    /// Set the quantity of an existing line. Zero removes the line; an
    /// unknown pizza ID is a no-op.
    pub fn set_quantity(&mut self, pizza_id: PizzaId, quantity: u32) {
        if quantity == 0 {
            self.remove(pizza_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.pizza_id == pizza_id) {
            item.set_quantity(quantity);
        }
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, pizza_id: PizzaId) {
        self.items.retain(|i| i.pizza_id != pizza_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity of one pizza across the cart (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, pizza_id: PizzaId) -> u32 {
        self.items
            .iter()
            .find(|i| i.pizza_id == pizza_id)
            .map_or(0, |i| i.quantity)
    }

    /// Total number of pizzas in the cart.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(|i| i.total_price).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn margherita() -> (PizzaId, &'static str, Decimal) {
        (PizzaId::new(1), "Margherita", Decimal::new(12, 0))
    }

    fn prosciutto() -> (PizzaId, &'static str, Decimal) {
        (PizzaId::new(2), "Prosciutto e Rucola", Decimal::new(1650, 2))
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::default();
        let (id, name, price) = margherita();
        cart.add(id, name, price);
        cart.add(id, name, price);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(id), 2);
        assert_eq!(cart.total_price(), Decimal::new(24, 0));
    }

    #[test]
    fn test_line_total_tracks_quantity() {
        let mut cart = Cart::default();
        let (id, name, price) = prosciutto();
        cart.add(id, name, price);
        cart.set_quantity(id, 3);

        let item = &cart.items()[0];
        assert_eq!(item.quantity, 3);
        assert_eq!(item.total_price, Decimal::new(4950, 2));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        let (id, name, price) = margherita();
        cart.add(id, name, price);
        cart.set_quantity(id, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(id), 0);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::default();
        let (id, name, price) = margherita();
        cart.add(id, name, price);
        cart.set_quantity(PizzaId::new(99), 5);

        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_totals_across_lines() {
        let mut cart = Cart::default();
        let (m_id, m_name, m_price) = margherita();
        let (p_id, p_name, p_price) = prosciutto();
        cart.add(m_id, m_name, m_price);
        cart.add(m_id, m_name, m_price);
        cart.add(p_id, p_name, p_price);

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price(), Decimal::new(4050, 2));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::default();
        let (m_id, m_name, m_price) = margherita();
        let (p_id, p_name, p_price) = prosciutto();
        cart.add(m_id, m_name, m_price);
        cart.add(p_id, p_name, p_price);

        cart.remove(m_id);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].pizza_id, p_id);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_item_wire_field_names() {
        // Cart lines travel inside the order payload; the API expects
        // camelCase keys.
        let item = CartItem::new(PizzaId::new(1), "Margherita", Decimal::new(12, 0));
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("pizzaId").is_some());
        assert!(json.get("unitPrice").is_some());
        assert!(json.get("totalPrice").is_some());
        assert!(json.get("pizza_id").is_none());
    }
}
