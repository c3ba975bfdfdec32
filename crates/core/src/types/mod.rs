//! Shared type definitions.

mod cart;
mod id;
mod position;
mod price;

pub use cart::{Cart, CartItem};
pub use id::PizzaId;
pub use position::{ParsePositionError, Position};
pub use price::{CurrencyCode, Price};
