//! Session-backed data models.

pub mod session;

pub use session::{AddressStatus, UserProfile};
