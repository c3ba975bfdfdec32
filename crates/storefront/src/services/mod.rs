//! External service clients.

pub mod geocode;
pub mod restaurant;

pub use geocode::{GeocodeClient, GeocodeError};
pub use restaurant::{RestaurantApiError, RestaurantClient};
