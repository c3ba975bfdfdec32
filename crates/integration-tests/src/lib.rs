//! Integration tests for Fast Pizza.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront (needs RESTAURANT_API_URL and a session secret)
//! cargo run -p fast-pizza-storefront
//!
//! # Run integration tests against it
//! cargo test -p fast-pizza-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart fragment round trips
//! - `storefront_order_flow` - Order submission, search, and lookup
//!
//! Tests are `#[ignore]`d because they require a running storefront and a
//! reachable restaurant API; helpers live in each test file.
