//! Fast Pizza Core - Shared types library.
//!
//! This crate provides the common types the `storefront` crate builds on.
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no framework dependencies. The cart lives here because it is
//! plain data plus arithmetic; everything that talks to the network lives in
//! the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, cart, and geographic positions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
