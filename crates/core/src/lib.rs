//! Tavag Core - Shared types library.
//!
//! This crate provides common types used across all Tavag components:
//! - `api` - Marketplace API serving the customer, business, and driver apps
//! - `integration-tests` - Cross-module test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no store access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and the
//!   order/payment/role enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
