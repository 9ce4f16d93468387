//! Core types for Tavag.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;
pub mod schedule;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use money::{Currency, Money, MoneyError};
pub use schedule::{RequestedTime, RequestedTimeError};
pub use status::*;
