//! Repository layer for the marketplace stores.
//!
//! Every store is a trait so the route layer depends on an abstraction
//! rather than a module-level singleton; the shipped implementations keep
//! everything in process memory behind an `RwLock`, which is all this
//! deployment needs (state is ephemeral by design) while leaving the seam
//! open for a durable backend.
//!
//! Store methods are synchronous: every operation is a single map access
//! with no suspend points, so each call is atomic with respect to the
//! request tasks that share the store.

mod orders;
mod products;
mod recipes;
mod users;

use thiserror::Error;

pub use orders::{MemoryOrderStore, OrderStore};
pub use products::{MemoryProductStore, ProductStore};
pub use recipes::{MemoryRecommendationStore, RecommendationStore};
pub use users::{MemoryUserStore, UserStore};

use tavag_core::{OrderId, OrderStatus};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested record was not found.
    #[error("{entity} {key} not found")]
    NotFound {
        /// Entity kind, for the client-facing message.
        entity: &'static str,
        /// The key that missed.
        key: String,
    },

    /// A uniqueness constraint was violated.
    #[error("uid {0:?} is already registered")]
    DuplicateUid(String),

    /// The requested status change is not in the transition table.
    #[error("illegal order status transition: {from} -> {to}")]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    /// A driver tried to claim an order another driver already holds.
    #[error("order {0} is already claimed by another driver")]
    AlreadyClaimed(OrderId),

    /// Input failed a domain invariant.
    #[error("invalid input: {0}")]
    Invalid(String),

    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
