//! Domain models for the marketplace.
//!
//! These are the records the stores own, plus the `Create…`/`…Patch`
//! parameter structs the routes validate request bodies into. All of them
//! serialize in camelCase because the dashboards consume them directly.

pub mod order;
pub mod product;
pub mod recipe;
pub mod user;

pub use order::{CreateOrder, CreateOrderItem, Order, OrderItem, OrderWithItems};
pub use product::{CreateProduct, Product, ProductPatch};
pub use recipe::Recipe;
pub use user::{CreateUser, User, UserPatch};
