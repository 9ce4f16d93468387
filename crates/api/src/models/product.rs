//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tavag_core::{Money, ProductId};

/// A menu or shelf item offered by one business.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned ID.
    pub id: ProductId,
    /// `uid` of the owning business user.
    pub business_id: String,
    /// Item name.
    pub name: String,
    /// Longer description for the item page.
    pub description: Option<String>,
    /// Price in minor units; captured onto order items at order time.
    pub price: Money,
    /// Image reference.
    pub image_url: Option<String>,
    /// Menu category (e.g. "soups", "drinks").
    pub category: Option<String>,
    /// Whether the item is currently orderable.
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parameters for creating a product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// `uid` of the owning business user; must resolve to a business account.
    pub business_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub image_url: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

/// Partial product update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}
