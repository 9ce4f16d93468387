//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tavag_core::{BusinessType, Email, UserId, UserRole};

/// A marketplace account: customer, business, or delivery driver.
///
/// Identity lives with the external auth provider; `uid` is the opaque key
/// it hands us, and it is unique across all users. The role-specific fields
/// are only meaningful when `role` matches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned ID.
    pub id: UserId,
    /// External auth provider ID, unique across all users.
    pub uid: String,
    /// Which app surface this account uses.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Storefront name (business role only).
    pub business_name: Option<String>,
    /// Kind of storefront (business role only).
    pub business_type: Option<BusinessType>,
    /// Vehicle used for deliveries (delivery role only).
    pub vehicle_type: Option<String>,
    /// Driver's license number (delivery role only).
    pub license_number: Option<String>,
    /// Free-form preference tags, in the order the user picked them.
    pub preferences: Vec<String>,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Parameters for registering a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// External auth provider ID.
    pub uid: String,
    /// Account role.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Storefront name (business role only).
    pub business_name: Option<String>,
    /// Kind of storefront (business role only).
    pub business_type: Option<BusinessType>,
    /// Vehicle used for deliveries (delivery role only).
    pub vehicle_type: Option<String>,
    /// Driver's license number (delivery role only).
    pub license_number: Option<String>,
    /// Free-form preference tags.
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub phone: Option<String>,
    pub business_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub vehicle_type: Option<String>,
    pub license_number: Option<String>,
    pub preferences: Option<Vec<String>>,
}

impl UserPatch {
    /// Whether the patch changes anything at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.business_name.is_none()
            && self.business_type.is_none()
            && self.vehicle_type.is_none()
            && self.license_number.is_none()
            && self.preferences.is_none()
    }
}
