//! User store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use tavag_core::UserId;

use super::StoreError;
use crate::models::{CreateUser, User, UserPatch};

/// Repository of marketplace accounts.
pub trait UserStore: Send + Sync {
    /// Register a user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateUid`] if the external `uid` is already
    /// registered.
    fn create(&self, params: CreateUser) -> Result<User, StoreError>;

    /// Get a user by store-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures; a missing user is
    /// `Ok(None)`.
    fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Get a user by external auth ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures; a missing user is
    /// `Ok(None)`.
    fn get_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError>;

    /// Apply a partial profile update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID is absent.
    fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError>;
}

/// In-memory [`UserStore`].
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<UserTable>,
}

#[derive(Default)]
struct UserTable {
    users: BTreeMap<UserId, User>,
    next_id: i64,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn create(&self, params: CreateUser) -> Result<User, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        if table.users.values().any(|u| u.uid == params.uid) {
            return Err(StoreError::DuplicateUid(params.uid));
        }

        table.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: UserId::new(table.next_id),
            uid: params.uid,
            role: params.role,
            name: params.name,
            email: params.email,
            phone: params.phone,
            business_name: params.business_name,
            business_type: params.business_type,
            vehicle_type: params.vehicle_type,
            license_number: params.license_number,
            preferences: params.preferences,
            created_at: now,
            updated_at: now,
        };
        table.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.users.get(&id).cloned())
    }

    fn get_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.users.values().find(|u| u.uid == uid).cloned())
    }

    fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let user = table
            .users
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("user", id))?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(phone) = patch.phone {
            user.phone = Some(phone);
        }
        if let Some(business_name) = patch.business_name {
            user.business_name = Some(business_name);
        }
        if let Some(business_type) = patch.business_type {
            user.business_type = Some(business_type);
        }
        if let Some(vehicle_type) = patch.vehicle_type {
            user.vehicle_type = Some(vehicle_type);
        }
        if let Some(license_number) = patch.license_number {
            user.license_number = Some(license_number);
        }
        if let Some(preferences) = patch.preferences {
            user.preferences = preferences;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tavag_core::{Email, UserRole};

    fn customer(uid: &str) -> CreateUser {
        CreateUser {
            uid: uid.to_string(),
            role: UserRole::Customer,
            name: "Bat".to_string(),
            email: Email::parse("bat@example.mn").unwrap(),
            phone: None,
            business_name: None,
            business_type: None,
            vehicle_type: None,
            license_number: None,
            preferences: vec![],
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = MemoryUserStore::new();
        let a = store.create(customer("uid-a")).unwrap();
        let b = store.create(customer("uid-b")).unwrap();
        assert_eq!(a.id.as_i64(), 1);
        assert_eq!(b.id.as_i64(), 2);
    }

    #[test]
    fn test_duplicate_uid_rejected() {
        let store = MemoryUserStore::new();
        store.create(customer("uid-a")).unwrap();
        let err = store.create(customer("uid-a")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUid(uid) if uid == "uid-a"));
    }

    #[test]
    fn test_get_by_uid() {
        let store = MemoryUserStore::new();
        let created = store.create(customer("uid-a")).unwrap();
        let found = store.get_by_uid("uid-a").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.get_by_uid("missing").unwrap().is_none());
    }

    #[test]
    fn test_update_patches_only_given_fields() {
        let store = MemoryUserStore::new();
        let created = store.create(customer("uid-a")).unwrap();

        let updated = store
            .update(
                created.id,
                UserPatch {
                    phone: Some("9911-2233".to_string()),
                    preferences: Some(vec!["spicy".to_string()]),
                    ..UserPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Bat");
        assert_eq!(updated.phone.as_deref(), Some("9911-2233"));
        assert_eq!(updated.preferences, vec!["spicy".to_string()]);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_update_missing_user() {
        let store = MemoryUserStore::new();
        let err = store
            .update(UserId::new(99), UserPatch::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "user", .. }));
    }
}
