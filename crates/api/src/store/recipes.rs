//! Recommendation catalog and per-user favorites.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use tavag_core::RecipeId;

use super::StoreError;
use crate::models::Recipe;

/// Repository of recipe recommendations and favorite toggles.
pub trait RecommendationStore: Send + Sync {
    /// The catalog, reordered by overlap with `preferences` (most matching
    /// tags first; ties keep catalog order). An empty preference list
    /// returns catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn list(&self, preferences: &[String]) -> Result<Vec<Recipe>, StoreError>;

    /// The recipes a user has favorited, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn favorites_for(&self, uid: &str) -> Result<Vec<Recipe>, StoreError>;

    /// Toggle a favorite: present becomes removed, absent becomes added.
    /// Returns the resulting membership state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the recipe ID is not in the
    /// catalog.
    fn toggle_favorite(&self, uid: &str, recipe_id: RecipeId) -> Result<bool, StoreError>;
}

/// In-memory [`RecommendationStore`] over a fixed catalog.
pub struct MemoryRecommendationStore {
    catalog: Vec<Recipe>,
    favorites: RwLock<HashMap<String, BTreeSet<RecipeId>>>,
}

impl MemoryRecommendationStore {
    /// Store serving the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(seed_catalog())
    }

    /// Store serving a caller-supplied catalog.
    #[must_use]
    pub fn with_catalog(catalog: Vec<Recipe>) -> Self {
        Self {
            catalog,
            favorites: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryRecommendationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationStore for MemoryRecommendationStore {
    fn list(&self, preferences: &[String]) -> Result<Vec<Recipe>, StoreError> {
        let mut recipes = self.catalog.clone();
        if !preferences.is_empty() {
            // Stable sort: ties keep catalog order.
            recipes.sort_by_key(|r| std::cmp::Reverse(r.match_count(preferences)));
        }
        Ok(recipes)
    }

    fn favorites_for(&self, uid: &str) -> Result<Vec<Recipe>, StoreError> {
        let favorites = self.favorites.read().map_err(|_| StoreError::Poisoned)?;
        let Some(ids) = favorites.get(uid) else {
            return Ok(Vec::new());
        };
        Ok(self
            .catalog
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect())
    }

    fn toggle_favorite(&self, uid: &str, recipe_id: RecipeId) -> Result<bool, StoreError> {
        if !self.catalog.iter().any(|r| r.id == recipe_id) {
            return Err(StoreError::not_found("recipe", recipe_id));
        }

        let mut favorites = self.favorites.write().map_err(|_| StoreError::Poisoned)?;
        let set = favorites.entry(uid.to_string()).or_default();
        if set.remove(&recipe_id) {
            Ok(false)
        } else {
            set.insert(recipe_id);
            Ok(true)
        }
    }
}

/// The fixed recommendation catalog the home screen shows.
fn seed_catalog() -> Vec<Recipe> {
    let entries: &[(i64, &str, &str, &[&str], &str)] = &[
        (
            1,
            "Buuz",
            "Steamed dumplings filled with minced mutton and onion.",
            &["mutton", "steamed", "traditional"],
            "/images/recipes/buuz.jpg",
        ),
        (
            2,
            "Khuushuur",
            "Crisp fried pastry with a juicy beef filling.",
            &["beef", "fried", "traditional"],
            "/images/recipes/khuushuur.jpg",
        ),
        (
            3,
            "Tsuivan",
            "Stir-fried noodles with vegetables and strips of beef.",
            &["beef", "noodles", "stir-fry"],
            "/images/recipes/tsuivan.jpg",
        ),
        (
            4,
            "Goulash with mash",
            "Slow-braised beef goulash over mashed potato.",
            &["beef", "braised", "comfort"],
            "/images/recipes/goulash.jpg",
        ),
        (
            5,
            "Vegetable stir-fry",
            "Seasonal vegetables tossed in a light soy glaze.",
            &["vegetarian", "stir-fry", "light"],
            "/images/recipes/veg-stir-fry.jpg",
        ),
        (
            6,
            "Chicken salad bowl",
            "Grilled chicken over greens with a sesame dressing.",
            &["chicken", "salad", "light"],
            "/images/recipes/chicken-salad.jpg",
        ),
        (
            7,
            "Suutei tsai ramen",
            "Milk-tea broth ramen with hand-pulled noodles.",
            &["noodles", "soup", "fusion"],
            "/images/recipes/suutei-ramen.jpg",
        ),
        (
            8,
            "Berry yogurt parfait",
            "Layered yogurt, sea buckthorn, and granola.",
            &["dessert", "light", "breakfast"],
            "/images/recipes/parfait.jpg",
        ),
    ];

    entries
        .iter()
        .map(|(id, title, description, tags, image_url)| Recipe {
            id: RecipeId::new(*id),
            title: (*title).to_string(),
            description: (*description).to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            image_url: (*image_url).to_string(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_without_preferences_keeps_catalog_order() {
        let store = MemoryRecommendationStore::new();
        let recipes = store.list(&[]).unwrap();
        let ids: Vec<i64> = recipes.iter().map(|r| r.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_list_sorts_by_match_count_with_stable_ties() {
        let store = MemoryRecommendationStore::new();
        let prefs = vec!["beef".to_string(), "noodles".to_string()];
        let recipes = store.list(&prefs).unwrap();

        // Tsuivan matches both tags; the other beef dishes follow in
        // catalog order, then everything else, still in catalog order.
        assert_eq!(recipes[0].title, "Tsuivan");
        assert_eq!(recipes[1].title, "Khuushuur");
        assert_eq!(recipes[2].title, "Goulash with mash");
        assert_eq!(recipes[3].title, "Suutei tsai ramen");
    }

    #[test]
    fn test_toggle_favorite_is_involutive() {
        let store = MemoryRecommendationStore::new();
        let id = RecipeId::new(3);

        assert!(store.toggle_favorite("uid-1", id).unwrap());
        assert_eq!(store.favorites_for("uid-1").unwrap().len(), 1);

        assert!(!store.toggle_favorite("uid-1", id).unwrap());
        assert!(store.favorites_for("uid-1").unwrap().is_empty());
    }

    #[test]
    fn test_favorites_are_per_user() {
        let store = MemoryRecommendationStore::new();
        store.toggle_favorite("uid-1", RecipeId::new(1)).unwrap();
        assert!(store.favorites_for("uid-2").unwrap().is_empty());
    }

    #[test]
    fn test_toggle_unknown_recipe() {
        let store = MemoryRecommendationStore::new();
        let err = store
            .toggle_favorite("uid-1", RecipeId::new(404))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { entity: "recipe", .. }));
    }
}
