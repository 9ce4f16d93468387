//! Integration tests for recommendation personalization and favorites.

#![allow(clippy::unwrap_used)]

use tavag_api::store::{MemoryRecommendationStore, RecommendationStore, StoreError};
use tavag_core::RecipeId;

#[test]
fn test_catalog_order_without_preferences() {
    let store = MemoryRecommendationStore::new();
    let plain = store.list(&[]).unwrap();
    let again = store.list(&[]).unwrap();

    let ids: Vec<i64> = plain.iter().map(|r| r.id.as_i64()).collect();
    let again_ids: Vec<i64> = again.iter().map(|r| r.id.as_i64()).collect();
    assert_eq!(ids, again_ids);
    assert!(!plain.is_empty());
}

#[test]
fn test_personalization_moves_matches_forward_but_keeps_everything() {
    let store = MemoryRecommendationStore::new();
    let plain = store.list(&[]).unwrap();
    let personalized = store.list(&["noodles".to_string()]).unwrap();

    // Same catalog either way; only the order changes.
    assert_eq!(plain.len(), personalized.len());

    // Every noodle recipe sorts before every non-noodle recipe.
    let is_noodle = |r: &tavag_api::models::Recipe| r.tags.iter().any(|t| t == "noodles");
    let first_non_match = personalized.iter().position(|r| !is_noodle(r)).unwrap();
    assert!(personalized.iter().skip(first_non_match).all(|r| !is_noodle(r)));
    assert!(personalized.iter().take(first_non_match).all(is_noodle));
}

#[test]
fn test_unmatched_preferences_keep_catalog_order() {
    let store = MemoryRecommendationStore::new();
    let plain = store.list(&[]).unwrap();
    let personalized = store.list(&["sushi".to_string()]).unwrap();

    let plain_ids: Vec<i64> = plain.iter().map(|r| r.id.as_i64()).collect();
    let personalized_ids: Vec<i64> = personalized.iter().map(|r| r.id.as_i64()).collect();
    assert_eq!(plain_ids, personalized_ids);
}

#[test]
fn test_toggle_twice_restores_membership() {
    let store = MemoryRecommendationStore::new();
    let recipe = store.list(&[]).unwrap()[0].id;

    assert!(store.favorites_for("uid-1").unwrap().is_empty());

    assert!(store.toggle_favorite("uid-1", recipe).unwrap());
    assert!(!store.toggle_favorite("uid-1", recipe).unwrap());

    assert!(store.favorites_for("uid-1").unwrap().is_empty());
}

#[test]
fn test_favorites_accumulate_in_catalog_order() {
    let store = MemoryRecommendationStore::new();
    let catalog = store.list(&[]).unwrap();
    let third = catalog[2].id;
    let first = catalog[0].id;

    // Toggled out of order; read back in catalog order.
    store.toggle_favorite("uid-1", third).unwrap();
    store.toggle_favorite("uid-1", first).unwrap();

    let favorites = store.favorites_for("uid-1").unwrap();
    let ids: Vec<RecipeId> = favorites.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, third]);
}

#[test]
fn test_toggle_unknown_recipe_is_not_found() {
    let store = MemoryRecommendationStore::new();
    let err = store
        .toggle_favorite("uid-1", RecipeId::new(10_000))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}
