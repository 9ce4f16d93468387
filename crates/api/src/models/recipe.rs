//! Recipe recommendation types.

use serde::Serialize;

use tavag_core::RecipeId;

/// A recipe card surfaced on the customer home screen.
///
/// The catalog is fixed; personalization only reorders it by overlap with
/// the user's preference tags.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: String,
    /// Tags matched against user preference tags when personalizing.
    pub tags: Vec<String>,
    pub image_url: String,
}

impl Recipe {
    /// How many of the user's preference tags this recipe matches.
    #[must_use]
    pub fn match_count(&self, preferences: &[String]) -> usize {
        self.tags
            .iter()
            .filter(|tag| preferences.iter().any(|p| p.eq_ignore_ascii_case(tag)))
            .count()
    }
}
