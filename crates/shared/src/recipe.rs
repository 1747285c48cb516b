use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Read-only view of a recipe handed to the ranking engine.
///
/// `likes` is the number of distinct users liking the recipe at the time the
/// snapshot was taken; it is never stored on the recipe row itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub ingredients: String,
    pub preparation_time: String,
    pub instructions: String,
    pub views: u64,
    pub likes: u64,
    pub ever_top: bool,
    pub created_at: u64,
}

/// Popularity signal used to rank trending recipes.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PopularitySignal {
    /// Raw view counter
    #[default]
    Views,
    /// Distinct likers
    Likes,
}

impl PopularitySignal {
    pub fn key(&self, recipe: &RecipeSnapshot) -> u64 {
        match self {
            PopularitySignal::Views => recipe.views,
            PopularitySignal::Likes => recipe.likes,
        }
    }
}
