//! Mood keyword profiles
//!
//! Moods form a closed set; the keyword list for each one is resolved with an
//! exhaustive match so adding a mood without keywords does not compile.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Mood {
    Adventurous,
    Comforting,
    Healthy,
    Indulgent,
    Quick,
}

impl Mood {
    pub fn keywords(&self) -> &'static [&'static str] {
        keywords(*self)
    }
}

/// Ordered keywords describing a mood.
pub fn keywords(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Adventurous => &["spicy", "exotic", "unique", "international", "complex"],
        Mood::Comforting => &["warm", "hearty", "creamy", "classic", "homemade"],
        Mood::Healthy => &["fresh", "light", "vegetables", "grilled", "salad"],
        Mood::Indulgent => &["sweet", "rich", "chocolate", "cheese", "dessert"],
        Mood::Quick => &["quick", "easy", "simple", "minutes", "fast"],
    }
}

/// Keywords for a mood name, or an empty list when the name is unknown.
///
/// An empty list means "no usable profile" and is not an error.
pub fn keywords_for(name: &str) -> &'static [&'static str] {
    Mood::from_str(name.trim()).map(keywords).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adventurous_keywords_keep_order() {
        assert_eq!(
            keywords_for("Adventurous"),
            &["spicy", "exotic", "unique", "international", "complex"]
        );
    }

    #[test]
    fn test_mood_name_is_case_insensitive() {
        assert_eq!(keywords_for("healthy"), Mood::Healthy.keywords());
        assert_eq!(keywords_for("  QUICK "), Mood::Quick.keywords());
    }

    #[test]
    fn test_unknown_mood_has_no_keywords() {
        assert!(keywords_for("melancholic").is_empty());
        assert!(keywords_for("").is_empty());
    }

    #[test]
    fn test_every_mood_has_keywords() {
        for mood in Mood::VARIANTS {
            assert!(!mood.keywords().is_empty(), "{mood} has no keywords");
        }
    }
}
