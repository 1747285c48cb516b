//! Mood recommendations
//!
//! One document per recipe plus the mood keywords as the last, synthetic
//! query document. Recommendation is best effort: whatever goes wrong, the
//! caller gets its recipes back in the order it gave them.

use recipebox_shared::RecipeSnapshot;

use crate::{
    RankingError, RankingResult, corpus::build_corpus, profile::keywords_for, similarity::rank,
    vectorizer::vectorize,
};

/// Recipes ranked by similarity to `mood`, at most `limit` of them.
///
/// Falls back to `recipes` unchanged for an empty snapshot, an unknown mood,
/// an empty corpus or any scoring failure.
pub fn recommend(mood: &str, recipes: Vec<RecipeSnapshot>, limit: usize) -> Vec<RecipeSnapshot> {
    if recipes.is_empty() {
        return recipes;
    }

    let ranked = match try_recommend(mood, &recipes, limit) {
        Ok(ranked) => ranked,
        Err(RankingError::UnknownMood(_)) => {
            tracing::debug!(mood, "No mood profile, serving recipes unranked");
            return recipes;
        }
        Err(RankingError::EmptyCorpus) => {
            tracing::debug!(mood, "Empty corpus, serving recipes unranked");
            return recipes;
        }
        Err(err) => {
            tracing::warn!(mood, error = %err, "Recommendation failed, serving recipes unranked");
            return recipes;
        }
    };

    let mut slots: Vec<Option<RecipeSnapshot>> = recipes.into_iter().map(Some).collect();

    ranked
        .into_iter()
        .filter_map(|(index, _)| slots.get_mut(index).and_then(Option::take))
        .collect()
}

/// Indices into `recipes` with their similarity to `mood`, best first.
pub fn try_recommend(
    mood: &str,
    recipes: &[RecipeSnapshot],
    limit: usize,
) -> RankingResult<Vec<(usize, f64)>> {
    let keywords = keywords_for(mood);
    if keywords.is_empty() {
        return Err(RankingError::UnknownMood(mood.to_owned()));
    }

    let mut documents = build_corpus(recipes);
    documents.push(keywords.join(" "));

    let matrix = vectorize(&documents)?;
    let ranked = rank(&matrix, documents.len() - 1, limit)?;

    tracing::debug!(
        mood,
        candidates = recipes.len(),
        returned = ranked.len(),
        "Recipes ranked by mood"
    );

    Ok(ranked)
}
