//! Trending recipes
//!
//! The top-K recipes by an injected popularity key. A recipe entering the top
//! set for the first time gets its persisted `ever_top` flag flipped; the flag
//! only ever goes from false to true, so concurrent computations racing on the
//! same recipe converge without coordination.

use std::cmp::Reverse;

use recipebox_shared::{PopularitySignal, RecipeSnapshot};

use crate::{RankingError, RankingResult};

/// Storage side of the `ever_top` flag.
///
/// Implementations must make `mark_ever_top` a no-op for recipes already
/// flagged.
#[async_trait::async_trait]
pub trait EverTopStore: Send + Sync {
    async fn mark_ever_top(&self, id: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trending {
    /// Top recipes, most popular first, reported with `ever_top` set.
    pub recipes: Vec<RecipeSnapshot>,
    /// Ids whose `ever_top` flag must be persisted as true.
    pub newly_top: Vec<String>,
}

impl Trending {
    pub fn ids(&self) -> Vec<&str> {
        self.recipes.iter().map(|recipe| recipe.id.as_str()).collect()
    }

    /// Applies the pending flag writes.
    ///
    /// Every write is attempted even if an earlier one fails; failures are
    /// reported together and leave `recipes` usable by the caller.
    pub async fn persist<S: EverTopStore + ?Sized>(&self, store: &S) -> RankingResult<()> {
        let mut failed = vec![];
        let mut reasons = vec![];

        for id in &self.newly_top {
            if let Err(err) = store.mark_ever_top(id).await {
                tracing::error!(recipe_id = %id, error = %err, "Failed to persist ever-top flag");
                failed.push(id.to_owned());
                reasons.push(err.to_string());
            }
        }

        if !failed.is_empty() {
            return Err(RankingError::FlagWrite {
                ids: failed,
                reason: reasons.join("; "),
            });
        }

        if !self.newly_top.is_empty() {
            tracing::info!(recipes = ?self.newly_top, "Recipes entered trending for the first time");
        }

        Ok(())
    }
}

/// Top `size` recipes by `key`, descending. Ties keep the order of `recipes`.
pub fn compute_trending<F, K>(recipes: &[RecipeSnapshot], key: F, size: usize) -> Trending
where
    F: Fn(&RecipeSnapshot) -> K,
    K: Ord,
{
    let mut ranked: Vec<&RecipeSnapshot> = recipes.iter().collect();
    ranked.sort_by_key(|recipe| Reverse(key(*recipe)));
    ranked.truncate(size);

    let mut newly_top: Vec<String> = vec![];
    for recipe in ranked.iter().filter(|recipe| !recipe.ever_top) {
        if !newly_top.contains(&recipe.id) {
            newly_top.push(recipe.id.to_owned());
        }
    }

    Trending {
        recipes: ranked
            .into_iter()
            .map(|recipe| RecipeSnapshot {
                ever_top: true,
                ..recipe.clone()
            })
            .collect(),
        newly_top,
    }
}

pub fn compute_trending_by(
    recipes: &[RecipeSnapshot],
    signal: PopularitySignal,
    size: usize,
) -> Trending {
    compute_trending(recipes, |recipe| signal.key(recipe), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashSet, sync::Mutex};

    #[derive(Default)]
    struct MemoryStore {
        flagged: Mutex<HashSet<String>>,
        writes: Mutex<Vec<String>>,
        broken: Option<String>,
    }

    #[async_trait::async_trait]
    impl EverTopStore for MemoryStore {
        async fn mark_ever_top(&self, id: &str) -> anyhow::Result<()> {
            if self.broken.as_deref() == Some(id) {
                anyhow::bail!("disk full");
            }

            self.writes.lock().unwrap().push(id.to_owned());
            self.flagged.lock().unwrap().insert(id.to_owned());

            Ok(())
        }
    }

    impl MemoryStore {
        fn apply(&self, recipes: &mut [RecipeSnapshot]) {
            let flagged = self.flagged.lock().unwrap();
            for recipe in recipes.iter_mut() {
                recipe.ever_top = recipe.ever_top || flagged.contains(&recipe.id);
            }
        }
    }

    fn recipe(id: &str, likes: u64) -> RecipeSnapshot {
        RecipeSnapshot {
            id: id.to_owned(),
            title: format!("Recipe {id}"),
            likes,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_top_two_by_likes() -> anyhow::Result<()> {
        let mut recipes = vec![recipe("A", 5), recipe("B", 9), recipe("C", 2)];
        let store = MemoryStore::default();

        let trending = compute_trending(&recipes, |recipe| recipe.likes, 2);
        assert_eq!(trending.ids(), vec!["B", "A"]);
        assert_eq!(trending.newly_top, vec!["B", "A"]);
        assert!(trending.recipes.iter().all(|recipe| recipe.ever_top));

        trending.persist(&store).await?;
        store.apply(&mut recipes);

        assert!(recipes[0].ever_top);
        assert!(recipes[1].ever_top);
        assert!(!recipes[2].ever_top);

        Ok(())
    }

    #[tokio::test]
    async fn test_second_run_issues_no_writes() -> anyhow::Result<()> {
        let mut recipes = vec![recipe("A", 5), recipe("B", 9), recipe("C", 2)];
        let store = MemoryStore::default();

        let first = compute_trending_by(&recipes, PopularitySignal::Likes, 2);
        first.persist(&store).await?;
        store.apply(&mut recipes);

        let second = compute_trending_by(&recipes, PopularitySignal::Likes, 2);
        second.persist(&store).await?;

        assert_eq!(first.recipes, second.recipes);
        assert!(second.newly_top.is_empty());
        assert_eq!(store.writes.lock().unwrap().len(), 2);

        Ok(())
    }

    #[test]
    fn test_reentering_top_does_not_flag_again() {
        let mut recipes = vec![recipe("A", 5), recipe("B", 9), recipe("C", 2)];
        recipes[2].ever_top = true;
        recipes[2].likes = 20;

        let trending = compute_trending(&recipes, |recipe| recipe.likes, 2);

        assert_eq!(trending.ids(), vec!["C", "B"]);
        assert_eq!(trending.newly_top, vec!["B"]);
    }

    #[test]
    fn test_ties_keep_supplied_order() {
        let recipes = vec![
            recipe("A", 3),
            recipe("B", 7),
            recipe("C", 3),
            recipe("D", 3),
        ];

        let trending = compute_trending(&recipes, |recipe| recipe.likes, 3);

        assert_eq!(trending.ids(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_size_larger_than_snapshot() {
        let recipes = vec![recipe("A", 1), recipe("B", 2)];

        assert_eq!(compute_trending(&recipes, |r| r.likes, 10).recipes.len(), 2);
        assert!(compute_trending(&recipes, |r| r.likes, 0).recipes.is_empty());
        assert!(compute_trending(&[], |r| r.likes, 3).recipes.is_empty());
    }

    #[test]
    fn test_view_signal() {
        let mut recipes = vec![recipe("A", 9), recipe("B", 1)];
        recipes[1].views = 40;

        let trending = compute_trending_by(&recipes, PopularitySignal::Views, 1);

        assert_eq!(trending.ids(), vec!["B"]);
    }

    #[tokio::test]
    async fn test_flag_failure_is_surfaced_after_other_writes() {
        let recipes = vec![recipe("A", 5), recipe("B", 9), recipe("C", 2)];
        let store = MemoryStore {
            broken: Some("B".to_owned()),
            ..Default::default()
        };

        let trending = compute_trending(&recipes, |recipe| recipe.likes, 2);
        let err = trending.persist(&store).await.unwrap_err();

        assert_eq!(
            err,
            RankingError::FlagWrite {
                ids: vec!["B".to_owned()],
                reason: "disk full".to_owned(),
            }
        );
        assert_eq!(*store.writes.lock().unwrap(), vec!["A".to_owned()]);
        assert_eq!(trending.ids(), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_concurrent_runs_converge() -> anyhow::Result<()> {
        let recipes = vec![recipe("A", 5), recipe("B", 9), recipe("C", 2)];
        let store = MemoryStore::default();
        let (recipes, store_ref) = (&recipes, &store);

        let runs = (0..4).map(|_| async move {
            compute_trending(recipes, |recipe| recipe.likes, 2)
                .persist(store_ref)
                .await
        });
        for result in futures::future::join_all(runs).await {
            result?;
        }

        let flagged = store.flagged.lock().unwrap();
        assert_eq!(flagged.len(), 2);
        assert!(flagged.contains("A") && flagged.contains("B"));

        Ok(())
    }
}
