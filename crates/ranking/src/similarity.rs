use std::cmp::Ordering;

use crate::{RankingError, RankingResult, vectorizer::TermMatrix};

/// Dot product of two rows. Rows of a [`TermMatrix`] are unit length, so this
/// is their cosine similarity.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a, b)| a * b).sum()
}

/// Scores every row against `query_row` and returns the `k` best as
/// `(row, score)`, best first. The query row itself is never returned.
///
/// Equal scores keep corpus order, including the all-zero case where no
/// document shares a term with the query.
pub fn rank(matrix: &TermMatrix, query_row: usize, k: usize) -> RankingResult<Vec<(usize, f64)>> {
    let query = matrix.row(query_row).ok_or_else(|| {
        RankingError::Scoring(format!(
            "query row {query_row} out of bounds for {} documents",
            matrix.len()
        ))
    })?;

    let mut scores = Vec::with_capacity(matrix.len().saturating_sub(1));
    for (index, row) in matrix.rows().enumerate() {
        if index == query_row {
            continue;
        }

        let score = cosine(row, query);
        if !score.is_finite() {
            return Err(RankingError::Scoring(format!(
                "non-finite similarity for document {index}"
            )));
        }

        scores.push((index, score));
    }

    // sort_by is stable
    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scores.truncate(k);

    Ok(scores)
}
