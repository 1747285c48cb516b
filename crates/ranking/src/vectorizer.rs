//! TF-IDF term matrix
//!
//! Weights follow the baseline scheme:
//! - tf(t, d): raw count of `t` in `d`
//! - idf(t): ln((1 + N) / (1 + df(t))) + 1
//!
//! Every row is then scaled to unit length so the dot product of two rows is
//! their cosine similarity. Columns are sorted by term, which makes the matrix
//! identical for identical input.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{RankingError, RankingResult};

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "either",
    "else", "etc", "ever", "every", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "however",
    "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "might", "more", "most",
    "must", "my", "myself", "neither", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "shall",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "thus", "to",
    "too", "under", "until", "up", "upon", "us", "very", "was", "we", "were", "what", "when",
    "where", "whether", "which", "while", "who", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lower-cased alphanumeric tokens with stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Dense N × V matrix of TF-IDF weights.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TermMatrix {
    /// Number of documents.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Weight of `term` in document `row`, `None` if either is unknown.
    pub fn weight(&self, row: usize, term: &str) -> Option<f64> {
        let column = self
            .vocabulary
            .binary_search_by(|candidate| candidate.as_str().cmp(term))
            .ok()?;

        self.rows.get(row).and_then(|row| row.get(column)).copied()
    }
}

pub fn vectorize<S: AsRef<str>>(documents: &[S]) -> RankingResult<TermMatrix> {
    if documents.is_empty() {
        return Err(RankingError::EmptyCorpus);
    }

    let tokenized: Vec<Vec<String>> = documents
        .iter()
        .map(|document| tokenize(document.as_ref()))
        .collect();

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in &tokenized {
        let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_default() += 1;
        }
    }

    if document_frequency.is_empty() {
        return Err(RankingError::EmptyCorpus);
    }

    let total = documents.len() as f64;
    let columns: HashMap<&str, usize> = document_frequency
        .keys()
        .enumerate()
        .map(|(column, term)| (*term, column))
        .collect();
    let idf: Vec<f64> = document_frequency
        .values()
        .map(|df| ((1.0 + total) / (1.0 + *df as f64)).ln() + 1.0)
        .collect();

    let mut rows = Vec::with_capacity(tokenized.len());
    for (index, tokens) in tokenized.iter().enumerate() {
        let mut row = vec![0.0; idf.len()];
        for token in tokens {
            if let Some(&column) = columns.get(token.as_str()) {
                row[column] += 1.0;
            }
        }

        for (weight, idf) in row.iter_mut().zip(&idf) {
            *weight *= idf;
        }

        normalize(&mut row).map_err(|reason| {
            RankingError::Scoring(format!("document {index}: {reason}"))
        })?;
        rows.push(row);
    }

    tracing::trace!(
        documents = rows.len(),
        vocabulary = idf.len(),
        "Term matrix built"
    );

    Ok(TermMatrix {
        vocabulary: document_frequency.keys().map(|term| term.to_string()).collect(),
        rows,
    })
}

/// Scales `row` to unit length; all-zero rows are left untouched.
fn normalize(row: &mut [f64]) -> Result<(), String> {
    let norm = row.iter().map(|weight| weight * weight).sum::<f64>().sqrt();

    if !norm.is_finite() {
        return Err(format!("non-finite norm {norm}"));
    }

    if norm > 0.0 {
        for weight in row.iter_mut() {
            *weight /= norm;
        }
    }

    Ok(())
}
