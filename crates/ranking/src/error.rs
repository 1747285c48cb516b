use thiserror::Error;

pub type RankingResult<T> = Result<T, RankingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error("Empty corpus: no terms left to vectorize")]
    EmptyCorpus,

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Failed to persist ever-top flag for {ids:?}: {reason}")]
    FlagWrite { ids: Vec<String>, reason: String },
}
