//! Ranking and recommendation engine
//!
//! Everything in this crate works on in-memory [`RecipeSnapshot`]s handed in
//! by the caller and owns nothing across calls:
//! - [`profile`]: mood to keyword profiles
//! - [`corpus`]: one normalized text document per recipe
//! - [`vectorizer`]: TF-IDF term matrix with L2-normalized rows
//! - [`similarity`]: cosine ranking against the query row
//! - [`trending`]: top-K by popularity and the monotonic `ever_top` flag
//! - [`recommendation`]: mood recommendations with graceful fallback
//!
//! [`RecipeSnapshot`]: recipebox_shared::RecipeSnapshot

pub mod corpus;
pub mod error;
pub mod profile;
pub mod recommendation;
pub mod similarity;
pub mod trending;
pub mod vectorizer;

pub use error::{RankingError, RankingResult};
pub use profile::{Mood, keywords, keywords_for};
pub use recommendation::{recommend, try_recommend};
pub use trending::{EverTopStore, Trending, compute_trending, compute_trending_by};
