mod like;
mod recipe;

use std::ops::Deref;

pub use recipe::RecipeRow;

#[derive(Clone)]
pub struct Query(pub recipebox_shared::State);

impl Deref for Query {
    type Target = recipebox_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
