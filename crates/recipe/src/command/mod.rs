use std::ops::Deref;

use recipebox_db::table::Recipe;
use recipebox_shared::State;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

mod create;
mod ever_top;
mod like;
mod view;

pub use create::{CreateInput, format_ingredients};

#[derive(Clone)]
pub struct Command {
    state: State,
}

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    async fn exists(&self, id: &str) -> recipebox_shared::Result<bool> {
        let statement = sea_query::Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.write_db)
            .await?;

        Ok(row.is_some())
    }
}
