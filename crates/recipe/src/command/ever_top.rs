use recipebox_db::table::Recipe;
use recipebox_ranking::EverTopStore;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Flags the recipe as having been trending at least once.
    ///
    /// Returns whether the flag changed. The update only matches unflagged
    /// rows, so the flag never goes back to false and repeated calls are
    /// no-ops.
    pub async fn flag_ever_top(&self, id: &str) -> recipebox_shared::Result<bool> {
        let statement = Query::update()
            .table(Recipe::Table)
            .value(Recipe::EverTop, true)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .and_where(Expr::col(Recipe::EverTop).eq(false))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait::async_trait]
impl EverTopStore for super::Command {
    async fn mark_ever_top(&self, id: &str) -> anyhow::Result<()> {
        if self.flag_ever_top(id).await? {
            tracing::debug!(recipe_id = %id, "Recipe flagged as ever top");
        }

        Ok(())
    }
}
