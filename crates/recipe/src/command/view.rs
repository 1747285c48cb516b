use recipebox_db::table::Recipe;
use recipebox_shared::Error;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn view(&self, id: impl Into<String>) -> recipebox_shared::Result<()> {
        let id = id.into();
        let statement = Query::update()
            .table(Recipe::Table)
            .value(Recipe::Views, Expr::col(Recipe::Views).add(1))
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound("recipe"));
        }

        tracing::debug!(recipe_id = %id, "Recipe viewed");

        Ok(())
    }
}
