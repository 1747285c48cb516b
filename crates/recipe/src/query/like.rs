use std::collections::HashMap;

use recipebox_db::table::RecipeLike;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

const DISTINCT_LIKERS: &str = r#"COUNT(DISTINCT "user_id")"#;

impl super::Query {
    /// Distinct likers per recipe. Recipes nobody likes are absent.
    pub async fn like_counts(&self) -> anyhow::Result<HashMap<String, u64>> {
        let statement = sea_query::Query::select()
            .column(RecipeLike::RecipeId)
            .expr(Expr::cust(DISTINCT_LIKERS))
            .from(RecipeLike::Table)
            .group_by_col(RecipeLike::RecipeId)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String, i64), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, u64::try_from(count).unwrap_or_default()))
            .collect())
    }

    pub async fn like_count(&self, id: &str) -> anyhow::Result<u64> {
        let statement = sea_query::Query::select()
            .expr(Expr::cust(DISTINCT_LIKERS))
            .from(RecipeLike::Table)
            .and_where(Expr::col(RecipeLike::RecipeId).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    pub async fn is_liked(&self, id: &str, user_id: &str) -> anyhow::Result<bool> {
        let statement = sea_query::Query::select()
            .column(RecipeLike::RecipeId)
            .from(RecipeLike::Table)
            .and_where(Expr::col(RecipeLike::RecipeId).eq(id))
            .and_where(Expr::col(RecipeLike::UserId).eq(user_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(row.is_some())
    }
}
