use recipebox_db::table::RecipeLike;
use recipebox_shared::Error;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

impl super::Command {
    /// Records that `user_id` likes the recipe. Liking twice is a no-op.
    pub async fn like(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> recipebox_shared::Result<()> {
        let id = id.into();
        let user_id = user_id.into();

        if !self.exists(&id).await? {
            return Err(Error::NotFound("recipe"));
        }

        let statement = Query::insert()
            .into_table(RecipeLike::Table)
            .columns([
                RecipeLike::RecipeId,
                RecipeLike::UserId,
                RecipeLike::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                user_id.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .on_conflict(
                OnConflict::columns([RecipeLike::RecipeId, RecipeLike::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() > 0 {
            tracing::info!(recipe_id = %id, user_id = %user_id, "Recipe liked");
        }

        Ok(())
    }

    /// Removes the like of `user_id`, if any.
    pub async fn unlike(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> recipebox_shared::Result<()> {
        let id = id.into();
        let user_id = user_id.into();

        let statement = Query::delete()
            .from_table(RecipeLike::Table)
            .and_where(Expr::col(RecipeLike::RecipeId).eq(&id))
            .and_where(Expr::col(RecipeLike::UserId).eq(&user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() > 0 {
            tracing::info!(recipe_id = %id, user_id = %user_id, "Recipe unliked");
        }

        Ok(())
    }
}
