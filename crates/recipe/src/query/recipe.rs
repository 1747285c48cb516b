use recipebox_db::table::Recipe;
use recipebox_shared::RecipeSnapshot;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, Default, FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub ingredients: String,
    pub preparation_time: String,
    pub instructions: String,
    pub views: i64,
    pub ever_top: bool,
    pub created_at: i64,
}

impl RecipeRow {
    pub fn into_snapshot(self, likes: u64) -> RecipeSnapshot {
        RecipeSnapshot {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            ingredients: self.ingredients,
            preparation_time: self.preparation_time,
            instructions: self.instructions,
            views: u64::try_from(self.views).unwrap_or_default(),
            likes,
            ever_top: self.ever_top,
            created_at: u64::try_from(self.created_at).unwrap_or_default(),
        }
    }
}

fn select_recipes() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Recipe::Id,
            Recipe::UserId,
            Recipe::Title,
            Recipe::Ingredients,
            Recipe::PreparationTime,
            Recipe::Instructions,
            Recipe::Views,
            Recipe::EverTop,
            Recipe::CreatedAt,
        ])
        .from(Recipe::Table)
        .to_owned()
}

impl super::Query {
    /// Every recipe in creation order, with like counts. This is the corpus
    /// handed to the ranking engine.
    pub async fn snapshot(&self) -> anyhow::Result<Vec<RecipeSnapshot>> {
        let statement = select_recipes()
            .order_by(Recipe::CreatedAt, Order::Asc)
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .to_owned();

        self.fetch_with_likes(statement).await
    }

    /// Every recipe, newest first.
    pub async fn latest(&self) -> anyhow::Result<Vec<RecipeSnapshot>> {
        let statement = select_recipes()
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        self.fetch_with_likes(statement).await
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<RecipeSnapshot>> {
        let id = id.into();
        let statement = select_recipes()
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(row) = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            return Ok(None);
        };

        let likes = self.like_count(&id).await?;

        Ok(Some(row.into_snapshot(likes)))
    }

    /// Recipes whose title contains `text`, ignoring ASCII case, newest first.
    /// A blank search matches nothing.
    pub async fn search(&self, text: &str) -> anyhow::Result<Vec<RecipeSnapshot>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(vec![]);
        }

        let statement = select_recipes()
            .and_where(Expr::col(Recipe::Title).like(format!("%{text}%")))
            .order_by(Recipe::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        self.fetch_with_likes(statement).await
    }

    async fn fetch_with_likes(
        &self,
        statement: SelectStatement,
    ) -> anyhow::Result<Vec<RecipeSnapshot>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let likes = self.like_counts().await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let count = likes.get(&row.id).copied().unwrap_or_default();
                row.into_snapshot(count)
            })
            .collect())
    }
}
