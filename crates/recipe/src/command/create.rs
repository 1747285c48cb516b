use recipebox_db::table::Recipe;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::{Validate, ValidationError};

#[derive(Validate, Deserialize, Clone, Debug)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 26))]
    pub user_id: String,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(custom(function = "validate_ingredients"))]
    pub ingredients: Vec<String>,
    #[validate(length(min = 1, max = 50))]
    pub preparation_time: String,
    #[validate(length(min = 1))]
    pub instructions: String,
}

/// One "• item" line per non-blank ingredient.
pub fn format_ingredients(ingredients: &[String]) -> String {
    ingredients
        .iter()
        .map(|ingredient| ingredient.trim())
        .filter(|ingredient| !ingredient.is_empty())
        .map(|ingredient| format!("• {ingredient}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate_ingredients(ingredients: &[String]) -> Result<(), ValidationError> {
    if ingredients.iter().all(|ingredient| ingredient.trim().is_empty()) {
        return Err(ValidationError::new("required")
            .with_message("at least one ingredient is required".into()));
    }

    Ok(())
}

impl super::Command {
    pub async fn create(&self, input: CreateInput) -> recipebox_shared::Result<String> {
        input.validate()?;

        let ingredients = format_ingredients(&input.ingredients);
        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::UserId,
                Recipe::Title,
                Recipe::Ingredients,
                Recipe::PreparationTime,
                Recipe::Instructions,
                Recipe::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.user_id.to_owned().into(),
                input.title.into(),
                ingredients.into(),
                input.preparation_time.into(),
                input.instructions.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(recipe_id = %id, user_id = %input.user_id, "Recipe created");

        Ok(id)
    }
}
