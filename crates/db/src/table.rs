use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Title,
    Ingredients,
    PreparationTime,
    Instructions,
    Views,
    EverTop,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeLike {
    Table,
    RecipeId,
    UserId,
    CreatedAt,
}
