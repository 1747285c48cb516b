use recipebox_shared::RecipeSnapshot;

/// Title, ingredients and instructions joined by single spaces, lower-cased.
pub fn build_document(recipe: &RecipeSnapshot) -> String {
    [
        recipe.title.as_str(),
        recipe.ingredients.as_str(),
        recipe.instructions.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

pub fn build_corpus(recipes: &[RecipeSnapshot]) -> Vec<String> {
    recipes.iter().map(build_document).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_document_joins_fields_in_order() {
        let recipe = RecipeSnapshot {
            title: "Spicy Thai Curry".to_owned(),
            ingredients: "• Coconut Milk\n• Red Curry Paste".to_owned(),
            instructions: "Simmer GENTLY".to_owned(),
            preparation_time: "45 minutes".to_owned(),
            ..Default::default()
        };

        assert_eq!(
            build_document(&recipe),
            "spicy thai curry • coconut milk\n• red curry paste simmer gently"
        );
    }

    #[test]
    fn test_build_document_on_empty_recipe() {
        assert_eq!(build_document(&RecipeSnapshot::default()), "  ");
    }
}
