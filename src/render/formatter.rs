use crate::recipe::Recipe;
use std::fmt::Write;

/// Formats recipes into their canonical human-readable text.
pub struct RecipeFormatter;

impl RecipeFormatter {
    /// Render a recipe as a header, its ingredients and its numbered steps.
    ///
    /// Every line, including the last, ends with a newline.
    pub fn format_recipe(recipe: &Recipe) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Recipe: {}", recipe.name);

        out.push_str("Ingredients:\n");
        for ingredient in recipe.ingredients() {
            let _ = writeln!(
                out,
                "{} {} of {}",
                ingredient.quantity, ingredient.unit, ingredient.name
            );
        }

        out.push_str("Steps:\n");
        for (index, step) in recipe.steps().iter().enumerate() {
            let _ = writeln!(out, "{}. {}", index + 1, step.description);
        }
        out
    }

    /// The calorie summary shown after a selected recipe.
    pub fn format_calories(recipe: &Recipe) -> String {
        format!("Total calories: {}\n", recipe.total_calories())
    }
}
