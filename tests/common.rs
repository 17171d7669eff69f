//! Common test utilities for building recipes and scripted sessions.
use recipe_book::prelude::*;

/// A recipe with two ingredients and three steps.
///
/// Calories: 2 cups * 455 + 3 pieces * 105 = 1225
#[allow(dead_code)]
pub fn create_banana_bread() -> Recipe {
    let mut recipe = Recipe::new("Banana Bread");
    recipe.add_ingredient("Flour", 2.0, "cups", 455, FoodGroup::Grains);
    recipe.add_ingredient("Banana", 3.0, "pieces", 105, FoodGroup::Fruits);
    recipe.add_step("Mash the bananas");
    recipe.add_step("Fold in the flour");
    recipe.add_step("Bake for 60 minutes");
    recipe
}

/// Builds a recipe that only has a name.
#[allow(dead_code)]
pub fn named(name: &str) -> Recipe {
    Recipe::new(name)
}

/// Script lines that add a recipe with one ingredient and one step.
#[allow(dead_code)]
pub fn add_simple_recipe_lines(name: &str) -> Vec<String> {
    [
        "1", name, "1", "Butter", "0.5", "cup", "1628", "Fats_Oils", "1", "Melt it",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Runs a session over the given lines with the banner switched off.
#[allow(dead_code)]
pub fn run_script<I, S>(lines: I) -> (Exit, Catalog, String)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options = SessionOptions { show_banner: false };
    let mut session = Session::with_options(ScriptedSource::new(lines), Vec::new(), options);
    let exit = session.run().expect("session should not fail on in-memory I/O");
    let (catalog, output) = session.into_parts();
    (
        exit,
        catalog,
        String::from_utf8(output).expect("output should be UTF-8"),
    )
}

/// Output lines that are not part of the repeated menu.
#[allow(dead_code)]
pub fn without_menu(output: &str) -> Vec<&str> {
    const MENU: [&str; 5] = [
        "Enter option:",
        "1. Add recipe",
        "2. Display all recipes",
        "3. Choose a recipe",
        "4. Exit",
    ];
    output
        .lines()
        .filter(|line| !MENU.contains(line))
        .collect()
}
