use super::food_group::FoodGroup;
use crate::render::RecipeFormatter;

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Calories per one unit of `quantity`.
    pub calories: u32,
    pub group: FoodGroup,
}

impl Ingredient {
    /// Calories contributed by this ingredient, `calories * quantity`.
    pub fn weighted_calories(&self) -> f64 {
        f64::from(self.calories) * self.quantity
    }
}

/// One preparation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub description: String,
}

/// A named recipe with its ingredients and ordered preparation steps.
///
/// Both sequences only ever grow; step order is the order of execution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recipe {
    pub name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Appends an ingredient. The caller has already parsed and checked the
    /// numeric fields.
    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: u32,
        group: FoodGroup,
    ) {
        self.ingredients.push(Ingredient {
            name: name.into(),
            quantity,
            unit: unit.into(),
            calories,
            group,
        });
    }

    pub fn add_step(&mut self, description: impl Into<String>) {
        self.steps.push(Step {
            description: description.into(),
        });
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Sum of `calories * quantity` over all ingredients.
    pub fn total_calories(&self) -> f64 {
        // Fold from +0.0 so an empty recipe totals 0, not -0.
        self.ingredients
            .iter()
            .map(Ingredient::weighted_calories)
            .fold(0.0, |total, calories| total + calories)
    }

    /// Canonical multi-line description of the recipe.
    pub fn render(&self) -> String {
        RecipeFormatter::format_recipe(self)
    }
}
