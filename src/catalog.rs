use crate::recipe::Recipe;
use itertools::Itertools;

/// The in-memory collection of every recipe entered during a session.
///
/// Recipes keep their insertion order; sorted views are snapshots and never
/// reorder the catalog itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes in catalog (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Looks up a recipe by its 1-based position in catalog order.
    pub fn get(&self, position: usize) -> Option<&Recipe> {
        position
            .checked_sub(1)
            .and_then(|index| self.recipes.get(index))
    }

    pub fn last(&self) -> Option<&Recipe> {
        self.recipes.last()
    }

    /// Recipes ordered by name, ignoring case. Equal names keep their
    /// catalog order.
    pub fn sorted_by_name(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .sorted_by_cached_key(|recipe| recipe.name.to_uppercase())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
