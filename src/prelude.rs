//! Prelude module for convenient imports
//!
//! Re-exports the types needed to build recipes and drive a session.
//!
//! # Example
//!
//! ```rust
//! use recipe_book::prelude::*;
//!
//! let mut recipe = Recipe::new("Fruit Salad");
//! recipe.add_ingredient("Apple", 2.0, "pieces", 95, FoodGroup::Fruits);
//! recipe.add_step("Chop the apples");
//! assert_eq!(recipe.total_calories(), 190.0);
//! ```

// Domain model
pub use crate::recipe::{FoodGroup, Ingredient, Recipe, Step};

// Catalog and session
pub use crate::catalog::Catalog;
pub use crate::session::{
    Command, Exit, LineSource, ReaderSource, ScriptedSource, Session, SessionOptions, StdinSource,
};

// Rendering
pub use crate::render::RecipeFormatter;

// Error types
pub use crate::error::{InputError, SessionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
