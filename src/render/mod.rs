pub mod formatter;

pub use formatter::RecipeFormatter;
