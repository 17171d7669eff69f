//! The interactive menu loop that drives the catalog.
//!
//! A [`Session`] owns the [`Catalog`] for one run, reads commands and field
//! values from a [`LineSource`] and writes every prompt and report to a
//! `std::io::Write` sink.
//!
//! Malformed input while adding a recipe aborts the whole add: the error is
//! reported, nothing is added and the menu is shown again. A bad selection
//! index is reported as `Invalid choice.` and is not retried either.

pub mod fields;
pub mod source;

pub use source::{LineSource, ReaderSource, ScriptedSource, StdinSource};

use crate::catalog::Catalog;
use crate::error::{InputError, SessionError};
use crate::recipe::{FoodGroup, Recipe};
use crate::render::RecipeFormatter;
use std::io::Write;
use tracing::{debug, trace, warn};

pub const BANNER: &str = "Welcome to Recipe App!";
pub const NO_RECIPES: &str = "No recipes available.";
pub const INVALID_CHOICE: &str = "Invalid choice.";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// A top-level menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddRecipe,
    ListRecipes,
    SelectRecipe,
    Exit,
}

impl Command {
    /// Maps a menu entry (`1` to `4`) to its command.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::AddRecipe),
            "2" => Some(Command::ListRecipes),
            "3" => Some(Command::SelectRecipe),
            "4" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user chose the exit command.
    Requested,
    /// The line source ran dry.
    EndOfInput,
}

/// Library-side settings for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub show_banner: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { show_banner: true }
    }
}

/// The session controller: one catalog, one input, one output.
pub struct Session<S, W> {
    catalog: Catalog,
    input: S,
    output: W,
    options: SessionOptions,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(input: S, output: W) -> Self {
        Self::with_options(input, output, SessionOptions::default())
    }

    pub fn with_options(input: S, output: W, options: SessionOptions) -> Self {
        Self {
            catalog: Catalog::new(),
            input,
            output,
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the session, handing back its catalog and output sink.
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.output)
    }

    /// Runs the menu loop until the exit command or the end of input.
    pub fn run(&mut self) -> Result<Exit, SessionError> {
        if self.options.show_banner {
            writeln!(self.output, "{}", BANNER)?;
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.next_line()? else {
                debug!("input exhausted, leaving menu loop");
                return Ok(Exit::EndOfInput);
            };

            match Command::from_input(&line) {
                Some(Command::AddRecipe) => self.add_recipe()?,
                Some(Command::ListRecipes) => self.list_recipes()?,
                Some(Command::SelectRecipe) => self.select_recipe()?,
                Some(Command::Exit) => {
                    debug!("exit requested");
                    return Ok(Exit::Requested);
                }
                None => writeln!(self.output, "{}", INVALID_OPTION)?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "Enter option:")?;
        writeln!(self.output, "1. Add recipe")?;
        writeln!(self.output, "2. Display all recipes")?;
        writeln!(self.output, "3. Choose a recipe")?;
        writeln!(self.output, "4. Exit")?;
        self.output.flush()?;
        Ok(())
    }

    /// Runs the add-recipe dialogue and appends the result to the catalog.
    ///
    /// Input errors abort the dialogue and are reported to the user; only
    /// channel failures are returned.
    pub fn add_recipe(&mut self) -> Result<(), SessionError> {
        match self.read_recipe() {
            Ok(recipe) => {
                debug!(
                    name = %recipe.name,
                    ingredients = recipe.ingredients().len(),
                    steps = recipe.steps().len(),
                    "recipe added"
                );
                self.catalog.add(recipe);
                Ok(())
            }
            Err(SessionError::Input(e)) => {
                warn!(error = %e, "add recipe aborted");
                writeln!(self.output, "Error: {}. Recipe was not added.", e)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn read_recipe(&mut self) -> Result<Recipe, SessionError> {
        let name = self.prompt_line("Enter recipe name:")?;
        let mut recipe = Recipe::new(name);

        let count = self.prompt_line("Enter the number of ingredients:")?;
        let ingredient_count = fields::parse_count(&count, "ingredient count")?;

        for i in 0..ingredient_count {
            writeln!(self.output, "Enter details for ingredient {}:", i + 1)?;
            let name = self.prompt_inline("Name: ")?;
            let quantity = fields::parse_quantity(&self.prompt_inline("Quantity: ")?)?;
            let unit = self.prompt_inline("Unit: ")?;
            let calories = fields::parse_calories(&self.prompt_inline("Calories: ")?)?;
            let group_prompt = format!("Food Group ({}): ", FoodGroup::token_list());
            let group = fields::parse_food_group(&self.prompt_inline(&group_prompt)?)?;

            recipe.add_ingredient(name, quantity, unit, calories, group);
        }

        let count = self.prompt_line("Enter the number of steps:")?;
        let step_count = fields::parse_count(&count, "step count")?;

        for i in 0..step_count {
            let description = self.prompt_line(&format!("Enter step {}:", i + 1))?;
            recipe.add_step(description);
        }

        Ok(recipe)
    }

    /// Prints every recipe name, sorted alphabetically ignoring case.
    pub fn list_recipes(&mut self) -> Result<(), SessionError> {
        if self.catalog.is_empty() {
            writeln!(self.output, "{}", NO_RECIPES)?;
            return Ok(());
        }

        writeln!(self.output, "Recipes:")?;
        for recipe in self.catalog.sorted_by_name() {
            writeln!(self.output, "{}", recipe.name)?;
        }
        Ok(())
    }

    /// Lists recipes in catalog order and displays the one the user picks.
    pub fn select_recipe(&mut self) -> Result<(), SessionError> {
        if self.catalog.is_empty() {
            writeln!(self.output, "{}", NO_RECIPES)?;
            return Ok(());
        }

        writeln!(self.output, "Choose a recipe:")?;
        for (index, recipe) in self.catalog.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, recipe.name)?;
        }
        self.output.flush()?;

        let choice = self.next_line()?;
        let recipe = choice
            .as_deref()
            .and_then(|line| line.trim().parse::<usize>().ok())
            .and_then(|position| self.catalog.get(position));

        match recipe {
            Some(recipe) => {
                debug!(name = %recipe.name, "recipe selected");
                write!(self.output, "{}", recipe.render())?;
                write!(self.output, "{}", RecipeFormatter::format_calories(recipe))?;
            }
            None => {
                debug!(choice = ?choice, "invalid recipe choice");
                writeln!(self.output, "{}", INVALID_CHOICE)?;
            }
        }
        Ok(())
    }

    fn next_line(&mut self) -> Result<Option<String>, SessionError> {
        let line = self.input.read_line()?;
        trace!(line = ?line, "read input line");
        Ok(line)
    }

    /// Prints a prompt on its own line and reads the answer.
    fn prompt_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        writeln!(self.output, "{}", prompt)?;
        self.read_answer()
    }

    /// Prints a prompt without a newline and reads the answer.
    fn prompt_inline(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.read_answer()
    }

    fn read_answer(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;
        self.next_line()?
            .ok_or(SessionError::Input(InputError::EndOfInput))
    }
}
