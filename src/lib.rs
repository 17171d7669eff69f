//! # recipe-book - Interactive Console Recipe Book
//!
//! **recipe-book** records recipes (ingredients with quantities, units,
//! calories and food groups, plus ordered preparation steps), lists them
//! alphabetically and displays a chosen recipe with its total calories.
//!
//! ## Core Workflow
//!
//! 1.  **Model**: [`recipe::Recipe`] holds ingredients and steps and knows how
//!     to total its calories and render itself.
//! 2.  **Catalog**: [`catalog::Catalog`] keeps every recipe of the session in
//!     the order it was entered.
//! 3.  **Session**: [`session::Session`] runs the menu loop, reading lines from
//!     any [`session::LineSource`] and writing to any `std::io::Write`.
//!
//! ## Quick Start
//!
//! ```rust
//! use recipe_book::prelude::*;
//!
//! let script = ScriptedSource::new([
//!     "1", "Pancakes", "1",
//!     "Flour", "2", "cups", "455", "grains",
//!     "1", "Mix and fry",
//!     "3", "1",
//!     "4",
//! ]);
//! let mut session = Session::new(script, Vec::new());
//! let exit = session.run()?;
//! assert_eq!(exit, Exit::Requested);
//!
//! let (catalog, output) = session.into_parts();
//! assert_eq!(catalog.len(), 1);
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("2 cups of Flour"));
//! assert!(text.contains("Total calories: 910"));
//! # Ok::<(), recipe_book::error::SessionError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod prelude;
pub mod recipe;
pub mod render;
pub mod session;
