use thiserror::Error;

/// Errors raised while turning a line of user input into a typed field.
///
/// Any of these aborts the operation that was collecting the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{input}' is not a valid {field}")]
    InvalidNumber { field: &'static str, input: String },

    #[error("Quantity '{input}' must be a finite number greater than zero")]
    InvalidQuantity { input: String },

    #[error("Unknown food group '{0}'")]
    UnknownFoodGroup(String),

    #[error("Input ended before the recipe was complete")]
    EndOfInput,
}

/// Errors raised while running the interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Bad input for one field. Aborts the current operation, never the loop.
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
