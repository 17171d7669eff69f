//! Parsers for the typed fields of the add-recipe dialogue.
use crate::error::InputError;
use crate::recipe::FoodGroup;

/// Parses an ingredient quantity. Must be a finite number greater than zero.
pub fn parse_quantity(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    let quantity: f64 = trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field: "quantity",
        input: trimmed.to_string(),
    })?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(InputError::InvalidQuantity {
            input: trimmed.to_string(),
        });
    }
    Ok(quantity)
}

/// Parses calories per unit as a non-negative whole number.
pub fn parse_calories(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field: "calorie count",
        input: trimmed.to_string(),
    })
}

/// Parses an ingredient or step count.
pub fn parse_count(input: &str, field: &'static str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        input: trimmed.to_string(),
    })
}

pub fn parse_food_group(input: &str) -> Result<FoodGroup, InputError> {
    input.parse()
}
