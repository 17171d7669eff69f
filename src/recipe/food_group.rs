use crate::error::InputError;
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// The fixed nutritional category of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodGroup {
    Fruits,
    Vegetables,
    Grains,
    Protein,
    Dairy,
    FatsOils,
    SugarsSweets,
}

// Canonical tokens first; the rest are accepted spellings of the same group.
const LOOKUP: &[(&str, FoodGroup)] = &[
    ("fruits", FoodGroup::Fruits),
    ("vegetables", FoodGroup::Vegetables),
    ("grains", FoodGroup::Grains),
    ("protein", FoodGroup::Protein),
    ("dairy", FoodGroup::Dairy),
    ("fats_oils", FoodGroup::FatsOils),
    ("sugars_sweets", FoodGroup::SugarsSweets),
    ("fats oils", FoodGroup::FatsOils),
    ("fats-oils", FoodGroup::FatsOils),
    ("sugars sweets", FoodGroup::SugarsSweets),
    ("sugars-sweets", FoodGroup::SugarsSweets),
];

impl FoodGroup {
    /// All groups in declaration order.
    pub const ALL: [FoodGroup; 7] = [
        FoodGroup::Fruits,
        FoodGroup::Vegetables,
        FoodGroup::Grains,
        FoodGroup::Protein,
        FoodGroup::Dairy,
        FoodGroup::FatsOils,
        FoodGroup::SugarsSweets,
    ];

    /// The canonical token accepted at the food-group prompt.
    pub fn token(self) -> &'static str {
        match self {
            FoodGroup::Fruits => "Fruits",
            FoodGroup::Vegetables => "Vegetables",
            FoodGroup::Grains => "Grains",
            FoodGroup::Protein => "Protein",
            FoodGroup::Dairy => "Dairy",
            FoodGroup::FatsOils => "Fats_Oils",
            FoodGroup::SugarsSweets => "Sugars_Sweets",
        }
    }

    /// Comma separated list of every canonical token, used as a prompt hint.
    pub fn token_list() -> String {
        Self::ALL.iter().map(|group| group.token()).join(", ")
    }
}

impl FromStr for FoodGroup {
    type Err = InputError;

    /// Case-insensitive match against the lookup table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        LOOKUP
            .iter()
            .find(|(token, _)| *token == needle)
            .map(|(_, group)| *group)
            .ok_or_else(|| InputError::UnknownFoodGroup(s.trim().to_string()))
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
