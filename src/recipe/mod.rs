pub mod definition;
pub mod food_group;

pub use definition::*;
pub use food_group::*;
