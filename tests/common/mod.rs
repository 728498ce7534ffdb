mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from recipes for tests
pub use recipes::{Menu, Minutes, NewRecipe, Recipe, RecipeDb, RecipeError, RecipeRepository};
