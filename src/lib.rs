pub mod core;
pub mod menu;

pub use crate::core::db::{Minutes, NewRecipe, Recipe, RecipeDb, RecipeRepository};
pub use crate::core::error::{RecipeError, Result};
pub use menu::{Menu, Session};
