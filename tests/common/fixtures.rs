use std::io::Cursor;

use recipes::{Menu, Minutes, NewRecipe, Recipe, RecipeDb, RecipeRepository};

/// Number of example recipes loaded by `create_and_populate_tables`.
pub const SEED_RECIPE_COUNT: usize = 2;

/// Creates a RecipeDb backed by a file in a temporary directory.
/// Returns both the database and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (RecipeDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("recipes.db");
    let db = RecipeDb::new(&path)
        .await
        .expect("Failed to open test database");
    (db, dir)
}

/// Like `create_test_db`, with tables created and seeded.
pub async fn create_seeded_db() -> (RecipeDb, tempfile::TempDir) {
    let (db, dir) = create_test_db().await;
    db.create_and_populate_tables()
        .await
        .expect("Failed to create tables");
    (db, dir)
}

/// Creates a NewRecipe with every optional field filled in.
pub fn make_new_recipe(name: &str) -> NewRecipe {
    NewRecipe {
        name: name.to_string(),
        notes: Some(format!("Notes for {}", name)),
        num_servings: Some(4),
        prep_time: Some(Minutes::new(15)),
        cook_time: Some(Minutes::new(90)),
    }
}

/// Feeds `script` to the menu as console input and runs it to completion.
/// Returns everything printed and the current recipe at exit.
pub async fn run_menu(db: &RecipeDb, script: &str) -> (String, Option<Recipe>) {
    run_menu_bytes(db, script.as_bytes()).await
}

/// Like `run_menu`, for input that is not necessarily UTF-8.
pub async fn run_menu_bytes(db: &RecipeDb, script: &[u8]) -> (String, Option<Recipe>) {
    let mut menu = Menu::new(db.clone(), Cursor::new(script.to_vec()), Vec::new());
    menu.run().await.expect("Menu loop should exit cleanly");
    let current = menu.session().current_recipe().cloned();
    let output = String::from_utf8(menu.into_output()).expect("Menu output should be UTF-8");
    (output, current)
}
