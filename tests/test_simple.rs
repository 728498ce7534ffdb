use recipes::{RecipeDb, RecipeRepository};

#[tokio::test]
async fn test_simple() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("recipes.db");
    let db: RecipeDb = RecipeDb::new(&path).await?;

    db.create_and_populate_tables().await?;
    let recipes = db.fetch_recipes().await?;
    assert_eq!(recipes.len(), 2);

    Ok(())
}
