mod model;
mod recipe;
mod state;

use std::{path::Path, sync::Arc};

use state::DbState;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::{debug, info};

use crate::core::error::{RecipeError, Result};
use recipe::RecipeRecord;

pub use model::Minutes;
pub use recipe::{NewRecipe, Recipe, RecipeRepository};

const SCHEMA_SQL: &str = include_str!("../../../sql/recipe_schema.sql");
const DATA_SQL: &str = include_str!("../../../sql/recipe_data.sql");

#[derive(Debug, Clone)]
pub struct RecipeDb {
    state: Arc<DbState>,
}

impl RecipeDb {
    /// Open the database file, creating it when missing. Tables are only
    /// created by [`RecipeRepository::create_and_populate_tables`].
    pub async fn new<P: AsRef<Path>>(db_file: P) -> Result<Self> {
        Ok(Self {
            state: Arc::new(DbState::open(db_file).await?),
        })
    }

    pub async fn close(&self) {
        self.state.close().await
    }
}

impl RecipeRepository for RecipeDb {
    async fn create_and_populate_tables(&self) -> Result<()> {
        let script = format!("{}\n{}", SCHEMA_SQL, DATA_SQL);
        self.state.run_script(&script).await?;
        info!("recipe tables recreated and seeded");
        Ok(())
    }

    async fn add_recipe(&self, recipe: &NewRecipe) -> Result<Recipe> {
        let mut conn = self.state.conn().await?;
        let num_servings = recipe.num_servings.map(i64::from);
        let prep_minutes = i64::from(recipe.prep_time.unwrap_or_default());
        let cook_minutes = i64::from(recipe.cook_time.unwrap_or_default());
        let created_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| RecipeError::Storage(sqlx::Error::Encode(Box::new(e))))?;

        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"INSERT INTO recipe (recipe_name, notes, num_servings, prep_minutes, cook_minutes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING recipe_id, recipe_name, notes, num_servings, prep_minutes, cook_minutes, created_at"#,
        )
        .bind(&recipe.name)
        .bind(&recipe.notes)
        .bind(num_servings)
        .bind(prep_minutes)
        .bind(cook_minutes)
        .bind(created_at)
        .fetch_one(&mut *conn)
        .await?;

        let recipe = Recipe::try_from(record)?;
        info!(id = recipe.id, name = %recipe.name, "added recipe");
        Ok(recipe)
    }

    async fn fetch_recipes(&self) -> Result<Vec<Recipe>> {
        let mut conn = self.state.conn().await?;
        let records = sqlx::query_as::<_, RecipeRecord>(
            r#"SELECT recipe_id, recipe_name, notes, num_servings, prep_minutes, cook_minutes, created_at
            FROM recipe ORDER BY recipe_id ASC"#,
        )
        .fetch_all(&mut *conn)
        .await?;
        debug!(count = records.len(), "fetched recipes");
        records.into_iter().map(Recipe::try_from).collect()
    }

    async fn fetch_recipe_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        let mut conn = self.state.conn().await?;
        sqlx::query_as::<_, RecipeRecord>(
            r#"SELECT recipe_id, recipe_name, notes, num_servings, prep_minutes, cook_minutes, created_at
            FROM recipe WHERE recipe_id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .map(Recipe::try_from)
        .transpose()
    }
}
