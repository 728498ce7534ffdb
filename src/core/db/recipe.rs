use std::{fmt, future::Future};

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::core::{
    db::model::Minutes,
    error::{RecipeError, Result},
};

/// A recipe as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub notes: Option<String>,
    pub num_servings: Option<u32>,
    pub prep_time: Minutes,
    pub cook_time: Minutes,
    pub created_at: OffsetDateTime,
    pub(super) _guard: (),
}

/// A recipe that has not been saved yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    pub notes: Option<String>,
    pub num_servings: Option<u32>,
    pub prep_time: Option<Minutes>,
    pub cook_time: Option<Minutes>,
}

pub trait RecipeRepository {
    /// Drop and recreate the schema, then load the example recipes.
    /// Everything previously stored is lost.
    fn create_and_populate_tables(&self) -> impl Future<Output = Result<()>>;
    fn add_recipe(&self, recipe: &NewRecipe) -> impl Future<Output = Result<Recipe>>;
    fn fetch_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>>>;
    fn fetch_recipe_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Recipe>>>;
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct RecipeRecord {
    pub recipe_id: i64,
    pub recipe_name: String,
    pub notes: Option<String>,
    pub num_servings: Option<i64>,
    pub prep_minutes: i64,
    pub cook_minutes: i64,
    pub created_at: String,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = RecipeError;

    fn try_from(record: RecipeRecord) -> std::result::Result<Self, Self::Error> {
        let num_servings = record
            .num_servings
            .map(|n| {
                u32::try_from(n).map_err(|_| {
                    RecipeError::Storage(sqlx::Error::Decode(
                        format!("invalid num_servings {} for recipe {}", n, record.recipe_id).into(),
                    ))
                })
            })
            .transpose()?;
        let created_at = OffsetDateTime::parse(&record.created_at, &Rfc3339)
            .map_err(|e| RecipeError::Storage(sqlx::Error::Decode(Box::new(e))))?;
        let minutes = |value: i64, column: &str| {
            Minutes::try_from(value).map_err(|_| {
                RecipeError::Storage(sqlx::Error::Decode(
                    format!("invalid {} {} for recipe {}", column, value, record.recipe_id).into(),
                ))
            })
        };
        let prep_time = minutes(record.prep_minutes, "prep_minutes")?;
        let cook_time = minutes(record.cook_minutes, "cook_minutes")?;
        Ok(Recipe {
            id: record.recipe_id,
            name: record.recipe_name,
            notes: record.notes,
            num_servings,
            prep_time,
            cook_time,
            created_at,
            _guard: (),
        })
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID={}: {}", self.id, self.name)?;
        writeln!(f, "   Notes: {}", self.notes.as_deref().unwrap_or("-"))?;
        match self.num_servings {
            Some(n) => writeln!(f, "   Servings: {}", n)?,
            None => writeln!(f, "   Servings: -")?,
        }
        writeln!(f, "   Prep time: {}", self.prep_time)?;
        writeln!(f, "   Cook time: {}", self.cook_time)?;
        write!(
            f,
            "   Created: {}",
            self.created_at.format(&Rfc3339).map_err(|_| fmt::Error)?
        )
    }
}
