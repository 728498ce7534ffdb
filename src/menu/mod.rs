//! The interactive menu: prints the operations, reads a choice, and runs it
//! against a [`RecipeRepository`].
//!
//! Validation and storage failures are reported and the menu starts over.
//! Only console I/O failures end the loop with an error.

mod input;

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::core::{
    db::{Minutes, NewRecipe, Recipe, RecipeRepository},
    error::{RecipeError, Result},
};

pub use input::{Prompter, normalize, parse_int};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateTables,
    AddRecipe,
    ListRecipes,
    SelectRecipe,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::CreateTables,
        Operation::AddRecipe,
        Operation::ListRecipes,
        Operation::SelectRecipe,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Operation::CreateTables),
            2 => Some(Operation::AddRecipe),
            3 => Some(Operation::ListRecipes),
            4 => Some(Operation::SelectRecipe),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Operation::CreateTables => 1,
            Operation::AddRecipe => 2,
            Operation::ListRecipes => 3,
            Operation::SelectRecipe => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::CreateTables => "Create and populate all tables",
            Operation::AddRecipe => "Add a recipe",
            Operation::ListRecipes => "List recipes",
            Operation::SelectRecipe => "Select a recipe",
        }
    }
}

/// What the user asked for at the top-level prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Exit,
    Run(Operation),
    Unknown(i64),
}

impl Choice {
    pub fn parse(input: Option<&str>) -> Result<Self> {
        Ok(match parse_int(input)? {
            None => Choice::Exit,
            Some(n) => Operation::from_number(n).map_or(Choice::Unknown(n), Choice::Run),
        })
    }
}

#[derive(Debug, Default)]
pub struct Session {
    current_recipe: Option<Recipe>,
}

impl Session {
    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.current_recipe.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, I, O> {
    repo: R,
    prompter: Prompter<I, O>,
    session: Session,
}

impl<R: RecipeRepository, I: BufRead, O: Write> Menu<R, I, O> {
    pub fn new(repo: R, input: I, output: O) -> Self {
        Self {
            repo,
            prompter: Prompter::new(input, output),
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> O {
        self.prompter.into_output()
    }

    /// Loop until the user submits an empty line.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    writeln!(self.prompter.output(), "\nExiting menu.")?;
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "operation failed");
                    writeln!(self.prompter.output(), "\nError: {}. Try again.", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn step(&mut self) -> Result<Flow> {
        self.print_operations()?;
        let input = self
            .prompter
            .get_string_input("\nEnter an operation number (press Enter to quit)")?;

        match Choice::parse(input.as_deref())? {
            Choice::Exit => Ok(Flow::Exit),
            Choice::Run(op) => {
                debug!(?op, "dispatching");
                match op {
                    Operation::CreateTables => self.create_tables().await?,
                    Operation::AddRecipe => self.add_recipe().await?,
                    Operation::ListRecipes => {
                        self.list_recipes().await?;
                    }
                    Operation::SelectRecipe => self.select_recipe().await?,
                }
                Ok(Flow::Continue)
            }
            Choice::Unknown(n) => {
                writeln!(self.prompter.output(), "\n{} is not valid. Try again.", n)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_operations(&mut self) -> Result<()> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "Here's what you can do:")?;
        for op in Operation::ALL {
            writeln!(out, "\t{}) {}", op.number(), op.label())?;
        }
        match &self.session.current_recipe {
            Some(recipe) => writeln!(out, "\nYou are working with recipe: {}: {}", recipe.id, recipe.name)?,
            None => writeln!(out, "\nYou are not working with a recipe.")?,
        }
        Ok(())
    }

    async fn create_tables(&mut self) -> Result<()> {
        self.repo.create_and_populate_tables().await?;
        writeln!(self.prompter.output(), "\nTables created and populated!")?;
        Ok(())
    }

    async fn add_recipe(&mut self) -> Result<()> {
        let name = self
            .prompter
            .get_string_input("Enter the recipe name")?
            .ok_or_else(|| RecipeError::validation("A recipe name is required"))?;
        let notes = self.prompter.get_string_input("Enter the recipe notes")?;
        let num_servings = self
            .prompter
            .get_int_input("Enter a number of servings")?
            .map(|n| {
                u32::try_from(n)
                    .map_err(|_| RecipeError::validation(format!("{} is not a valid number of servings", n)))
            })
            .transpose()?;
        let prep_time = self
            .prompter
            .get_int_input("Enter prep time in minutes")?
            .map(Minutes::try_from)
            .transpose()?;
        let cook_time = self
            .prompter
            .get_int_input("Enter cook time in minutes")?
            .map(Minutes::try_from)
            .transpose()?;

        let draft = NewRecipe {
            name,
            notes,
            num_servings,
            prep_time,
            cook_time,
        };
        let added = self.repo.add_recipe(&draft).await?;
        writeln!(self.prompter.output(), "\nYou added this recipe:\n{}", added)?;

        self.session.current_recipe = self.repo.fetch_recipe_by_id(added.id).await?;
        Ok(())
    }

    async fn list_recipes(&mut self) -> Result<Vec<Recipe>> {
        let recipes = self.repo.fetch_recipes().await?;
        let out = self.prompter.output();
        writeln!(out, "\nRecipes:")?;
        for recipe in &recipes {
            writeln!(out, "\t{}: {}", recipe.id, recipe.name)?;
        }
        Ok(recipes)
    }

    async fn select_recipe(&mut self) -> Result<()> {
        let recipes = self.list_recipes().await?;
        let recipe_id = self.prompter.get_int_input("Select a recipe ID")?;

        self.session.current_recipe = None;
        if let Some(listed) = recipes.iter().find(|r| Some(r.id) == recipe_id) {
            self.session.current_recipe = self.repo.fetch_recipe_by_id(listed.id).await?;
        }

        match &self.session.current_recipe {
            Some(recipe) => writeln!(
                self.prompter.output(),
                "\nYou are working with recipe:\n{}",
                recipe
            )?,
            None => writeln!(self.prompter.output(), "\nInvalid recipe selected.")?,
        }
        Ok(())
    }
}
