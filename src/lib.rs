pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod likes;
pub mod list;
pub mod model;
pub mod recipe;
pub mod search;
pub mod storage;

pub use api::{HttpRecipeApi, RecipeApi};
pub use app::{App, AppState, Command, Outcome};
pub use config::Settings;
pub use error::Error;
pub use likes::Likes;
pub use list::ShoppingList;
pub use model::{Ingredient, Like, Recipe, RecipeSummary, ShoppingListItem};
pub use recipe::Direction;
pub use search::SearchStore;
pub use storage::{FileStorage, MemoryStorage, Storage};
