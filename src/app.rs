//! Top-level controller: owns the application state and executes typed
//! commands against it.
//!
//! The UI layer (here, the CLI) translates user input into [`Command`]
//! values and renders the plain-data [`Outcome`] it gets back. Rendering
//! never mutates state directly; everything flows through [`App::dispatch`].

use log::info;

use crate::api::RecipeApi;
use crate::error::Error;
use crate::likes::Likes;
use crate::list::ShoppingList;
use crate::model::{Like, Recipe, RecipeSummary, ShoppingListItem};
use crate::recipe::Direction;
use crate::search::SearchStore;
use crate::storage::Storage;

/// Everything the application remembers between commands. No globals;
/// the top-level controller owns one of these.
pub struct AppState<S: Storage> {
    pub search: Option<SearchStore>,
    pub recipe: Option<Recipe>,
    pub list: ShoppingList,
    pub likes: Likes<S>,
}

/// One user action, as dispatched by the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a new search, replacing any previous results.
    Search(String),
    /// Jump to a result page of the current search.
    GotoPage(usize),
    /// Load a recipe by id.
    OpenRecipe(String),
    /// Adjust servings of the loaded recipe one step.
    AdjustServings(Direction),
    /// Add all ingredients of the loaded recipe to the shopping list.
    AddToList,
    /// Remove one shopping-list item.
    DeleteItem(String),
    /// Overwrite one shopping-list item's count.
    UpdateCount(String, f64),
    /// Like or unlike the loaded recipe.
    ToggleLike,
    /// Show the current shopping list.
    ShowList,
    /// Show the liked recipes.
    ShowLikes,
}

/// Plain data handed back for rendering.
#[derive(Debug, Clone)]
pub enum Outcome {
    ResultsPage {
        query: String,
        page: usize,
        num_pages: usize,
        results: Vec<RecipeSummary>,
    },
    RecipeLoaded(Recipe),
    ServingsUpdated(Recipe),
    ListChanged(Vec<ShoppingListItem>),
    LikeToggled {
        liked: bool,
        num_likes: usize,
    },
    LikesListed(Vec<Like>),
}

pub struct App<A: RecipeApi, S: Storage> {
    api: A,
    page_size: usize,
    pub state: AppState<S>,
}

impl<A: RecipeApi, S: Storage> App<A, S> {
    /// Build the controller; restores persisted likes from `storage`.
    pub fn new(api: A, storage: S, page_size: usize) -> Self {
        App {
            api,
            page_size,
            state: AppState {
                search: None,
                recipe: None,
                list: ShoppingList::new(),
                likes: Likes::new(storage),
            },
        }
    }

    /// Execute one command. Fetch failures leave prior state untouched;
    /// a newer search simply supersedes whatever an older in-flight one
    /// would have written.
    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, Error> {
        match command {
            Command::Search(query) => {
                let results = self.api.search(&query).await?;
                info!("search '{}' returned {} result(s)", query, results.len());
                self.state.search = Some(SearchStore::new(query, results));
                self.results_page()
            }
            Command::GotoPage(page) => {
                let search = self.state.search.as_mut().ok_or(Error::NoSearchResults)?;
                search.page = page;
                self.results_page()
            }
            Command::OpenRecipe(id) => {
                let detail = self.api.get_recipe(&id).await?;
                let recipe = Recipe::from_detail(id, detail);
                info!("loaded recipe '{}'", recipe.title);
                self.state.recipe = Some(recipe.clone());
                Ok(Outcome::RecipeLoaded(recipe))
            }
            Command::AdjustServings(direction) => {
                let recipe = self.state.recipe.as_mut().ok_or(Error::NoRecipeLoaded)?;
                recipe.update_servings(direction);
                Ok(Outcome::ServingsUpdated(recipe.clone()))
            }
            Command::AddToList => {
                let recipe = self.state.recipe.as_ref().ok_or(Error::NoRecipeLoaded)?;
                for ing in &recipe.ingredients {
                    // unquantified lines become a single editable unit
                    self.state.list.add_item(
                        ing.count.unwrap_or(1.0),
                        ing.unit.clone(),
                        ing.ingredient.clone(),
                    );
                }
                Ok(Outcome::ListChanged(self.state.list.items().to_vec()))
            }
            Command::DeleteItem(id) => {
                self.state.list.delete_item(&id);
                Ok(Outcome::ListChanged(self.state.list.items().to_vec()))
            }
            Command::UpdateCount(id, count) => {
                self.state.list.update_count(&id, count);
                Ok(Outcome::ListChanged(self.state.list.items().to_vec()))
            }
            Command::ToggleLike => {
                let recipe = self.state.recipe.as_ref().ok_or(Error::NoRecipeLoaded)?;
                let liked = if self.state.likes.is_liked(&recipe.id) {
                    self.state.likes.delete_like(&recipe.id);
                    false
                } else {
                    self.state.likes.add_like(
                        recipe.id.clone(),
                        recipe.title.clone(),
                        recipe.author.clone(),
                        recipe.img.clone(),
                    );
                    true
                };
                Ok(Outcome::LikeToggled {
                    liked,
                    num_likes: self.state.likes.get_num_likes(),
                })
            }
            Command::ShowList => Ok(Outcome::ListChanged(self.state.list.items().to_vec())),
            Command::ShowLikes => Ok(Outcome::LikesListed(self.state.likes.likes().to_vec())),
        }
    }

    fn results_page(&self) -> Result<Outcome, Error> {
        let search = self.state.search.as_ref().ok_or(Error::NoSearchResults)?;
        Ok(Outcome::ResultsPage {
            query: search.query.clone(),
            page: search.page,
            num_pages: search.num_pages(self.page_size),
            results: search.get_page(search.page, self.page_size).to_vec(),
        })
    }
}
