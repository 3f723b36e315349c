use serde::{Deserialize, Serialize};

/// Lightweight recipe metadata returned by search, without the full
/// ingredient list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// A single structured ingredient line.
///
/// `count` is `None` when the raw text carried no parseable quantity
/// ("a pinch of salt"); `unit` is empty when none was recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// A fully loaded recipe. Built once per navigation; `servings` is the
/// only field mutated afterwards (together with the ingredient counts it
/// scales).
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub servings: u32,
    pub cook_time: u32,
    pub ingredients: Vec<Ingredient>,
}

/// Wire format of the recipe-detail endpoint.
#[derive(Debug, Deserialize)]
pub struct RecipeDetail {
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub ingredients: Vec<String>,
    pub servings: Option<u32>,
    #[serde(rename = "cookTime")]
    pub cook_time: Option<u32>,
}

/// One entry of the shopping list, keyed by a synthetic id that is unique
/// for the lifetime of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

/// A saved recipe reference, persisted locally.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Like {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}
