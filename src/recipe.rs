//! Recipe construction and serving scaling.

use log::debug;

use crate::ingredient;
use crate::model::{Recipe, RecipeDetail};

/// Servings assumed when the API omits them.
const DEFAULT_SERVINGS: u32 = 4;

/// Direction of a serving-size adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inc,
    Dec,
}

impl Recipe {
    /// Build a recipe from the detail payload. Ingredients are parsed
    /// exactly once here; missing servings and cook time fall back to
    /// sensible estimates.
    pub fn from_detail(id: impl Into<String>, detail: RecipeDetail) -> Self {
        let ingredients: Vec<_> = detail
            .ingredients
            .iter()
            .map(|raw| ingredient::parse(raw))
            .collect();
        let cook_time = detail
            .cook_time
            .unwrap_or_else(|| estimate_cook_time(ingredients.len()));
        Recipe {
            id: id.into(),
            title: detail.title,
            author: detail.author,
            img: detail.img,
            url: detail.url,
            servings: detail.servings.unwrap_or(DEFAULT_SERVINGS),
            cook_time,
            ingredients,
        }
    }

    /// Adjust servings one step and rescale every ingredient count
    /// proportionally. `Dec` at one serving is a no-op; counts of `None`
    /// are left alone.
    pub fn update_servings(&mut self, direction: Direction) {
        let old = self.servings;
        let new = match direction {
            Direction::Dec if old <= 1 => return,
            Direction::Dec => old - 1,
            Direction::Inc => old + 1,
        };

        let factor = f64::from(new) / f64::from(old);
        for ing in &mut self.ingredients {
            if let Some(count) = ing.count {
                ing.count = Some(count * factor);
            }
        }
        debug!("servings {} -> {}", old, new);
        self.servings = new;
    }
}

/// Rough cook-time estimate when the API does not provide one: fifteen
/// minutes per started batch of three ingredients.
fn estimate_cook_time(num_ingredients: usize) -> u32 {
    let periods = (num_ingredients as u32).div_ceil(3);
    periods * 15
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(ingredients: &[&str], servings: Option<u32>, cook_time: Option<u32>) -> RecipeDetail {
        RecipeDetail {
            title: "Test".to_string(),
            author: "Author".to_string(),
            img: "img.jpg".to_string(),
            url: "https://example.com".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            servings,
            cook_time,
        }
    }

    #[test]
    fn test_from_detail_parses_ingredients_once() {
        let recipe = Recipe::from_detail("r1", detail(&["2 cups flour", "3 eggs"], Some(2), Some(30)));
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].unit, "cup");
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.cook_time, 30);
    }

    #[test]
    fn test_missing_servings_and_time_fall_back() {
        let recipe = Recipe::from_detail(
            "r1",
            detail(&["a", "b", "c", "d"], None, None),
        );
        assert_eq!(recipe.servings, 4);
        // four ingredients -> two periods of fifteen minutes
        assert_eq!(recipe.cook_time, 30);
    }

    #[test]
    fn test_inc_scales_counts() {
        let mut recipe = Recipe::from_detail("r1", detail(&["2 cups flour"], Some(2), Some(10)));
        recipe.update_servings(Direction::Inc);
        assert_eq!(recipe.servings, 3);
        let count = recipe.ingredients[0].count.unwrap();
        assert!((count - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_dec_floors_at_one() {
        let mut recipe = Recipe::from_detail("r1", detail(&["2 cups flour"], Some(1), Some(10)));
        recipe.update_servings(Direction::Dec);
        assert_eq!(recipe.servings, 1);
        let count = recipe.ingredients[0].count.unwrap();
        assert!((count - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_inc_dec_round_trip_is_stable() {
        let mut recipe = Recipe::from_detail(
            "r1",
            detail(&["1 1/2 cups flour", "3 eggs", "a pinch of salt"], Some(4), Some(20)),
        );
        let original: Vec<Option<f64>> = recipe.ingredients.iter().map(|i| i.count).collect();
        for _ in 0..10 {
            recipe.update_servings(Direction::Inc);
        }
        for _ in 0..10 {
            recipe.update_servings(Direction::Dec);
        }
        assert_eq!(recipe.servings, 4);
        for (ing, orig) in recipe.ingredients.iter().zip(original) {
            match (ing.count, orig) {
                (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                (None, None) => {}
                other => panic!("count changed shape: {other:?}"),
            }
        }
    }

    #[test]
    fn test_none_counts_not_scaled() {
        let mut recipe = Recipe::from_detail("r1", detail(&["a pinch of salt"], Some(2), Some(10)));
        recipe.update_servings(Direction::Inc);
        assert_eq!(recipe.ingredients[0].count, None);
    }
}
