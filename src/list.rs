//! Shopping list store.
//!
//! The list is a plain append-only collection keyed by synthetic ids, not
//! a quantity-aggregating map: adding the same ingredient twice yields two
//! rows, matching how items are displayed and deleted individually.

use uuid::Uuid;

use crate::model::ShoppingListItem;

#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        ShoppingList::default()
    }

    /// Append a new item under a freshly generated id and return it.
    pub fn add_item(
        &mut self,
        count: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> &ShoppingListItem {
        let item = ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.items.push(item);
        self.items.last().expect("just pushed")
    }

    /// Remove an item by id. Missing ids are a silent no-op.
    pub fn delete_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Overwrite an item's count in place. Missing ids are a silent no-op.
    pub fn update_count(&mut self, id: &str, new_count: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.count = new_count;
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_returns_new_item() {
        let mut list = ShoppingList::new();
        let item = list.add_item(2.0, "cup", "flour");
        assert_eq!(item.count, 2.0);
        assert_eq!(item.unit, "cup");
        assert_eq!(item.ingredient, "flour");
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_identical_ingredients_are_not_merged() {
        let mut list = ShoppingList::new();
        let first = list.add_item(1.0, "cup", "flour").id.clone();
        let second = list.add_item(1.0, "cup", "flour").id.clone();
        assert_ne!(first, second);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_by_id() {
        let mut list = ShoppingList::new();
        let id = list.add_item(1.0, "cup", "flour").id.clone();
        list.add_item(3.0, "", "eggs");
        list.delete_item(&id);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].ingredient, "eggs");
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut list = ShoppingList::new();
        list.add_item(1.0, "cup", "flour");
        let before: Vec<_> = list.items().to_vec();
        list.delete_item("no-such-id");
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_update_count() {
        let mut list = ShoppingList::new();
        let id = list.add_item(1.0, "cup", "flour").id.clone();
        list.update_count(&id, 2.5);
        assert_eq!(list.items()[0].count, 2.5);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut list = ShoppingList::new();
        list.add_item(1.0, "cup", "flour");
        let before: Vec<_> = list.items().to_vec();
        list.update_count("no-such-id", 9.0);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = ShoppingList::new();
        list.add_item(1.0, "", "first");
        list.add_item(1.0, "", "second");
        list.add_item(1.0, "", "third");
        let names: Vec<_> = list.items().iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
