//! In-memory collection of confirmed dishes.
//!
//! The store only holds values the collection service has confirmed. It does
//! no I/O; the controller decides when to mutate it.

use crate::models::{Dish, DishId};

/// Ordered, id-unique collection of dishes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishStore {
    dishes: Vec<Dish>,
}

impl DishStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection, keeping the given order.
    pub fn replace_all(&mut self, dishes: Vec<Dish>) {
        self.dishes = dishes;
    }

    /// Adds a dish at the end. The caller must ensure its id is not present.
    pub fn append(&mut self, dish: Dish) {
        debug_assert!(!self.contains(dish.id), "duplicate dish id {}", dish.id);
        self.dishes.push(dish);
    }

    /// Replaces the dish with the same id in place.
    ///
    /// Returns false and leaves the collection untouched when no dish has
    /// that id.
    pub fn replace_by_id(&mut self, dish: Dish) -> bool {
        match self.dishes.iter_mut().find(|d| d.id == dish.id) {
            Some(slot) => {
                *slot = dish;
                true
            }
            None => false,
        }
    }

    /// Removes the dish with the given id, if any.
    pub fn remove_by_id(&mut self, id: DishId) -> Option<Dish> {
        let index = self.dishes.iter().position(|d| d.id == id)?;
        Some(self.dishes.remove(index))
    }

    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: DishId) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn dish(id: u64, name: &str) -> Dish {
        Dish::new(DishId(id), name, 100.0, 10.0)
    }

    fn names(store: &DishStore) -> Vec<&str> {
        store.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_replace_all_keeps_order() {
        let mut store = DishStore::new();
        store.append(dish(9, "Old"));

        store.replace_all(vec![dish(2, "Boreka"), dish(1, "Shawarma")]);

        assert_eq!(names(&store), vec!["Boreka", "Shawarma"]);
        assert!(!store.contains(DishId(9)));
    }

    #[test]
    fn test_append_adds_to_end() {
        let mut store = DishStore::new();
        store.append(dish(1, "Soup"));
        store.append(dish(2, "Salad"));

        assert_eq!(store.len(), 2);
        assert_eq!(names(&store), vec!["Soup", "Salad"]);
    }

    #[test]
    fn test_replace_by_id_keeps_position() {
        let mut store = DishStore::new();
        store.replace_all(vec![dish(1, "Soup"), dish(2, "Salad"), dish(3, "Pie")]);

        assert!(store.replace_by_id(dish(2, "Slaw")));

        assert_eq!(names(&store), vec!["Soup", "Slaw", "Pie"]);
    }

    #[test]
    fn test_replace_by_id_missing_is_noop() {
        let mut store = DishStore::new();
        store.append(dish(1, "Soup"));
        let before = store.clone();

        assert!(!store.replace_by_id(dish(5, "Ghost")));

        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = DishStore::new();
        store.replace_all(vec![dish(1, "Soup"), dish(3, "Pie")]);

        let removed = store.remove_by_id(DishId(3));
        assert_eq!(removed.map(|d| d.name), Some("Pie".to_string()));
        assert_eq!(names(&store), vec!["Soup"]);

        // Absent id is a no-op
        assert!(store.remove_by_id(DishId(3)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[derive(Debug, Clone)]
    enum StoreOp {
        Append(u64),
        Replace(u64),
        Remove(u64),
    }

    fn op_strategy() -> impl Strategy<Value = StoreOp> {
        prop_oneof![
            (1u64..12).prop_map(StoreOp::Append),
            (1u64..12).prop_map(StoreOp::Replace),
            (1u64..12).prop_map(StoreOp::Remove),
        ]
    }

    proptest! {
        #[test]
        fn test_ids_stay_unique_across_mutations(
            initial in proptest::collection::hash_set(1u64..12, 0..6),
            ops in proptest::collection::vec(op_strategy(), 0..40),
        ) {
            let mut order: Vec<u64> = initial.into_iter().collect();
            order.sort_unstable();
            let mut store = DishStore::new();
            store.replace_all(order.iter().map(|&id| dish(id, "Initial")).collect());

            for op in ops {
                match op {
                    // Appending a listed id is a caller error, so only new ids are appended
                    StoreOp::Append(id) if !store.contains(DishId(id)) => {
                        store.append(dish(id, "Appended"));
                        order.push(id);
                    }
                    StoreOp::Append(_) => {}
                    StoreOp::Replace(id) => {
                        let replaced = store.replace_by_id(dish(id, "Replaced"));
                        prop_assert_eq!(replaced, order.contains(&id));
                    }
                    StoreOp::Remove(id) => {
                        let removed = store.remove_by_id(DishId(id));
                        prop_assert_eq!(removed.is_some(), order.contains(&id));
                        order.retain(|&o| o != id);
                    }
                }
            }

            let ids: Vec<u64> = store.iter().map(|d| d.id.0).collect();
            let unique: HashSet<u64> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(ids, order);
        }
    }

    #[test]
    fn test_empty_store() {
        let store = DishStore::new();
        assert!(store.is_empty());
        assert!(store.get(DishId(1)).is_none());
        assert!(store.as_slice().is_empty());
    }
}
