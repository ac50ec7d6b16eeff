//! In-memory dish collection backing the reference service.

use tokio::sync::RwLock;

use crate::models::{Dish, DishId, NewDish};
use crate::store::DishStore;

struct Menu {
    dishes: DishStore,
    next_id: u64,
}

/// Shared, lock-protected dish collection.
///
/// Ids are handed out in increasing order and never reused, even after a
/// delete.
pub struct MenuRepository {
    menu: RwLock<Menu>,
}

impl MenuRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            menu: RwLock::new(Menu {
                dishes: DishStore::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a repository holding the two house dishes.
    pub fn seeded() -> Self {
        let mut dishes = DishStore::new();
        dishes.append(Dish::new(DishId(1), "shawarma", 900.0, 39.90));
        dishes.append(Dish::new(DishId(2), "boreka", 300.0, 19.90));
        Self {
            menu: RwLock::new(Menu { dishes, next_id: 3 }),
        }
    }

    pub async fn list(&self) -> Vec<Dish> {
        self.menu.read().await.dishes.as_slice().to_vec()
    }

    pub async fn get(&self, id: DishId) -> Option<Dish> {
        self.menu.read().await.dishes.get(id).cloned()
    }

    /// Stores a new dish under a fresh id.
    pub async fn create(&self, dish: NewDish) -> Dish {
        let mut menu = self.menu.write().await;
        let created = dish.with_id(DishId(menu.next_id));
        menu.next_id += 1;
        menu.dishes.append(created.clone());
        created
    }

    /// Overwrites the dish with `id`. Returns `None` if there is none.
    pub async fn update(&self, id: DishId, dish: NewDish) -> Option<Dish> {
        let updated = dish.with_id(id);
        let mut menu = self.menu.write().await;
        if menu.dishes.replace_by_id(updated.clone()) {
            Some(updated)
        } else {
            None
        }
    }

    pub async fn delete(&self, id: DishId) -> Option<Dish> {
        self.menu.write().await.dishes.remove_by_id(id)
    }

    pub async fn len(&self) -> usize {
        self.menu.read().await.dishes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.menu.read().await.dishes.is_empty()
    }
}

impl Default for MenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded() {
        let repo = MenuRepository::seeded();
        let dishes = repo.list().await;
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].name, "shawarma");
        assert_eq!(dishes[1].id, DishId(2));
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = MenuRepository::new();
        let soup = repo.create(NewDish::new("Soup", 120.0, 5.0)).await;
        let pie = repo.create(NewDish::new("Pie", 400.0, 8.0)).await;

        assert_eq!(soup.id, DishId(1));
        assert_eq!(pie.id, DishId(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = MenuRepository::seeded();
        assert!(repo.delete(DishId(2)).await.is_some());

        let created = repo.create(NewDish::new("Soup", 120.0, 5.0)).await;
        assert_eq!(created.id, DishId(3));
    }

    #[tokio::test]
    async fn test_update() {
        let repo = MenuRepository::seeded();

        let updated = repo
            .update(DishId(1), NewDish::new("falafel", 350.0, 15.0))
            .await
            .unwrap();
        assert_eq!(updated.id, DishId(1));
        assert_eq!(repo.get(DishId(1)).await.unwrap().name, "falafel");

        assert!(repo
            .update(DishId(9), NewDish::new("ghost", 0.0, 0.0))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = MenuRepository::new();
        assert!(repo.delete(DishId(1)).await.is_none());
    }

    #[tokio::test]
    async fn test_is_empty() {
        let repo = MenuRepository::new();
        assert!(repo.is_empty().await);

        repo.create(NewDish::new("Soup", 120.0, 5.0)).await;
        assert!(!repo.is_empty().await);
        assert!(!MenuRepository::seeded().is_empty().await);
    }
}
