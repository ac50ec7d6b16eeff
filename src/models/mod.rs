mod dish;
mod dish_field;

pub use dish::{Dish, DishDraft, DishId, NewDish};
pub use dish_field::{DishEdit, DishField};
