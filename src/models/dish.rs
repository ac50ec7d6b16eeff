use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dish_field::{DishEdit, DishField};

/// Server-assigned dish identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u64);

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DishId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(DishId)
            .map_err(|_| format!("Invalid dish id '{}'", s))
    }
}

/// A dish as confirmed by the collection service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub calories: f64,
    pub price: f64,
}

impl Dish {
    pub fn new(id: DishId, name: impl Into<String>, calories: f64, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
            price,
        }
    }

    /// Applies a single field assignment.
    pub fn apply(&mut self, edit: DishEdit) {
        match edit {
            DishEdit::Name(name) => self.name = name,
            DishEdit::Calories(calories) => self.calories = calories,
            DishEdit::Price(price) => self.price = price,
        }
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} cal - ${}", self.name, self.calories, self.price)
    }
}

/// Fields of a dish that has not been created yet (no id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDish {
    pub name: String,
    pub calories: f64,
    pub price: f64,
}

impl NewDish {
    pub fn new(name: impl Into<String>, calories: f64, price: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            price,
        }
    }

    pub fn with_id(self, id: DishId) -> Dish {
        Dish {
            id,
            name: self.name,
            calories: self.calories,
            price: self.price,
        }
    }
}

/// Text input backing the "add dish" form.
///
/// Fields are kept as entered; they are only parsed when the draft is
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    pub calories: String,
    pub price: String,
}

impl DishDraft {
    pub fn new(
        name: impl Into<String>,
        calories: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
            price: price.into(),
        }
    }

    pub fn set(&mut self, field: DishField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DishField::Name => self.name = value,
            DishField::Calories => self.calories = value,
            DishField::Price => self.price = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the dish to create, or `None` if any field is missing.
    ///
    /// A numeric field that does not parse to a finite number counts as
    /// missing.
    pub fn to_new_dish(&self) -> Option<NewDish> {
        if self.name.is_empty() || self.calories.is_empty() || self.price.is_empty() {
            return None;
        }
        Some(NewDish {
            name: self.name.clone(),
            calories: parse_number(&self.calories)?,
            price: parse_number(&self.price)?,
        })
    }
}

pub(crate) fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_display() {
        let dish = Dish::new(DishId(1), "shawarma", 900.0, 39.9);
        assert_eq!(format!("{}", dish), "shawarma - 900 cal - $39.9");
    }

    #[test]
    fn test_dish_json_accepts_integers() {
        let dish: Dish =
            serde_json::from_str(r#"{"id": 7, "name": "Soup", "calories": 120, "price": 5}"#)
                .unwrap();
        assert_eq!(dish, Dish::new(DishId(7), "Soup", 120.0, 5.0));
    }

    #[test]
    fn test_new_dish_has_no_id_on_the_wire() {
        let json = serde_json::to_value(NewDish::new("Soup", 120.0, 5.0)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Soup");
    }

    #[test]
    fn test_dish_id_from_str() {
        assert_eq!(DishId::from_str("42").unwrap(), DishId(42));
        assert_eq!(DishId::from_str(" 3 ").unwrap(), DishId(3));
        assert!(DishId::from_str("abc").is_err());
        assert!(DishId::from_str("-1").is_err());
    }

    #[test]
    fn test_apply_edit() {
        let mut dish = Dish::new(DishId(1), "Soup", 120.0, 5.0);
        dish.apply(DishEdit::Name("Stew".into()));
        dish.apply(DishEdit::Price(6.5));
        assert_eq!(dish.name, "Stew");
        assert_eq!(dish.calories, 120.0);
        assert_eq!(dish.price, 6.5);
    }

    #[test]
    fn test_draft_complete() {
        let draft = DishDraft::new("Soup", "120", "5");
        assert_eq!(draft.to_new_dish(), Some(NewDish::new("Soup", 120.0, 5.0)));
    }

    #[test]
    fn test_draft_missing_fields() {
        assert_eq!(DishDraft::default().to_new_dish(), None);
        assert_eq!(DishDraft::new("Soup", "", "5").to_new_dish(), None);
        assert_eq!(DishDraft::new("", "120", "5").to_new_dish(), None);
    }

    #[test]
    fn test_draft_unparseable_number_counts_as_missing() {
        assert_eq!(DishDraft::new("Soup", "lots", "5").to_new_dish(), None);
        assert_eq!(DishDraft::new("Soup", "120", "NaN").to_new_dish(), None);
    }

    #[test]
    fn test_draft_set_and_clear() {
        let mut draft = DishDraft::default();
        draft.set(DishField::Name, "Soup");
        draft.set(DishField::Price, "5");
        assert_eq!(draft.name, "Soup");
        assert_eq!(draft.price, "5");

        draft.clear();
        assert_eq!(draft, DishDraft::default());
    }
}
