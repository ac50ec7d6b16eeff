use std::fmt;
use std::str::FromStr;

use super::dish::parse_number;

/// An editable field of a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishField {
    Name,
    Calories,
    Price,
}

impl fmt::Display for DishField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DishField::Name => write!(f, "name"),
            DishField::Calories => write!(f, "calories"),
            DishField::Price => write!(f, "price"),
        }
    }
}

impl FromStr for DishField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(DishField::Name),
            "calories" => Ok(DishField::Calories),
            "price" => Ok(DishField::Price),
            _ => Err(format!(
                "Invalid field '{}'. Valid options: name, calories, price",
                s
            )),
        }
    }
}

/// A typed assignment to one field of a dish.
#[derive(Debug, Clone, PartialEq)]
pub enum DishEdit {
    Name(String),
    Calories(f64),
    Price(f64),
}

impl DishEdit {
    /// Builds an edit from a field and its text value.
    pub fn parse(field: DishField, value: &str) -> Result<Self, String> {
        match field {
            DishField::Name => Ok(DishEdit::Name(value.to_string())),
            DishField::Calories => parse_number(value)
                .map(DishEdit::Calories)
                .ok_or_else(|| format!("Invalid calories '{}': expected a number", value)),
            DishField::Price => parse_number(value)
                .map(DishEdit::Price)
                .ok_or_else(|| format!("Invalid price '{}': expected a number", value)),
        }
    }

    pub fn field(&self) -> DishField {
        match self {
            DishEdit::Name(_) => DishField::Name,
            DishEdit::Calories(_) => DishField::Calories,
            DishEdit::Price(_) => DishField::Price,
        }
    }
}
