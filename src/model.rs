use serde::Serialize;
use std::fmt;

/// Meal type label written to the `YemekTür` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Soup,
    Drink,
    Dessert,
    Extra,
    MainDish,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Soup => "soup",
            Category::Drink => "drink",
            Category::Dessert => "dessert",
            Category::Extra => "extra",
            Category::MainDish => "mainDish",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal line extracted from the menu document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealRecord {
    /// `YYYY-MM-DD`, taken from the date heading of the enclosing group
    pub date: String,
    pub name: String,
    pub category: Category,
    /// `"<digits> KKAL"` or empty
    pub calories: String,
    /// Most recent section heading in the group, empty before the first one
    pub menu_section: String,
}
