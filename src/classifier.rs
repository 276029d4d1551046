//! Keyword based meal categories.
//!
//! Matching is substring based on the lowercased Turkish name, so the
//! keyword spellings below have to stay exactly as they are.

use crate::model::Category;

const SOUP: &[&str] = &["çorba", "aşı"];
const DRINKS: &[&str] = &["ayran", "soda", "gazoz", "su"];
const DESSERTS: &[&str] = &[
    "muhallebi",
    "dondurma",
    "kek",
    "revani",
    "tatlı",
    "şokola",
    "prenses",
    "hintpare",
    "sitlaç",
];
const FRUIT: &[&str] = &["meyve"];
const YOGURT: &[&str] = &["yoğurt"];
const SIDES: &[&str] = &["pilav", "makarna", "bulgur", "pirinç", "erişte"];
const SALAD: &[&str] = &["salata"];

/// Evaluated top to bottom, first match wins. A name matching nothing is a
/// main dish.
const RULES: &[(&[&str], Category)] = &[
    (SOUP, Category::Soup),
    (DRINKS, Category::Drink),
    (DESSERTS, Category::Dessert),
    (FRUIT, Category::Extra),
    (YOGURT, Category::Extra),
    (SIDES, Category::Extra),
    (SALAD, Category::Extra),
];

pub fn classify(name: &str) -> Category {
    let lower = name.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::MainDish)
}
