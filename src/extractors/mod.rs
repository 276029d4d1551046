use crate::model::MealRecord;
use scraper::Html;

mod menu_list;

pub use self::menu_list::MenuListExtractor;

pub trait Extractor {
    fn can_parse(&self, document: &Html) -> bool;
    fn parse(&self, document: &Html) -> Vec<MealRecord>;
}
