use crate::classifier::classify;
use crate::config::SelectorsConfig;
use crate::date::parse_date;
use crate::error::ImportError;
use crate::extractors::Extractor;
use crate::model::MealRecord;
use crate::normalizer::normalize;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Extracts meals from the cafeteria's `yemek_list` markup: one container per
/// day with a date label and a list of lines, some of them section headings.
pub struct MenuListExtractor {
    group: Selector,
    date: Selector,
    item: Selector,
    heading: Selector,
}

/// What a single line item turned out to be.
#[derive(Debug, PartialEq)]
enum Line {
    Heading(String),
    Meal(String),
    Skip,
}

impl MenuListExtractor {
    pub fn new(selectors: &SelectorsConfig) -> Result<Self, ImportError> {
        Ok(Self {
            group: parse_selector(&selectors.group)?,
            date: parse_selector(&selectors.date)?,
            item: parse_selector(&selectors.item)?,
            heading: parse_selector(&selectors.heading)?,
        })
    }

    fn parse_group(&self, group: ElementRef) -> Vec<MealRecord> {
        let Some(date_text) = group.select(&self.date).next().map(element_text) else {
            debug!("Skipping menu group without a date label");
            return Vec::new();
        };
        let Some(date) = parse_date(&date_text) else {
            debug!("Skipping menu group with unparseable date '{}'", date_text);
            return Vec::new();
        };

        // section starts empty for every day
        let (_, records) = group.select(&self.item).map(|li| self.read_line(li)).fold(
            (String::new(), Vec::new()),
            |(section, mut records), line| match line {
                Line::Heading(heading) => (heading, records),
                Line::Meal(text) => {
                    records.push(meal_record(&date, &text, &section));
                    (section, records)
                }
                Line::Skip => (section, records),
            },
        );

        debug!("Extracted {} meals for {}", records.len(), date);
        records
    }

    fn read_line(&self, li: ElementRef) -> Line {
        if let Some(heading) = li.select(&self.heading).next() {
            return Line::Heading(element_text(heading));
        }

        let text = element_text(li);
        if text.is_empty() {
            return Line::Skip;
        }
        if is_legend(&text) || is_banner(&text) {
            debug!("Skipping explanatory line: {}", text);
            return Line::Skip;
        }
        if !text.starts_with('<') && text.contains("KKAL") {
            return Line::Meal(text);
        }

        debug!("Skipping non-meal line: {}", text);
        Line::Skip
    }
}

impl Default for MenuListExtractor {
    fn default() -> Self {
        // the built-in selectors are known to be valid
        Self::new(&SelectorsConfig::default()).expect("default selectors must parse")
    }
}

impl Extractor for MenuListExtractor {
    fn can_parse(&self, document: &Html) -> bool {
        document.select(&self.group).next().is_some()
    }

    fn parse(&self, document: &Html) -> Vec<MealRecord> {
        document
            .select(&self.group)
            .flat_map(|group| self.parse_group(group))
            .collect()
    }
}

fn parse_selector(css: &str) -> Result<Selector, ImportError> {
    Selector::parse(css).map_err(|e| ImportError::Selector(format!("'{css}': {e}")))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// `* İÇERDİĞİNİ ...` footnotes explaining the dietary markers.
fn is_legend(text: &str) -> bool {
    text.starts_with('*') && text.contains("İÇERDİĞİNİ")
}

/// Opening hours banner of the cafeteria.
fn is_banner(text: &str) -> bool {
    text.contains("YEMEKHANE") && text.contains("BANTTA")
}

fn meal_record(date: &str, text: &str, section: &str) -> MealRecord {
    let (name, calories) = normalize(text);
    let category = classify(&name);

    MealRecord {
        date: date.to_string(),
        name,
        category,
        calories,
        menu_section: section.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn first_li(html: &str) -> Line {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("li").unwrap();
        let li = fragment.select(&selector).next().unwrap();
        MenuListExtractor::default().read_line(li)
    }

    #[test]
    fn test_heading_line() {
        assert_eq!(
            first_li("<ul><li><h2> VEJETARYEN MENÜ </h2></li></ul>"),
            Line::Heading("VEJETARYEN MENÜ".to_string())
        );
    }

    #[test]
    fn test_meal_line() {
        assert_eq!(
            first_li("<ul><li>Ayran - <b>70 KKAL</b></li></ul>"),
            Line::Meal("Ayran - 70 KKAL".to_string())
        );
    }

    #[test]
    fn test_skipped_lines() {
        assert_eq!(first_li("<ul><li>   </li></ul>"), Line::Skip);
        assert_eq!(
            first_li("<ul><li>* SÜT VE SÜT ÜRÜNLERİ İÇERDİĞİNİ GÖSTERİR (10 KKAL)</li></ul>"),
            Line::Skip
        );
        assert_eq!(
            first_li("<ul><li>YEMEKHANE 11:30 - 13:30 ARASI BANTTA HİZMET VERMEKTEDİR</li></ul>"),
            Line::Skip
        );
        assert_eq!(first_li("<ul><li>Ekmek</li></ul>"), Line::Skip);
        assert_eq!(
            first_li("<ul><li>&lt;br&gt; Pilav - 200 KKAL</li></ul>"),
            Line::Skip
        );
    }

    #[test]
    fn test_star_without_legend_keyword_is_a_meal() {
        assert_eq!(
            first_li("<ul><li>*Sütlaç - 250 KKAL</li></ul>"),
            Line::Meal("*Sütlaç - 250 KKAL".to_string())
        );
    }

    #[test]
    fn test_meal_record_fields() {
        let record = meal_record("2025-07-28", "Mercimek Çorbası - 150 KKAL", "GÜNÜN MENÜSİ");
        assert_eq!(record.date, "2025-07-28");
        assert_eq!(record.name, "Mercimek Çorbasİ");
        assert_eq!(record.category, Category::Soup);
        assert_eq!(record.calories, "150 KKAL");
        assert_eq!(record.menu_section, "GÜNÜN MENÜSİ");
    }

    #[test]
    fn test_invalid_selector() {
        let selectors = SelectorsConfig {
            group: "div[".to_string(),
            ..SelectorsConfig::default()
        };
        assert!(matches!(
            MenuListExtractor::new(&selectors),
            Err(ImportError::Selector(_))
        ));
    }

    #[test]
    fn test_can_parse() {
        let extractor = MenuListExtractor::default();
        assert!(extractor.can_parse(&Html::parse_document(
            r#"<div class="yemek_list__item"></div>"#
        )));
        assert!(!extractor.can_parse(&Html::parse_document("<p>kapalı</p>")));
    }
}
