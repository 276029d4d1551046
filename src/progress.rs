//! Human readable progress output for the console.

use crate::model::MealRecord;
use std::path::Path;

/// Icon for meals listed under `section`.
pub fn section_icon(section: &str) -> &'static str {
    if section.contains("VEJETARYEN") {
        "🌱"
    } else if section.contains("SALATA") {
        "🥗"
    } else {
        "🍽️"
    }
}

/// Banner printed when a known section heading starts.
fn heading_banner(section: &str) -> Option<&'static str> {
    if section.contains("GÜNÜN MENÜSİ") {
        Some("📋")
    } else if section.contains("VEJETARYEN") {
        Some("🌱")
    } else if section.contains("SALATA BÜFESİ") {
        Some("🥗")
    } else {
        None
    }
}

/// Renders progress lines for the extracted records: one line per day, a
/// banner whenever a known section starts, and one line per meal.
pub fn render(records: &[MealRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut previous: Option<(&str, &str)> = None;

    for record in records {
        let date = record.date.as_str();
        let section = record.menu_section.as_str();

        if previous.map(|(d, _)| d) != Some(date) {
            lines.push(format!("İşleniyor: {date}"));
            previous = None;
        }
        if previous.map(|(_, s)| s) != Some(section) {
            if let Some(icon) = heading_banner(section) {
                lines.push(format!("  {icon} {section}:"));
            }
        }
        previous = Some((date, section));

        let calories = if record.calories.is_empty() {
            "-"
        } else {
            record.calories.as_str()
        };
        lines.push(format!(
            "    {} {} ({}) - {}",
            section_icon(section),
            record.name,
            record.category,
            calories
        ));
    }

    lines
}

pub fn summary(output: &Path, count: usize) -> Vec<String> {
    vec![
        format!("✅ CSV dosyası oluşturuldu: {}", output.display()),
        format!("Toplam {count} yemek işlendi."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn record(date: &str, name: &str, section: &str) -> MealRecord {
        MealRecord {
            date: date.to_string(),
            name: name.to_string(),
            category: Category::MainDish,
            calories: "100 KKAL".to_string(),
            menu_section: section.to_string(),
        }
    }

    #[test]
    fn test_section_icons() {
        assert_eq!(section_icon("VEJETARYEN MENÜ"), "🌱");
        assert_eq!(section_icon("SALATA BÜFESİ"), "🥗");
        assert_eq!(section_icon("GÜNÜN MENÜSİ"), "🍽️");
        assert_eq!(section_icon(""), "🍽️");
    }

    #[test]
    fn test_render_groups_by_day_and_section() {
        let lines = render(&[
            record("2025-07-28", "Köfte", "GÜNÜN MENÜSİ"),
            record("2025-07-28", "Nohut", "VEJETARYEN MENÜ"),
            record("2025-07-29", "Tavuk", "GÜNÜN MENÜSİ"),
        ]);

        assert_eq!(
            lines,
            vec![
                "İşleniyor: 2025-07-28",
                "  📋 GÜNÜN MENÜSİ:",
                "    🍽️ Köfte (mainDish) - 100 KKAL",
                "  🌱 VEJETARYEN MENÜ:",
                "    🌱 Nohut (mainDish) - 100 KKAL",
                "İşleniyor: 2025-07-29",
                "  📋 GÜNÜN MENÜSİ:",
                "    🍽️ Tavuk (mainDish) - 100 KKAL",
            ]
        );
    }

    #[test]
    fn test_summary() {
        let lines = summary(Path::new("out.csv"), 3);
        assert_eq!(lines[0], "✅ CSV dosyası oluşturuldu: out.csv");
        assert_eq!(lines[1], "Toplam 3 yemek işlendi.");
    }
}
