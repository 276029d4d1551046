//! Turkish date headings such as `28 Temmuz 2025 - Pazartesi`.

use log::warn;

/// Month names as they appear in the menu, including the `Austos` typo the
/// page has been seen to use for August.
const MONTHS: &[(&str, &str)] = &[
    ("Ocak", "01"),
    ("Şubat", "02"),
    ("Mart", "03"),
    ("Nisan", "04"),
    ("Mayıs", "05"),
    ("Haziran", "06"),
    ("Temmuz", "07"),
    ("Ağustos", "08"),
    ("Eylül", "09"),
    ("Ekim", "10"),
    ("Kasım", "11"),
    ("Aralık", "12"),
    ("Austos", "08"),
];

/// Converts `<day> <month> <year> - <weekday>` into `YYYY-MM-DD`.
///
/// Returns `None` when fewer than three tokens precede the ` - ` separator.
/// Unknown month names fall back to `01`.
pub fn parse_date(text: &str) -> Option<String> {
    let date_part = text.split(" - ").next().unwrap_or_default().trim();

    let mut parts = date_part.split_whitespace();
    let (day, month_name, year) = (parts.next()?, parts.next()?, parts.next()?);

    let month = MONTHS
        .iter()
        .find(|(name, _)| *name == month_name)
        .map(|(_, number)| *number)
        .unwrap_or_else(|| {
            warn!("Unknown month name '{}', assuming January", month_name);
            "01"
        });

    Some(format!("{year}-{month}-{day:0>2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_heading() {
        assert_eq!(
            parse_date("28 Temmuz 2025 - Pazartesi"),
            Some("2025-07-28".to_string())
        );
    }

    #[test]
    fn test_day_is_zero_padded() {
        assert_eq!(
            parse_date("1 Ekim 2025 - Çarşamba"),
            Some("2025-10-01".to_string())
        );
    }

    #[test]
    fn test_misspelled_august() {
        assert_eq!(
            parse_date("5 Austos 2025 - Salı"),
            Some("2025-08-05".to_string())
        );
        assert_eq!(
            parse_date("5 Ağustos 2025 - Salı"),
            Some("2025-08-05".to_string())
        );
    }

    #[test]
    fn test_unknown_month_defaults_to_january() {
        assert_eq!(
            parse_date("12 Temmus 2025 - Cumartesi"),
            Some("2025-01-12".to_string())
        );
    }

    #[test]
    fn test_too_few_tokens() {
        assert_eq!(parse_date("Pazartesi"), None);
        assert_eq!(parse_date("28 Temmuz - Pazartesi"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        assert_eq!(
            parse_date("  3 Mart 2026 öğle  "),
            Some("2026-03-03".to_string())
        );
    }
}
