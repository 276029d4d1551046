//! Splits a raw menu line into a display name and a calorie annotation.

use once_cell::sync::Lazy;
use regex::Regex;

static CALORIES: Lazy<Regex> = Lazy::new(|| Regex::new(r"- (\d+) KKAL").unwrap());

static CALORIE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\s*- \d+ KKAL.*$").unwrap());

/// Repairs for Turkish letters mangled by the menu page's encoding.
///
/// Applied strictly in order: `˝` becomes `ı` and is then turned into `İ`
/// by the following step, so the table must not be reordered.
const CHARACTER_REPAIRS: &[(&str, &str)] = &[
    ("«", "Ç"),
    ("–", "Ğ"),
    ("˝", "ı"),
    ("÷", "Ö"),
    ("ı", "İ"),
    ("«", "Ç"),
];

/// Dietary markers replaced by icons after character repair.
const ICONS: &[(&str, &str)] = &[("*", "🥛"), ("+", "🌾")];

/// Returns `(name, calories)` for a raw meal line.
///
/// `calories` is `"<digits> KKAL"` taken from the first `- <digits> KKAL`
/// occurrence, or empty when there is none.
pub fn normalize(raw: &str) -> (String, String) {
    let calories = CALORIES
        .captures(raw)
        .map(|caps| format!("{} KKAL", &caps[1]))
        .unwrap_or_default();

    let stripped = CALORIE_SUFFIX.replace(raw, "");
    let name = CHARACTER_REPAIRS
        .iter()
        .chain(ICONS)
        .fold(stripped.trim().to_string(), |name, (from, to)| {
            name.replace(from, to)
        });

    (name, calories)
}
