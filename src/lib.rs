pub mod classifier;
pub mod config;
pub mod date;
pub mod error;
pub mod extractors;
pub mod model;
pub mod normalizer;
pub mod progress;
pub mod writer;

use log::{debug, info, warn};
use scraper::Html;

use crate::extractors::{Extractor, MenuListExtractor};

pub use classifier::classify;
pub use config::{MenuConfig, SelectorsConfig};
pub use date::parse_date;
pub use error::ImportError;
pub use model::{Category, MealRecord};
pub use normalizer::normalize;
pub use writer::{write_csv, write_records};

/// Extract meal records from a menu document using the default selectors.
pub fn extract_menu(html: &str) -> Result<Vec<MealRecord>, ImportError> {
    extract_menu_with(html, &SelectorsConfig::default())
}

/// Extract meal records from a menu document using custom selectors.
pub fn extract_menu_with(
    html: &str,
    selectors: &SelectorsConfig,
) -> Result<Vec<MealRecord>, ImportError> {
    let extractor = MenuListExtractor::new(selectors)?;
    let document = Html::parse_document(html);

    if !extractor.can_parse(&document) {
        warn!(
            "No menu groups matching '{}' found in document",
            selectors.group
        );
        return Ok(Vec::new());
    }

    let records = extractor.parse(&document);
    debug!("Extracted {} meal records", records.len());
    Ok(records)
}

/// Read the configured input document, extract its meals and write them as
/// CSV to the configured output path.
///
/// A missing or unreadable input file is fatal.
pub fn import_menu(config: &MenuConfig) -> Result<Vec<MealRecord>, ImportError> {
    let html =
        std::fs::read_to_string(&config.input).map_err(|source| ImportError::ReadInput {
            path: config.input.clone(),
            source,
        })?;
    info!("Read menu document {}", config.input.display());

    let records = extract_menu_with(&html, &config.selectors)?;

    write_csv(&config.output, &records)?;
    info!(
        "Wrote {} records to {}",
        records.len(),
        config.output.display()
    );

    Ok(records)
}
