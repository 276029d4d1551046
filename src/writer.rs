use crate::error::ImportError;
use crate::model::MealRecord;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column names of the output table, in order.
pub const HEADER: [&str; 5] = ["Ad", "Tarih", "YemekTür", "Kalori", "MenüTür"];

#[derive(Serialize)]
struct Row<'a> {
    name: &'a str,
    date: &'a str,
    category: &'a str,
    calories: &'a str,
    menu_section: &'a str,
}

impl<'a> From<&'a MealRecord> for Row<'a> {
    fn from(record: &'a MealRecord) -> Self {
        Self {
            name: &record.name,
            date: &record.date,
            category: record.category.as_str(),
            calories: &record.calories,
            menu_section: &record.menu_section,
        }
    }
}

/// Writes the header and one row per record, in the given order.
///
/// The header is written even when `records` is empty.
pub fn write_records<W: Write>(writer: W, records: &[MealRecord]) -> Result<(), ImportError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(HEADER)?;
    for record in records {
        csv.serialize(Row::from(record))?;
    }
    csv.flush().map_err(csv::Error::from)?;

    Ok(())
}

pub fn write_csv(path: &Path, records: &[MealRecord]) -> Result<(), ImportError> {
    let file = File::create(path).map_err(|source| ImportError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;

    write_records(file, records)
}
