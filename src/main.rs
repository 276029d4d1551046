use std::env;
use std::path::PathBuf;

use menu_import::{import_menu, progress, MenuConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut config = MenuConfig::load()?;

    // Optional positional arguments: [input] [output]
    let mut args = env::args().skip(1);
    if let Some(input) = args.next() {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = args.next() {
        config.output = PathBuf::from(output);
    }

    let records = import_menu(&config)?;

    for line in progress::render(&records) {
        println!("{line}");
    }
    println!();
    for line in progress::summary(&config.output, records.len()) {
        println!("{line}");
    }

    Ok(())
}
