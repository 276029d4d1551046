use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Run configuration
#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    /// HTML document holding the menu
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// CSV file to write
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Where the menu lives inside the document
    #[serde(default)]
    pub selectors: SelectorsConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            selectors: SelectorsConfig::default(),
        }
    }
}

/// CSS selectors used by the menu extractor
#[derive(Debug, Deserialize, Clone)]
pub struct SelectorsConfig {
    /// One element per day
    #[serde(default = "default_group")]
    pub group: String,
    /// Date label, first match inside a group
    #[serde(default = "default_date")]
    pub date: String,
    /// Line items inside a group
    #[serde(default = "default_item")]
    pub item: String,
    /// Marks a line item as a section heading
    #[serde(default = "default_heading")]
    pub heading: String,
}

impl Default for SelectorsConfig {
    fn default() -> Self {
        Self {
            group: default_group(),
            date: default_date(),
            item: default_item(),
            heading: default_heading(),
        }
    }
}

// Default value functions
fn default_input() -> PathBuf {
    PathBuf::from("yemek_list.html")
}

fn default_output() -> PathBuf {
    PathBuf::from("tusas_meals.csv")
}

fn default_group() -> String {
    "div.yemek_list__item".to_string()
}

fn default_date() -> String {
    "span".to_string()
}

fn default_item() -> String {
    "li".to_string()
}

fn default_heading() -> String {
    "h2".to_string()
}

impl MenuConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MENU__ prefix
    /// 2. menu.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MENU__SELECTORS__GROUP
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`MenuConfig::load`] for the source priority.
pub fn load_config() -> Result<MenuConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("menu").required(false))
        // Use double underscore for nested: MENU__SELECTORS__ITEM
        .add_source(
            Environment::with_prefix("MENU").separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
