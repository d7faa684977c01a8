use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Template looked up when none is configured.
pub const DEFAULT_TEMPLATE_PATH: &str = "./templates/template.md";

/// Where recipes are read from and written to.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Template file. When unset, `./templates/template.md` is used if it
    /// exists, otherwise the built-in template.
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Folder containing the recipe YAML files
    #[serde(default = "default_recipes_folder")]
    pub recipes_folder: PathBuf,
    /// Folder receiving the rendered recipes. Existing files are overwritten.
    #[serde(default = "default_output_folder")]
    pub output_folder: PathBuf,
    /// Extension of the rendered files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: None,
            recipes_folder: default_recipes_folder(),
            output_folder: default_output_folder(),
            extension: default_extension(),
        }
    }
}

// Default value functions
fn default_recipes_folder() -> PathBuf {
    PathBuf::from("./recipes")
}

fn default_output_folder() -> PathBuf {
    PathBuf::from("./recipes.wiki")
}

fn default_extension() -> String {
    "md".to_string()
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PAPRIKA2MARKDOWN__ prefix
    /// 2. paprika2markdown.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: PAPRIKA2MARKDOWN__OUTPUT_FOLDER
    pub fn load() -> Result<Self, ConfigError> {
        builder()
            .add_source(
                Environment::with_prefix("PAPRIKA2MARKDOWN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

fn builder() -> ConfigBuilder<DefaultState> {
    // Optional config file (can be missing)
    Config::builder().add_source(File::with_name("paprika2markdown").required(false))
}
