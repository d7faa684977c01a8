use log::{debug, info};
use minijinja::Environment;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Settings, DEFAULT_TEMPLATE_PATH};
use crate::error::ConvertError;
use crate::model::Recipe;

/// Template used when no template file is available.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/template.md");

const TEMPLATE_NAME: &str = "recipe";

/// The template file `settings` points at: the configured one, else
/// `./templates/template.md` when it exists. `None` means the built-in
/// template is used.
pub fn template_file(settings: &Settings) -> Option<PathBuf> {
    match &settings.template {
        Some(path) => Some(path.clone()),
        None => Some(PathBuf::from(DEFAULT_TEMPLATE_PATH)).filter(|path| path.is_file()),
    }
}

/// A compiled recipe template.
///
/// Templates use Jinja syntax. The context is the recipe itself, so
/// `{{ name }}`, `{% for ingredient in ingredients_list %}` and so on refer
/// to the [`Recipe`] fields by name. Undefined variables render empty.
pub struct RecipeRenderer {
    env: Environment<'static>,
    extension: String,
}

impl RecipeRenderer {
    /// Compile a template from its source text.
    pub fn from_source(source: impl Into<String>) -> Result<Self, ConvertError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_template_owned(TEMPLATE_NAME, source.into())?;

        Ok(Self {
            env,
            extension: "md".to_string(),
        })
    }

    /// Compile the template stored at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConvertError> {
        let source = fs::read_to_string(path).map_err(|source| ConvertError::io(path, source))?;
        debug!("Compiling template {}", path.display());
        Self::from_source(source)
    }

    /// Compile the template picked by [`template_file`], or
    /// [`DEFAULT_TEMPLATE`] when it finds none.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConvertError> {
        let renderer = match template_file(settings) {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No template file found, using the built-in template");
                Self::from_source(DEFAULT_TEMPLATE)?
            }
        };
        Ok(renderer.with_extension(&settings.extension))
    }

    /// Set the extension of written files (without the dot).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn render(&self, recipe: &Recipe) -> Result<String, ConvertError> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(recipe)?)
    }

    /// `<name>.<extension>`, with path separators in the name replaced so the
    /// file always lands directly in the output folder.
    pub fn output_file_name(&self, recipe: &Recipe) -> String {
        let stem: String = recipe
            .name
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
            .collect();
        let stem = match stem.trim() {
            "" | "." | ".." => "untitled",
            _ => stem.as_str(),
        };

        if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{}.{}", stem, self.extension)
        }
    }

    /// Render `recipe` into `output_folder`, overwriting an existing file.
    pub fn write_recipe(
        &self,
        recipe: &Recipe,
        output_folder: &Path,
    ) -> Result<PathBuf, ConvertError> {
        let rendered = self.render(recipe)?;
        let path = output_folder.join(self.output_file_name(recipe));
        fs::write(&path, rendered).map_err(|source| ConvertError::io(&path, source))?;
        info!("Saved recipe for {} to {}", recipe.name, path.display());
        Ok(path)
    }
}
