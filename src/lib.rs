pub mod config;
pub mod error;
pub mod ingredient;
pub mod loader;
pub mod model;
pub mod render;
pub mod scanner;

use log::{debug, warn};
use std::path::{Path, PathBuf};

pub use config::Settings;
pub use error::ConvertError;
pub use ingredient::parse as parse_ingredient;
pub use loader::{derive_ingredients, load, load_file};
pub use model::{Ingredient, Recipe};
pub use render::RecipeRenderer;
pub use scanner::find_recipe_files;

/// Outcome of [`convert_folder`]
#[derive(Debug, Default)]
pub struct Report {
    /// Files written, in processing order
    pub written: Vec<PathBuf>,
    /// Recipe files that could not be loaded or rendered
    pub skipped: usize,
}

/// Load every file in `paths`, in order.
///
/// Files that cannot be read or parsed are logged and left out; they never
/// stop the rest from loading.
pub fn load_recipes(paths: &[PathBuf]) -> Vec<Recipe> {
    paths
        .iter()
        .filter_map(|path| match load_file(path) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect()
}

/// Render every recipe in `settings.recipes_folder` into
/// `settings.output_folder`.
///
/// The output folder must already exist.
///
/// # Errors
/// Returns `ConvertError` if the template cannot be compiled or the recipes
/// folder cannot be listed. Problems with individual recipes are counted in
/// [`Report::skipped`] instead.
pub fn convert_folder(settings: &Settings) -> Result<Report, ConvertError> {
    let renderer = RecipeRenderer::from_settings(settings)?;
    convert_with(&renderer, &settings.recipes_folder, &settings.output_folder)
}

/// Like [`convert_folder`] with an already compiled template.
pub fn convert_with(
    renderer: &RecipeRenderer,
    recipes_folder: &Path,
    output_folder: &Path,
) -> Result<Report, ConvertError> {
    let files = find_recipe_files(recipes_folder)?;
    debug!(
        "Found {} recipe files in {}",
        files.len(),
        recipes_folder.display()
    );

    let recipes = load_recipes(&files);
    let mut report = Report {
        written: Vec::with_capacity(recipes.len()),
        skipped: files.len() - recipes.len(),
    };

    for recipe in &recipes {
        match renderer.write_recipe(recipe, output_folder) {
            Ok(path) => report.written.push(path),
            Err(e) => {
                warn!("Skipping recipe {}: {}", recipe.name, e);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}
