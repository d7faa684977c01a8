use log::debug;
use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::model::Recipe;

/// Decode a YAML recipe document and derive its ingredient list.
///
/// # Errors
/// Returns `ConvertError::ParseError` if the bytes are not a YAML document
/// matching the recipe schema (malformed YAML, a list where a string is
/// expected, invalid UTF-8, ...).
pub fn load(raw: &[u8]) -> Result<Recipe, ConvertError> {
    let mut recipe: Recipe = serde_yaml::from_slice(raw)?;
    derive_ingredients(&mut recipe);
    Ok(recipe)
}

/// Read and [`load`] a recipe file.
///
/// # Errors
/// Returns `ConvertError::IoError` if the file cannot be read, otherwise the
/// errors of [`load`].
pub fn load_file(path: &Path) -> Result<Recipe, ConvertError> {
    let raw = fs::read(path).map_err(|source| ConvertError::io(path, source))?;
    let recipe = load(&raw)?;
    debug!(
        "Loaded {:?} from {}: {} of {} ingredients matched",
        recipe.name,
        path.display(),
        recipe
            .ingredients_list
            .iter()
            .filter(|ingredient| ingredient.is_matched())
            .count(),
        recipe.ingredients_list.len()
    );
    Ok(recipe)
}

/// Populate `recipe.ingredients_list` from its raw `ingredients` lines,
/// replacing whatever was there.
pub fn derive_ingredients(recipe: &mut Recipe) {
    recipe.derive_ingredients();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_derives_ingredients() {
        let recipe = load(b"name: Toast\ningredients:\n  - Bread\n  - (1 tbsp) Butter\n").unwrap();

        assert_eq!(recipe.ingredients_list.len(), 2);
        assert_eq!(recipe.ingredients_list[1].unit, "tbsp");
    }

    #[test]
    fn test_wrong_field_type_is_a_parse_error() {
        let result = load(b"name: Toast\ningredients: {bread: 2}\n");
        assert!(matches!(result, Err(ConvertError::ParseError(_))));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let result = load(b"name: [Toast\n");
        assert!(matches!(result, Err(ConvertError::ParseError(_))));
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let result = load(b"name: \xff\xfe\n");
        assert!(matches!(result, Err(ConvertError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(ConvertError::IoError { .. })));
    }
}
