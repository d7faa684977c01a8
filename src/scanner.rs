use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

const RECIPE_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// List the non-empty `.yml`/`.yaml` files directly inside `folder`,
/// sorted by file name.
pub fn find_recipe_files(folder: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !folder.is_dir() {
        return Err(ConvertError::MissingFolder(folder.to_path_buf()));
    }

    let entries = fs::read_dir(folder).map_err(|source| ConvertError::io(folder, source))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| ConvertError::io(folder, source))?
            .path();
        if !is_recipe_file(&path) {
            continue;
        }

        let metadata = fs::metadata(&path).map_err(|source| ConvertError::io(&path, source))?;
        if !metadata.is_file() {
            continue;
        }
        if metadata.len() == 0 {
            debug!("Skipping empty recipe file {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_recipe_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RECIPE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_extensions() {
        assert!(is_recipe_file(Path::new("soup.yaml")));
        assert!(is_recipe_file(Path::new("soup.yml")));
        assert!(is_recipe_file(Path::new("Soup.YAML")));
        assert!(is_recipe_file(Path::new("dir/soup.v2.Yml")));
        assert!(!is_recipe_file(Path::new("soup.md")));
        assert!(!is_recipe_file(Path::new("soup.yaml.bak")));
        assert!(!is_recipe_file(Path::new("yaml")));
    }

    #[test]
    fn test_missing_folder() {
        let result = find_recipe_files(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(ConvertError::MissingFolder(_))));
    }
}
