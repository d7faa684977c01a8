use serde::{Deserialize, Deserializer, Serialize};

use crate::ingredient;

/// A recipe as stored in a YAML recipe file.
///
/// Every persisted field is optional in the document. Missing fields and
/// fields left blank (`source_url:` with no value) decode to their empty
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub servings: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prep_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cook_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    /// Raw ingredient lines, exactly as written in the document.
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directions: Vec<String>,
    /// Parsed form of `ingredients`. Never read from a document.
    #[serde(skip_deserializing)]
    pub ingredients_list: Vec<Ingredient>,
}

/// One parsed ingredient line.
///
/// `amount` and `unit` are either both set (the line matched
/// `(amount unit) label`) or both empty, in which case `label` holds the
/// whole line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub amount: String,
    pub unit: String,
    pub label: String,
}

impl Ingredient {
    pub(crate) fn matched(amount: &str, unit: &str, label: &str) -> Self {
        Ingredient {
            amount: amount.to_string(),
            unit: unit.to_string(),
            label: label.to_string(),
        }
    }

    pub(crate) fn label_only(line: &str) -> Self {
        Ingredient {
            amount: String::new(),
            unit: String::new(),
            label: line.to_string(),
        }
    }

    /// Whether the line carried an `(amount unit)` prefix.
    pub fn is_matched(&self) -> bool {
        !self.amount.is_empty()
    }
}

impl Recipe {
    /// Rebuild `ingredients_list` from `ingredients`.
    ///
    /// Empty lines are dropped. Any previously derived list is replaced, so
    /// calling this repeatedly yields the same result.
    pub fn derive_ingredients(&mut self) {
        self.ingredients_list = self
            .ingredients
            .iter()
            .filter_map(|line| ingredient::parse(line))
            .collect();
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
