//! # Ingredient lines
//!
//! Recipe files list ingredients as free-form strings. Lines written as
//!
//! ```text
//! (1 cup) Heavy Cream
//! ```
//!
//! are split into an amount (`1`), a unit (`cup`) and a label
//! (`Heavy Cream`). Anything else is kept whole as the label with an empty
//! amount and unit.
//!
//! The amount may span several words (`(1 1/2 cup) Flour` has amount
//! `1 1/2`); the unit is always the last word inside the parentheses. Once
//! the `(amount unit)` prefix is consumed the rest of the line is the label,
//! parentheses included. A prefix followed only by whitespace still counts
//! as a match, with an empty label.
//!
//! ```rust
//! use paprika2markdown::ingredient::parse;
//!
//! let ketchup = parse("(1/4 cup) Ketchup").unwrap();
//! assert_eq!(ketchup.amount, "1/4");
//! assert_eq!(ketchup.unit, "cup");
//! assert_eq!(ketchup.label, "Ketchup");
//!
//! let nuggets = parse("One packet chicken nuggets").unwrap();
//! assert!(nuggets.amount.is_empty());
//! assert_eq!(nuggets.label, "One packet chicken nuggets");
//!
//! assert!(parse("").is_none());
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::model::Ingredient;

/// `(amount unit) label`. The amount is matched lazily so the unit is the
/// first whitespace-free token that is directly followed by `)`.
static INGREDIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\((?P<amount>.+?)\s(?P<unit>[^\s)]+)\)\s+(?P<label>.*)$").unwrap()
});

/// Parse one raw ingredient line.
///
/// Returns `None` only for an empty line. Lines that do not fit the
/// `(amount unit) label` shape are not an error: they come back with the
/// whole line as the label.
pub fn parse(line: &str) -> Option<Ingredient> {
    if line.is_empty() {
        return None;
    }

    let ingredient = match INGREDIENT_LINE.captures(line) {
        Some(caps) => Ingredient::matched(&caps["amount"], &caps["unit"], &caps["label"]),
        None => Ingredient::label_only(line),
    };
    Some(ingredient)
}
