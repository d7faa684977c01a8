use paprika2markdown::{derive_ingredients, load, ConvertError, Recipe};

const HAM_AND_SWISS: &str = "---
name: Ham and Swiss Sandwich
servings: [1]
source: The Earl of Sandwich
source_url:
prep_time: 5 minutes
cook_time: none
categories:
  - sandwiches
  - lunch
notes: A simple ham & cheese sandwich.
ingredients:
  - Two slices of bread
  - One slice swiss cheese
  - Two slices ham
  - (1 tsp) Mustard
directions:
  - Spread mustard onto the bread.
  - Place ham and cheese slices on top of one bread slice.
  - Place second bread slice on top of ham and cheese.";

#[test]
fn test_load_ham_and_swiss() {
    let recipe = load(HAM_AND_SWISS.as_bytes()).unwrap();

    assert_eq!(recipe.name, "Ham and Swiss Sandwich");
    assert_eq!(recipe.servings, vec![1]);
    assert_eq!(recipe.source, "The Earl of Sandwich");
    assert!(recipe.source_url.is_empty());
    assert_eq!(recipe.prep_time, "5 minutes");
    assert_eq!(recipe.cook_time, "none");
    assert_eq!(recipe.categories, vec!["sandwiches", "lunch"]);
    assert_eq!(recipe.directions.len(), 3);
}

#[test]
fn test_ham_and_swiss_ingredients() {
    let recipe = load(HAM_AND_SWISS.as_bytes()).unwrap();
    let list = &recipe.ingredients_list;

    assert_eq!(list.len(), 4);
    assert_eq!(list[0].label, "Two slices of bread");
    assert!(list[0].amount.is_empty());
    assert!(list[0].unit.is_empty());
    assert_eq!(list[3].amount, "1");
    assert_eq!(list[3].unit, "tsp");
    assert_eq!(list[3].label, "Mustard");
}

#[test]
fn test_mixed_lines_keep_position() {
    let mut recipe = Recipe {
        ingredients: vec![
            "One packet chicken nuggets".to_string(),
            "(1/4 cup) Ketchup".to_string(),
        ],
        ..Default::default()
    };
    derive_ingredients(&mut recipe);

    assert_eq!(recipe.ingredients_list.len(), 2);
    assert!(!recipe.ingredients_list[0].is_matched());
    assert!(recipe.ingredients_list[1].is_matched());
}

#[test]
fn test_derive_twice_is_stable() {
    let mut recipe = load(HAM_AND_SWISS.as_bytes()).unwrap();
    let first = recipe.ingredients_list.clone();

    derive_ingredients(&mut recipe);
    assert_eq!(recipe.ingredients_list, first);
    derive_ingredients(&mut recipe);
    assert_eq!(recipe.ingredients_list, first);
}

#[test]
fn test_servings_order_preserved() {
    let recipe = load(b"name: Soup\nservings: [6, 2, 4]\n").unwrap();
    assert_eq!(recipe.servings, vec![6, 2, 4]);
}

#[test]
fn test_missing_optional_fields() {
    let recipe = load(b"name: Soup\nrating: 5\n").unwrap();

    assert_eq!(recipe.source_url, "");
    assert_eq!(recipe.notes, "");
    assert!(recipe.servings.is_empty());
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.ingredients_list.is_empty());
}

#[test]
fn test_empty_ingredient_lines_are_dropped() {
    let recipe = load(b"name: Soup\ningredients:\n  - ''\n  - Water\n  - ''\n").unwrap();
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.ingredients_list.len(), 1);
    assert_eq!(recipe.ingredients_list[0].label, "Water");
}

#[test]
fn test_wrong_types_fail() {
    for doc in [
        "name: Soup\nservings: [two]\n",
        "name: Soup\ndirections: {step: one}\n",
        "just a string\n",
        "name: \"unterminated\n",
    ] {
        let result = load(doc.as_bytes());
        assert!(
            matches!(result, Err(ConvertError::ParseError(_))),
            "{doc:?} should not load"
        );
    }
}
