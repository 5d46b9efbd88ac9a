//! Integration tests for search, category filtering and the category index.
//!
//! Tests cover:
//! - Identity, case-insensitivity and field coverage of the text search
//! - Exact category matching and the "all" tab
//! - Agreement with a straightforward reference predicate
//! - Category tabs: "all" first, no duplicates, first-seen order

mod common;

use common::*;

/// Reference predicate, written independently of the filter under test.
fn expected_match(part: &Part, query: &str, category: &str) -> bool {
    let q = query.to_lowercase();
    let mut fields = vec![
        part.name.clone(),
        part.location.clone(),
        part.category.clone(),
        part.make.clone(),
        part.model.clone(),
    ];
    if let Some(sku) = &part.sku {
        fields.push(sku.clone());
    }
    let text_ok = fields.iter().any(|field| field.to_lowercase().contains(&q));
    let category_ok = category == "all" || part.category == category;
    text_ok && category_ok
}

fn mixed_inventory() -> Inventory {
    let mut with_sku = make_test_part("Clutch Kit", "Transmission", "Honda", "Civic", 3);
    with_sku.sku = Some("CK-77".to_string());
    inventory_with(vec![
        with_sku,
        make_test_part("Alternator", "Electrical", "Toyota", "Corolla", 1),
        make_test_part("Brake Rotor", "Brakes", "Ford", "Focus", 6),
        make_test_part("Cabin Air Filter", "Interior", "Honda", "Accord", 10),
        make_test_part("Timing Belt", "Engine", "Toyota", "Camry", 2),
    ])
}

#[test]
fn test_empty_query_all_categories_is_identity() {
    let inventory = Inventory::with_demo_data();

    let result = filter_parts(inventory.get_parts(), "", "all");

    let expected: Vec<&Part> = inventory.get_parts().iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn test_seed_engine_category() {
    let inventory = Inventory::with_demo_data();

    let result = inventory.filter(&PartFilter::new("", "Engine"));

    assert_eq!(names(&result), vec!["Engine Oil Filter", "Spark Plug Set"]);
}

#[test]
fn test_seed_search_by_model() {
    let inventory = Inventory::with_demo_data();

    let result = inventory.filter(&PartFilter::new("F-150", "all"));

    assert_eq!(names(&result), vec!["Spark Plug Set"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let inventory = Inventory::with_demo_data();

    let upper = filter_parts(inventory.get_parts(), "TOYOTA", "all");
    let lower = filter_parts(inventory.get_parts(), "toyota", "all");
    let mixed = filter_parts(inventory.get_parts(), "ToYoTa", "all");

    assert_eq!(names(&upper), vec!["Front Brake Pad Set"]);
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
}

#[test]
fn test_search_covers_every_text_field() {
    let inventory = Inventory::with_demo_data();
    let parts = inventory.get_parts();

    // name, sku, location, category, make, model
    assert_eq!(names(&filter_parts(parts, "oil filter", "all")), vec!["Engine Oil Filter"]);
    assert_eq!(names(&filter_parts(parts, "sp-004", "all")), vec!["Spark Plug Set"]);
    assert_eq!(names(&filter_parts(parts, "aisle 3", "all")), vec!["Front Brake Pad Set"]);
    assert_eq!(names(&filter_parts(parts, "brakes", "all")), vec!["Front Brake Pad Set"]);
    assert_eq!(names(&filter_parts(parts, "honda", "all")), vec!["Engine Oil Filter"]);
    assert_eq!(names(&filter_parts(parts, "camry", "all")), vec!["Front Brake Pad Set"]);

    // condition and quantity are not searched
    assert!(filter_parts(parts, "new", "all").is_empty());
    assert!(filter_parts(parts, "24", "all").is_empty());
}

#[test]
fn test_part_without_sku_is_still_searchable() {
    let inventory = inventory_with(vec![make_test_part("Muffler", "Exhaust", "Kia", "Rio", 1)]);

    assert_eq!(names(&inventory.filter(&PartFilter::new("muff", "all"))), vec!["Muffler"]);
    assert!(inventory.filter(&PartFilter::new("CK-", "all")).is_empty());
}

#[test]
fn test_query_and_category_must_both_match() {
    let inventory = Inventory::with_demo_data();

    let result = inventory.filter(&PartFilter::new("toyota", "Engine"));
    assert!(result.is_empty());

    let result = inventory.filter(&PartFilter::new("set", "Engine"));
    assert_eq!(names(&result), vec!["Spark Plug Set"]);
}

#[test]
fn test_category_match_is_exact() {
    let inventory = Inventory::with_demo_data();

    assert!(inventory.filter(&PartFilter::new("", "engine")).is_empty());
    assert!(inventory.filter(&PartFilter::new("", "Eng")).is_empty());
    assert!(inventory.filter(&PartFilter::new("", "Wheels & Tires")).is_empty());
}

#[test]
fn test_filter_agrees_with_reference_predicate() {
    let inventory = mixed_inventory();
    let parts = inventory.get_parts();
    let queries = ["", "a", "honda", "FILTER", "ck-77", "aisle 9", "zzz", "o"];
    let mut tabs = categories(parts);
    tabs.push("Suspension".to_string());

    for query in queries {
        for tab in &tabs {
            let result = filter_parts(parts, query, tab);

            // every returned part matches, every matching part is returned
            let expected: Vec<&Part> = parts
                .iter()
                .filter(|part| expected_match(part, query, tab))
                .collect();
            assert_eq!(result, expected, "query {query:?}, category {tab:?}");

            // stable subsequence of the store order
            let positions: Vec<usize> = result
                .iter()
                .map(|hit| parts.iter().position(|part| part.id == hit.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[test]
fn test_part_filter_setters() {
    let inventory = Inventory::with_demo_data();
    let mut filter = PartFilter::default();
    assert!(!filter.is_search_active());
    assert_eq!(filter.category(), &CategoryFilter::All);

    filter.set_query("set");
    filter.set_category("Brakes");
    assert!(filter.is_search_active());
    assert_eq!(filter.category().as_tab(), "Brakes");
    assert_eq!(names(&inventory.filter(&filter)), vec!["Front Brake Pad Set"]);
    assert!(inventory.get_parts().iter().filter(|part| filter.matches(part)).count() == 1);

    filter.set_category(ALL_CATEGORIES);
    assert_eq!(filter.category(), &CategoryFilter::All);
    assert_eq!(inventory.filter(&filter).len(), 2);
}

#[test]
fn test_categories_seed() {
    let inventory = Inventory::with_demo_data();

    assert_eq!(inventory.categories(), vec!["all", "Brakes", "Engine"]);
}

#[test]
fn test_categories_first_occurrence_without_duplicates() {
    let inventory = mixed_inventory();
    let mut extra = inventory_with(vec![
        make_test_part("A", "Engine", "Audi", "A4", 1),
        make_test_part("B", "Brakes", "Audi", "A4", 1),
        make_test_part("C", "Engine", "Audi", "A4", 1),
        make_test_part("D", "all", "Audi", "A4", 1),
    ]);

    let tabs = inventory.categories();
    assert_eq!(
        tabs,
        vec!["all", "Transmission", "Electrical", "Brakes", "Interior", "Engine"]
    );

    let tabs = extra.categories();
    assert_eq!(tabs, vec!["all", "Engine", "Brakes"]);

    // still "all" first after the store changes
    extra.add_part(make_test_part("E", "Exhaust", "Audi", "A4", 1));
    let tabs = extra.categories();
    assert_eq!(tabs[0], "all");
    assert_eq!(tabs, vec!["all", "Exhaust", "Engine", "Brakes"]);
}
