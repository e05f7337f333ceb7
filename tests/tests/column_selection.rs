use tests::*;

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use sqlbulk::{ColumnMapping, Model, Path};

#[derive(Debug, Clone)]
struct Tag {
    #[allow(dead_code)]
    label: String,
}

#[derive(Debug, Model)]
struct Person {
    id: i32,
    name: String,
    created_at: NaiveDateTime,
    tag: Tag,
}

fn people() -> Vec<Person> {
    let created_at = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    vec![Person {
        id: 1,
        name: "Ada".to_string(),
        created_at,
        tag: Tag {
            label: "admin".to_string(),
        },
    }]
}

fn names<'a>(columns: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    columns.into_iter().map(String::as_str).collect()
}

fn mappings<'a>(
    mappings: impl IntoIterator<Item = (&'a String, &'a String)>,
) -> Vec<(&'a str, &'a str)> {
    mappings
        .into_iter()
        .map(|(property, column)| (property.as_str(), column.as_str()))
        .collect()
}

#[test]
fn add_column_is_idempotent() {
    let (bulk, _log) = setup();

    let stage = assert_ok!(bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .and_then(|t| t.add_column(Person::fields().id()))
        .and_then(|s| s.add_column(Person::fields().name()))
        .and_then(|s| s.add_column(Person::fields().id()))
        .and_then(|s| s.add_columns([Person::fields().name(), Person::fields().id()])));

    assert_eq!(names(stage.columns()), ["id", "name"]);
    assert!(stage.custom_column_mappings().is_empty());
}

#[test]
fn call_order_does_not_change_the_set() {
    let (bulk, _log) = setup();

    let forward = assert_ok!(bulk
        .setup::<Person>()
        .for_collection(vec![])
        .with_table("People")
        .and_then(|t| t.add_columns([Person::fields().id(), Person::fields().created_at()])));

    let backward = bulk
        .setup::<Person>()
        .for_collection(vec![])
        .with_table("People")
        .unwrap()
        .add_column_names(["created_at", "id", "created_at"]);

    let mut forward = names(forward.columns());
    let mut backward = names(backward.columns());
    forward.sort();
    backward.sort();
    assert_eq!(forward, backward);
}

#[test]
fn add_column_as_then_add_column() {
    let (bulk, _log) = setup();

    let stage = assert_ok!(bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .and_then(|t| t.add_column_as(Person::fields().name(), "full_name"))
        .and_then(|s| s.add_column(Person::fields().id())));

    assert_eq!(names(stage.columns()), ["name", "id"]);
    assert_eq!(
        mappings(stage.custom_column_mappings()),
        [("name", "full_name")]
    );
}

#[test]
fn duplicate_mapping_fails() {
    let (bulk, _log) = setup();

    let stage = bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .unwrap()
        .add_column_as(Person::fields().name(), "full_name")
        .unwrap();

    let err = assert_err_kind!(
        stage.add_column_as(Person::fields().name(), "display_name"),
        is_duplicate_column_mapping
    );
    assert_eq!(
        err.to_string(),
        "duplicate column mapping: property `name` is already mapped"
    );
}

#[test]
fn duplicate_mapping_by_name_fails() {
    let (bulk, _log) = setup();

    let res = bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .unwrap()
        .add_column_name_as("name", "full_name")
        .and_then(|s| s.add_column_name_as("name", "full_name"));

    assert_err_kind!(res, is_duplicate_column_mapping);
}

#[test]
fn empty_destination_fails() {
    let (bulk, _log) = setup();

    let table = bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .unwrap();

    let err = assert_err_kind!(
        table.add_column_as(Person::fields().name(), ""),
        is_invalid_argument
    );
    assert_eq!(
        err.to_string(),
        "invalid argument `destination`: destination column name must not be empty"
    );
}

#[test]
fn blank_destination_fails() {
    let (bulk, _log) = setup();

    let res = bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .unwrap()
        .add_column_name_as("name", "   ");

    assert_err_kind!(res, is_invalid_argument);
}

#[test]
fn empty_destination_in_mapping_list_fails() {
    let (bulk, _log) = setup();

    let res = bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .unwrap()
        .add_column_mappings([ColumnMapping::new("name", "")]);

    assert_err_kind!(res, is_invalid_argument);
}

#[test]
fn column_mappings_select_and_map() {
    let (bulk, _log) = setup();

    let stage = assert_ok!(bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .and_then(|t| t.add_column_mappings([("id", "person_id"), ("name", "full_name")])));

    assert_eq!(names(stage.columns()), ["id", "name"]);
    assert_eq!(
        mappings(stage.custom_column_mappings()),
        [("id", "person_id"), ("name", "full_name")]
    );
}

#[test]
fn root_path_is_not_a_column() {
    let (bulk, _log) = setup();

    let table = bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .unwrap();

    let err = assert_err_kind!(
        table.add_column(Path::<Person>::root()),
        is_invalid_column_expression
    );
    assert_eq!(
        err.to_string(),
        "invalid column expression: path references the `Person` model itself, not one of its fields"
    );
}

#[test]
fn nested_path_is_not_a_column() {
    let (bulk, _log) = setup();

    let mut untyped = Person::fields().tag().into_untyped();
    untyped.push("label");

    let table = bulk
        .setup::<Person>()
        .for_collection(people())
        .with_table("People")
        .unwrap();

    assert_err_kind!(
        table.add_column(Path::from_untyped(untyped)),
        is_invalid_column_expression
    );
}
