use tests::*;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use sqlbulk::{schema::FieldTy, Model, Primitive};
use sqlbulk_core::stmt::{Type, Value};

#[derive(Debug)]
struct Tag;

#[derive(Debug, Model)]
struct Person {
    id: i32,
    name: String,
    created_at: NaiveDateTime,
    tag: Tag,
}

#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
enum Status {
    Active,
    Suspended,
}

impl Primitive for Status {
    const TYPE: Type = Type::I32;

    fn to_value(&self) -> Value {
        Value::I32(*self as i32)
    }
}

#[derive(Debug, Model)]
#[allow(dead_code)]
struct Account {
    avatar: Vec<u8>,
    initials: Vec<char>,
    #[bulk(primitive)]
    status: Status,
    nickname: Option<String>,
    friends: Vec<String>,
    balance: f64,
    #[bulk(object)]
    checksum: u32,
}

#[derive(Debug, Model)]
#[allow(dead_code)]
struct Payment {
    amount: Decimal,
    big: i128,
    huge: u128,
    idx: usize,
    offset: isize,
    at: DateTime<FixedOffset>,
    note: Option<Decimal>,
}

fn names<'a>(columns: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    columns.into_iter().map(String::as_str).collect()
}

#[test]
fn selects_copyable_fields_only() {
    let (bulk, _log) = setup();

    let stage = bulk
        .setup::<Person>()
        .for_collection(vec![])
        .with_table("People")
        .unwrap()
        .add_all_columns();

    // Reflected order is sorted by name
    assert_eq!(names(stage.columns()), ["created_at", "id", "name"]);
    assert!(stage.custom_column_mappings().is_empty());
}

#[test]
fn arrays_enums_and_overrides() {
    let (bulk, _log) = setup();

    let stage = bulk
        .setup::<Account>()
        .for_collection(vec![])
        .with_table("Accounts")
        .unwrap()
        .add_all_columns();

    assert_eq!(
        names(stage.columns()),
        ["avatar", "balance", "initials", "nickname", "status"]
    );

    let model = stage.model();
    let friends = model.field_by_name("friends").unwrap();
    assert!(matches!(&friends.ty, FieldTy::Object(object) if object.rust_ty == "Vec<String>"));

    let nickname = model.field_by_name("nickname").unwrap();
    assert_eq!(nickname.ty.as_primitive(), Some(Type::String));
    assert!(nickname.nullable);
}

#[test]
fn remove_and_remap_after_all_columns() {
    let (bulk, _log) = setup();

    let stage = bulk
        .setup::<Person>()
        .for_collection(vec![])
        .with_table("People")
        .unwrap()
        .add_all_columns()
        .remove_column(Person::fields().created_at())
        .and_then(|s| s.custom_column_mapping(Person::fields().name(), "full_name"))
        .unwrap();

    assert_eq!(names(stage.columns()), ["id", "name"]);
    assert_eq!(
        stage.custom_column_mappings().get("name").map(String::as_str),
        Some("full_name")
    );
}

#[test]
fn remove_unselected_column_fails() {
    let (bulk, _log) = setup();

    let res = bulk
        .setup::<Person>()
        .for_collection(vec![])
        .with_table("People")
        .unwrap()
        .add_all_columns()
        .remove_column(Person::fields().tag());

    let err = assert_err_kind!(res, is_column_not_selected);
    assert!(err.to_string().contains("`tag`"));
}

#[test]
fn custom_mapping_requires_selected_column() {
    let (bulk, _log) = setup();

    let res = bulk
        .setup::<Person>()
        .for_collection(vec![])
        .with_table("People")
        .unwrap()
        .add_all_columns()
        .custom_column_mapping(Person::fields().tag(), "tag_json");

    assert_err_kind!(res, is_column_not_selected);
}

#[test]
fn wide_numeric_and_offset_types() {
    let (bulk, _log) = setup();

    let stage = bulk
        .setup::<Payment>()
        .for_collection(vec![])
        .with_table("Payments")
        .unwrap()
        .add_all_columns();

    assert_eq!(
        names(stage.columns()),
        ["amount", "at", "big", "huge", "idx", "note", "offset"]
    );

    let types: Vec<_> = stage
        .model()
        .fields
        .iter()
        .map(|field| field.ty.as_primitive())
        .collect();
    assert_eq!(
        types,
        [
            Some(Type::Decimal),
            Some(Type::TimestampTz),
            Some(Type::I128),
            Some(Type::U128),
            Some(Type::U64),
            Some(Type::Decimal),
            Some(Type::I64),
        ]
    );
}
