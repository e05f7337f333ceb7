use tests::*;

use pretty_assertions::assert_eq;
use sqlbulk::{BulkCopySettings, CopyOptions, Model};

#[derive(Debug, Model)]
struct Order {
    id: i64,
    total: f64,
}

#[test]
fn default_schema() {
    let (bulk, _log) = setup();

    let table = assert_ok!(bulk
        .setup::<Order>()
        .for_collection(vec![])
        .with_table("Orders"));

    assert_eq!(table.schema(), "dbo");
    assert_eq!(table.table_name().schema, None);
    assert_eq!(table.table_name().qualified(), "[dbo].[Orders]");
}

#[test]
fn with_schema_once() {
    let (bulk, _log) = setup();

    let table = assert_ok!(bulk
        .setup::<Order>()
        .for_collection(vec![])
        .with_table("Orders")
        .and_then(|t| t.with_schema("sales")));

    assert_eq!(table.schema(), "sales");
    assert_eq!(table.table_name().qualified(), "[sales].[Orders]");
}

#[test]
fn with_schema_twice_conflicts() {
    let (bulk, _log) = setup();

    let res = bulk
        .setup::<Order>()
        .for_collection(vec![])
        .with_table("Orders")
        .and_then(|t| t.with_schema("sales"))
        .and_then(|t| t.with_schema("archive"));

    let err = assert_err_kind!(res, is_configuration_conflict);
    assert_eq!(
        err.to_string(),
        "configuration conflict: schema `sales` has already been defined for table `Orders`"
    );
}

#[test]
fn with_schema_after_qualified_table_conflicts() {
    let (bulk, _log) = setup();

    let table = assert_ok!(bulk
        .setup::<Order>()
        .for_collection(vec![])
        .with_table("[sales].[Orders]"));
    assert_eq!(table.schema(), "sales");
    assert_eq!(table.table_name().name, "Orders");

    assert_err_kind!(table.with_schema("sales"), is_configuration_conflict);
}

#[test]
fn empty_schema_is_rejected() {
    let (bulk, _log) = setup();

    let res = bulk
        .setup::<Order>()
        .for_collection(vec![])
        .with_table("Orders")
        .and_then(|t| t.with_schema(" "));

    assert_err_kind!(res, is_invalid_argument);
}

#[test]
fn malformed_table_is_rejected() {
    let (bulk, _log) = setup();

    for src in ["", "   ", "sales.", ".Orders", "Sales.dbo.Orders", "[sales.Orders"] {
        let res = bulk.setup::<Order>().for_collection(vec![]).with_table(src);
        assert_err_kind!(res, is_invalid_argument);
    }
}

#[test]
fn settings_replace_defaults() {
    let (bulk, _log) = setup();

    let settings = BulkCopySettings {
        batch_size: Some(1_000),
        bulk_copy_timeout: 30,
        enable_streaming: true,
        options: CopyOptions {
            table_lock: true,
            keep_nulls: true,
            ..CopyOptions::default()
        },
    };

    let table = bulk
        .setup::<Order>()
        .for_collection(vec![])
        .with_table("Orders")
        .unwrap();
    assert_eq!(table.settings(), &BulkCopySettings::default());

    let table = table.with_bulk_copy_settings(settings.clone());
    assert_eq!(table.settings(), &settings);

    // Carried through every stage
    let stage = table.add_all_columns();
    assert_eq!(stage.settings(), &settings);
    assert_eq!(stage.schema(), "dbo");
}
