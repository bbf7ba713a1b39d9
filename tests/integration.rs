//! Integration tests for quarterlog.
//!
//! These walk full load → transform → save cycles through the public API.

use std::fs;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tempfile::tempdir;

use quarterlog::prelude::*;
use quarterlog::core::filter::parse_date_time;
use quarterlog::store::{from_json_str, to_json_string};

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn messages(items: &[Item]) -> Vec<&str> {
    items.iter().map(Item::message).collect()
}

// =========================================================================
// Store cycles
// =========================================================================

#[test]
fn test_add_edit_remove_cycle() {
    let dir = tempdir().unwrap();
    let store = Store::new(StoreConfig::new().with_path(dir.path().join("log.json")));

    let items = store.load().unwrap();
    let items = add(items, Item::at("email", dt(2023, 5, 1, 11, 0)));
    let items = add(items, Item::at("standup", dt(2023, 5, 1, 9, 3)));
    let items = add(items, Item::at("lunch", dt(2023, 5, 1, 12, 10)));
    store.save(&items).unwrap();

    let items = store.load().unwrap();
    assert_eq!(messages(&items), ["standup", "email", "lunch"]);

    let items = edit_message_at(&items, 1, "email triage").unwrap();
    store.save(&items).unwrap();

    let items = remove_at(&store.load().unwrap(), 0).unwrap();
    store.save(&items).unwrap();

    let items = store.load().unwrap();
    assert_eq!(messages(&items), ["email triage", "lunch"]);
    assert_eq!(items[0].index(), 0);
    assert_eq!(items[1].index(), 1);
    assert_eq!(items[1].display_time(), "12:15 PM");
}

#[test]
fn test_retime_cycle_persists_new_order() {
    let dir = tempdir().unwrap();
    let store = Store::new(StoreConfig::new().with_path(dir.path().join("log.json")));

    let items = sort_and_reindex(vec![
        Item::at("A", dt(2023, 5, 1, 10, 0)),
        Item::at("B", dt(2023, 5, 1, 11, 0)),
    ]);
    store.save(&items).unwrap();

    let new_time = parse_date_time("05/01/23", "12:00 PM").unwrap();
    let items = retime_at(&store.load().unwrap(), 0, new_time).unwrap();
    store.save(&items).unwrap();

    let items = store.load().unwrap();
    assert_eq!(messages(&items), ["B", "A"]);
    assert_eq!(items[1].start_time(), dt(2023, 5, 1, 12, 0));
}

#[test]
fn test_legacy_file_without_index_or_rounding() {
    let legacy = r#"[
        {"message": "late", "start_time": "2023-05-02 16:41:09.123456"},
        {"message": "early", "start_time": "2023-05-01 09:07:00"},
        {"message": "untimed"}
    ]"#;

    let items = from_json_str(legacy).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].message(), "early");
    assert_eq!(items[0].display_time(), "09:00 AM");
    assert_eq!(items[1].display_time(), "04:45 PM");
    assert_eq!(items[2].message(), "untimed");
    for (position, item) in items.iter().enumerate() {
        assert_eq!(item.index(), position);
        assert_eq!(item.start_time().second(), 0);
    }
}

#[test]
fn test_written_file_is_stable() {
    let items = load_items(&[
        ItemRecord::new("b", Some("2023-05-01 10:00:00".into())),
        ItemRecord::new("a", Some("2023-05-01 09:00:00".into())),
    ])
    .unwrap();

    let first = to_json_string(&items, 4).unwrap();
    let second = to_json_string(&from_json_str(&first).unwrap(), 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_store_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.json");
    let store = Store::new(StoreConfig::new().with_path(&path));

    store
        .save(&[Item::at("standup", dt(2023, 5, 1, 9, 0))])
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &value.as_array().unwrap()[0];
    assert_eq!(entry["index"], 0);
    assert_eq!(entry["message"], "standup");
    assert_eq!(entry["start_time"], "2023-05-01 09:00:00");
}

// =========================================================================
// Filters
// =========================================================================

#[test]
fn test_filter_by_day_example() {
    let items = vec![
        Item::at("first", dt(2023, 5, 1, 9, 7)),
        Item::at("second", dt(2023, 5, 2, 10, 0)),
    ];
    let day = filter_by_day(&items, Some(parse_day("05/01/23").unwrap()));
    assert_eq!(messages(&day), ["first"]);
    assert_eq!(day[0].start_time(), dt(2023, 5, 1, 9, 0));
}

#[test]
fn test_filter_by_week_example() {
    // Sunday 2023-04-30 and Wednesday 2023-05-03
    let items = sort_and_reindex(vec![
        Item::at("wed late", dt(2023, 5, 3, 17, 0)),
        Item::at("sun", dt(2023, 4, 30, 10, 0)),
        Item::at("wed early", dt(2023, 5, 3, 8, 0)),
    ]);
    let week = filter_by_week(&items, parse_day("05/04/23").unwrap());

    assert_eq!(messages(&week[0]), ["sun"]);
    assert_eq!(messages(&week[3]), ["wed early", "wed late"]);
    assert_eq!(week.total(), 3);

    let rendered = render_week(&week);
    assert!(rendered.contains("No Monday items."));
    assert!(rendered.contains("Wednesday\n"));
}

#[test]
fn test_serialize_items_matches_order() {
    let items = sort_and_reindex(vec![
        Item::at("b", dt(2023, 5, 1, 10, 0)),
        Item::at("a", dt(2023, 5, 1, 9, 0)),
    ]);
    let records = serialize_items(&items);
    assert_eq!(records[0].message, "a");
    assert_eq!(records[0].index, Some(0));
    assert_eq!(records[1].index, Some(1));
}
