//! CSV files written to disk.

use std::fs;
use std::path::PathBuf;

use restaurant_extract::{export, RestaurantRecord};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("restaurant_extract_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn save_csv_writes_plain_and_formatted_files() {
    let dir = scratch_dir("save");
    let path = dir.join("toronto.csv");
    let records = vec![
        RestaurantRecord {
            name: "Pai Northern Thai Kitchen".into(),
            url: "https://www.opentable.ca/r/pai".into(),
            phone: "(416) 901-4724".into(),
            cuisine: "Thai".into(),
        },
        RestaurantRecord {
            url: "https://www.opentable.ca/r/alo".into(),
            ..RestaurantRecord::named("Alo, Restaurant")
        },
    ];

    let formatted = export::save_csv(&path, &records).unwrap();
    assert_eq!(formatted, dir.join("toronto_formatted.csv"));

    let plain = fs::read_to_string(&path).unwrap();
    assert_eq!(
        plain.lines().collect::<Vec<_>>(),
        [
            "name,url,phone,cuisine",
            "Pai Northern Thai Kitchen,https://www.opentable.ca/r/pai,(416) 901-4724,Thai",
            "\"Alo, Restaurant\",https://www.opentable.ca/r/alo,,",
        ]
    );

    let pretty = fs::read_to_string(&formatted).unwrap();
    assert_eq!(
        pretty.lines().collect::<Vec<_>>(),
        [
            "Name,URL,Phone,Cuisine",
            "1. Pai Northern Thai Kitchen,https://www.opentable.ca/r/pai,(416) 901-4724,Thai",
            "\"2. Alo, Restaurant\",https://www.opentable.ca/r/alo,N/A,N/A",
        ]
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn records_round_trip_through_json() {
    let record = RestaurantRecord {
        name: "Kinka Izakaya".into(),
        url: "https://www.opentable.ca/r/kinka".into(),
        phone: String::new(),
        cuisine: "Japanese".into(),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"name":"Kinka Izakaya","url":"https://www.opentable.ca/r/kinka","phone":"","cuisine":"Japanese"}"#
    );
    assert_eq!(serde_json::from_str::<RestaurantRecord>(&json).unwrap(), record);
}

#[test]
fn save_csv_reports_unwritable_path() {
    let dir = scratch_dir("missing");
    let path = dir.join("no_such_dir").join("out.csv");

    let result = export::save_csv(&path, &[RestaurantRecord::named("Alo")]);
    assert!(matches!(result, Err(restaurant_extract::Error::Io(_))));

    fs::remove_dir_all(&dir).unwrap();
}
