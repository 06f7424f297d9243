//! Blank-nullable fields and date/time formats.
//!
//! Run with: cargo run --example converters

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_symbolic::temporal::DateFormat;
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Reading {
    #[serde(with = "serde_symbolic::temporal::date")]
    date: NaiveDate,
    #[serde(with = "serde_symbolic::temporal::time")]
    time: NaiveTime,
    #[serde(with = "serde_symbolic::blank")]
    value: Option<f64>,
    #[serde(with = "serde_symbolic::temporal::time::blank", default)]
    checked: Option<NaiveTime>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input = r#"[
        {"date":"2024-06-01","time":"06:00:00.000","value":17.5,"checked":"06:05:00.000"},
        {"date":"2024-06-01","time":"12:00:00.000","value":"","checked":""},
        {"date":"2024-06-01","time":"18:00:00.000","value":null}
    ]"#;

    let readings: Vec<Reading> = serde_json::from_str(input)?;
    for reading in &readings {
        println!(
            "{} {} {:?} checked {:?}",
            reading.date, reading.time, reading.value, reading.checked
        );
    }

    let json = serde_json::to_string(&readings)?;
    println!("\nJSON output:\n{}", json);

    let back: Vec<Reading> = serde_json::from_str(&json)?;
    assert_eq!(readings, back);
    println!("✓ Round-trip successful");

    let european = DateFormat::new("%d.%m.%Y");
    println!("\nCustom format: {}", european.format(&readings[0].date)?);
    if let Err(err) = european.parse("2024-06-01") {
        println!("Parse error: {}", err);
    }

    Ok(())
}
