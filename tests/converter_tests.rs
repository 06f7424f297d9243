use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_symbolic::blank::{self, BlankSeed};
use serde_symbolic::temporal::{DateFormat, DateTimeFormat, TimeFormat};
use serde_symbolic::{symbolic_enum, Error, Symbolic};

symbolic_enum! {
    pub struct Channel(u8) {
        Email = 1,
        TextMessage = 2,
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Booking {
    #[serde(with = "serde_symbolic::temporal::date")]
    day: NaiveDate,
    #[serde(with = "serde_symbolic::temporal::time")]
    at: NaiveTime,
    #[serde(with = "serde_symbolic::blank")]
    seats: Option<u16>,
    #[serde(with = "serde_symbolic::blank")]
    notify: Option<Symbolic<Channel>>,
}

#[test]
fn test_booking_round_trip() {
    let booking = Booking {
        day: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        at: NaiveTime::from_hms_milli_opt(23, 59, 59, 5).unwrap(),
        seats: Some(4),
        notify: None,
    };
    let json = serde_json::to_string(&booking).unwrap();
    assert_eq!(
        json,
        r#"{"day":"2025-12-31","at":"23:59:59.005","seats":4,"notify":""}"#
    );
    assert_eq!(serde_json::from_str::<Booking>(&json).unwrap(), booking);
}

#[test]
fn test_blank_fields_from_producer() {
    let json = r#"{"day":"2024-02-29","at":"00:00:00.000","seats":"","notify":"TextMessage"}"#;
    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.seats, None);
    assert_eq!(booking.notify, Some(Symbolic(Channel::TextMessage)));

    let json = r#"{"day":"2024-02-29","at":"00:00:00.000","seats":null,"notify":null}"#;
    let booking: Booking = serde_json::from_str(json).unwrap();
    assert_eq!(booking.seats, None);
    assert_eq!(booking.notify, None);
}

#[test]
fn test_invalid_dates_are_rejected() {
    let json = r#"{"day":"2023-02-29","at":"00:00:00.000","seats":1,"notify":""}"#;
    let err = serde_json::from_str::<Booking>(json).unwrap_err();
    assert!(err.to_string().contains("cannot parse `2023-02-29`"), "{}", err);
}

#[test]
fn test_custom_formats() {
    let date = DateFormat::new("%B %-d, %Y");
    let parsed = date.parse("March 9, 2024").unwrap();
    assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    assert_eq!(date.format(&parsed).unwrap(), "March 9, 2024");

    let time = TimeFormat::new("%I:%M %p");
    let parsed = time.parse("07:45 PM").unwrap();
    assert_eq!(parsed, NaiveTime::from_hms_opt(19, 45, 0).unwrap());
}

#[test]
fn test_datetime_default() {
    let format = DateTimeFormat::default();
    let value: NaiveDateTime = format.parse("2024-03-09T10:11:12.130").unwrap();
    assert_eq!(format.format(&value).unwrap(), "2024-03-09T10:11:12.130");
}

#[test]
fn test_format_errors_carry_input_and_pattern() {
    let err = TimeFormat::default().parse("noon").unwrap_err();
    assert!(err.is_decode_error());
    match err {
        Error::InvalidFormat { input, format, .. } => {
            assert_eq!(input, "noon");
            assert_eq!(format, "%H:%M:%S%.3f");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Opening {
    #[serde(with = "serde_symbolic::temporal::date")]
    day: NaiveDate,
    #[serde(with = "serde_symbolic::temporal::time::blank")]
    opens: Option<NaiveTime>,
    #[serde(
        serialize_with = "write_closing",
        deserialize_with = "read_closing",
        default
    )]
    closes: Option<NaiveTime>,
}

fn closing_format() -> TimeFormat {
    TimeFormat::new("%I:%M %p")
}

fn write_closing<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    let format = closing_format();
    blank::serialize_with(value, serializer, |value, serializer| {
        format.serialize(value, serializer)
    })
}

fn read_closing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
    BlankSeed(&closing_format()).deserialize(deserializer)
}

#[test]
fn test_blank_time_uses_time_format() {
    let opening = Opening {
        day: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        opens: Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
        closes: Some(NaiveTime::from_hms_opt(18, 30, 0).unwrap()),
    };
    let json = serde_json::to_string(&opening).unwrap();
    assert_eq!(
        json,
        r#"{"day":"2024-03-09","opens":"08:00:00.000","closes":"06:30 PM"}"#
    );
    assert_eq!(serde_json::from_str::<Opening>(&json).unwrap(), opening);
}

#[test]
fn test_blank_time_reads_blank_and_null() {
    let opening: Opening =
        serde_json::from_str(r#"{"day":"2024-03-09","opens":"","closes":null}"#).unwrap();
    assert_eq!(opening.opens, None);
    assert_eq!(opening.closes, None);

    let json = serde_json::to_string(&opening).unwrap();
    assert_eq!(json, r#"{"day":"2024-03-09","opens":"","closes":""}"#);

    let err = serde_json::from_str::<Opening>(r#"{"day":"2024-03-09","opens":"08:00","closes":""}"#)
        .unwrap_err();
    assert!(err.to_string().contains("cannot parse `08:00`"), "{}", err);
}
