#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use lockstep_core::protocol::TimingResult;

#[test]
fn whole_seconds_serialize_as_float() {
    let t = TimingResult::from_duration(Duration::from_secs(3));
    let s = serde_json::to_string(&t).expect("serialize");
    assert_eq!(s, r#"{"elapsed":3.0}"#);

    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert!(v["elapsed"].is_f64());
}

#[test]
fn sub_second_precision_is_kept() {
    let t = TimingResult::from_duration(Duration::from_millis(3_042));
    assert!((t.elapsed - 3.042).abs() < 1e-9);
    let back = t.as_duration().as_micros();
    assert!((3_041_999..=3_042_001).contains(&back));
}

#[test]
fn parses_client_side() {
    let t: TimingResult = serde_json::from_str(r#"{"elapsed": 2.95}"#).expect("must parse");
    assert!((t.elapsed - 2.95).abs() < 1e-9);
}

#[test]
fn missing_field_is_rejected() {
    let err = serde_json::from_str::<TimingResult>(r#"{}"#);
    assert!(err.is_err());
}
