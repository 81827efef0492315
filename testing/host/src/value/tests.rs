use crate::{
    error::HostError,
    pool::{PoolStats, ValuePool},
    value::{HostValue, json_truth},
};
use queryfn::Value;
use serde_json::{Value as Json, json};
use std::sync::Arc;

fn value(json: Json) -> (HostValue, Arc<ValuePool>) {
    let pool = Arc::new(ValuePool::new());
    (HostValue::new(json, Arc::clone(&pool)), pool)
}

#[test]
fn display_is_compact_json_and_text_unquotes_strings() {
    let (text, _) = value(json!("hello"));
    assert_eq!(text.to_string(), r#""hello""#);
    assert_eq!(text.to_text(), "hello");

    let (doc, _) = value(json!({ "a": [1, 2] }));
    assert_eq!(doc.to_string(), r#"{"a":[1,2]}"#);
    assert_eq!(doc.to_text(), doc.to_string());
}

#[test]
fn marshal_json_round_trips_the_document() {
    let doc = json!({ "name": "x", "n": 3, "tags": ["a"] });
    let (v, _) = value(doc.clone());

    let bytes = v.marshal_json().expect("valid value marshals");
    let back: Json = serde_json::from_slice(&bytes).expect("bytes are json");
    assert_eq!(back, doc);
}

#[test]
fn actual_exposes_the_json_document() {
    let (v, _) = value(json!([1, 2, 3]));

    let actual = v.actual();
    assert_eq!(actual.downcast_ref::<Json>(), Some(&json!([1, 2, 3])));
}

#[test]
fn truthiness_follows_json_shape() {
    let falsy = [
        json!(null),
        json!(false),
        json!(0),
        json!(0.0),
        json!(""),
        json!([]),
        json!({}),
    ];
    for doc in falsy {
        assert!(!json_truth(&doc), "{doc} should be falsy");
    }

    let truthy = [
        json!(true),
        json!(-1),
        json!(0.5),
        json!("0"),
        json!([null]),
        json!({ "k": false }),
    ];
    for doc in truthy {
        assert!(json_truth(&doc), "{doc} should be truthy");
    }
}

#[test]
fn invalid_value_is_a_falsy_sentinel_that_refuses_to_marshal() {
    let pool = Arc::new(ValuePool::new());
    let v = HostValue::invalid("my::Opaque", Arc::clone(&pool));

    assert!(!v.is_valid());
    assert!(v.json().is_none());
    assert!(!v.truth());
    assert_eq!(v.to_string(), "<invalid my::Opaque>");
    assert!(v.actual().is::<()>());

    let err = v.marshal_json().expect_err("sentinel cannot marshal");
    let host = err.downcast_ref::<HostError>().expect("host error");
    assert!(matches!(
        host,
        HostError::InvalidValue {
            type_name: "my::Opaque"
        }
    ));
    assert_eq!(pool.stats().live, 1);
}

#[test]
fn recycle_releases_exactly_once() {
    let (v, pool) = value(json!(1));
    assert_eq!(
        pool.stats(),
        PoolStats {
            live: 1,
            tracked: 0,
            recycled: 0
        }
    );

    v.recycle();
    v.recycle();

    assert!(v.is_recycled());
    assert_eq!(
        pool.stats(),
        PoolStats {
            live: 0,
            tracked: 0,
            recycled: 1
        }
    );
}

#[test]
fn track_counts_until_recycled() {
    let (v, pool) = value(json!("t"));

    v.track();
    v.track();
    v.recycle();
    v.track();

    assert_eq!(pool.stats().tracked, 2);
}
