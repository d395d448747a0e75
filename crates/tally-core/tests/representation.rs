//! Wire shapes of counters and their HAL wrappers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use tally_core::hal::{CollectionModel, EntityModel, Link, Links, REL_SELF};
use tally_core::Counter;

fn item(name: &str, count: i64) -> EntityModel<Counter> {
    EntityModel::new(
        Counter::new(name, count),
        Links::new()
            .with(REL_SELF, Link::new(format!("/counters/{name}")))
            .with("counters", Link::new("/counters")),
    )
}

#[test]
fn plain_counter_round_trips() {
    let c: Counter = serde_json::from_str(r#"{"name":"counter3","count":1}"#).unwrap();
    assert_eq!(c, Counter::new("counter3", 1));
    assert_eq!(serde_json::to_value(&c).unwrap(), json!({"name": "counter3", "count": 1}));
}

#[test]
fn missing_count_reads_as_zero() {
    let c: Counter = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
    assert_eq!(c.count, 0);
}

#[test]
fn hal_item_can_be_read_back_as_counter() {
    let v = serde_json::to_value(item("counter1", 5)).unwrap();
    let c: Counter = serde_json::from_value(v).unwrap();
    assert_eq!(c, Counter::new("counter1", 5));
}

#[test]
fn missing_name_is_an_error() {
    assert!(serde_json::from_str::<Counter>(r#"{"count":1}"#).is_err());
}

#[test]
fn collection_shape() {
    let m = CollectionModel::new(
        "counterList",
        vec![item("counter1", 5), item("counter2", 10)],
        Links::new().with(REL_SELF, Link::new("/counters")),
    );
    let v: Value = serde_json::to_value(&m).unwrap();

    assert_eq!(
        v,
        json!({
            "_embedded": {
                "counterList": [
                    {
                        "name": "counter1",
                        "count": 5,
                        "_links": {
                            "self": { "href": "/counters/counter1" },
                            "counters": { "href": "/counters" }
                        }
                    },
                    {
                        "name": "counter2",
                        "count": 10,
                        "_links": {
                            "self": { "href": "/counters/counter2" },
                            "counters": { "href": "/counters" }
                        }
                    }
                ]
            },
            "_links": { "self": { "href": "/counters" } }
        })
    );
}
