//! Merge properties over realistic documents.

use serde_json::{Value, json};

use toolbelt_test::component::http::{CommonResponse, HttpStatusCode};
use toolbelt_test::component::json::{merge, merge_value};

use super::helpers::object;

#[test_log::test]
fn disjoint_keys_produce_the_union() {
    let pairs = [
        (json!({}), json!({"a": 1})),
        (json!({"a": 1}), json!({})),
        (json!({"a": 1, "b": [1, 2]}), json!({"c": {"d": null}, "e": "x"})),
        (json!({"nested": {"x": 1}}), json!({"other": {"x": 2}})),
    ];

    for (a, b) in pairs {
        let mut merged = object(a.clone());
        merge(&mut merged, &object(b.clone()));

        let mut union = object(a);
        union.extend(object(b));
        assert_eq!(merged, union);
    }
}

#[test]
fn shared_object_keys_merge_recursively_at_every_depth() {
    let mut original = object(json!({"l1": {"l2": {"l3": {"keep": 1, "swap": "old"}}}}));
    merge(
        &mut original,
        &object(json!({"l1": {"l2": {"l3": {"swap": "new", "add": true}}}})),
    );

    assert_eq!(
        Value::Object(original),
        json!({"l1": {"l2": {"l3": {"keep": 1, "swap": "new", "add": true}}}})
    );
}

#[test]
fn shared_keys_with_a_non_object_side_take_the_incoming_value() {
    let sides = [json!(1), json!("s"), json!([1]), json!(null), json!(true), json!({"o": 1})];

    for original_value in &sides {
        for incoming_value in &sides {
            if original_value.is_object() && incoming_value.is_object() {
                continue;
            }
            let mut original = object(json!({ "k": original_value, "untouched": 0 }));
            merge(&mut original, &object(json!({ "k": incoming_value })));

            assert_eq!(original.get("k"), Some(incoming_value));
            assert_eq!(original.get("untouched"), Some(&json!(0)));
        }
    }
}

#[test]
fn merging_response_defaults_into_an_envelope() {
    let response = CommonResponse::with_payload(HttpStatusCode::Ok, json!({"id": 7}));
    let mut document = serde_json::to_value(&response).expect("response should serialize");

    merge_value(
        &mut document,
        &json!({"message": "done", "payload": {"name": "seven"}, "page": 2}),
    );

    let merged: CommonResponse<Value> =
        serde_json::from_value(document).expect("merged envelope should deserialize");
    assert_eq!(merged.message.as_deref(), Some("done"));
    assert_eq!(merged.payload, Some(json!({"id": 7, "name": "seven"})));
    assert_eq!(merged.page, Some(2));
}
