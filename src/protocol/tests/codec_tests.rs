//! Unit tests for payload field codecs.

use crate::protocol::domain::FieldCodec;
use crate::protocol::error::WireError;
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// Shape checks
// ============================================================================

#[rstest]
#[case(FieldCodec::text(), json!("hello"))]
#[case(FieldCodec::integer(), json!(7))]
#[case(FieldCodec::integer(), json!(-7))]
#[case(FieldCodec::boolean(), json!(true))]
#[case(FieldCodec::timestamp(), json!("2024-05-02T09:30:15Z"))]
#[case(FieldCodec::timestamp(), json!("2024-05-02 09:30:15"))]
#[case(FieldCodec::list_of(FieldCodec::integer()), json!([1, 2, 3]))]
#[case(FieldCodec::list_of(FieldCodec::integer()), json!([]))]
#[case(FieldCodec::json(), json!({"free": ["form", 1]}))]
#[case(FieldCodec::json(), json!(null))]
fn matching_values_pass(#[case] codec: FieldCodec, #[case] value: Value) {
    codec.check("field", &value).expect("value matches codec");
}

#[rstest]
#[case(FieldCodec::text(), json!(7))]
#[case(FieldCodec::integer(), json!("7"))]
#[case(FieldCodec::integer(), json!(2.5))]
#[case(FieldCodec::boolean(), json!("true"))]
#[case(FieldCodec::timestamp(), json!(1_714_642_215))]
#[case(FieldCodec::list_of(FieldCodec::integer()), json!("not a list"))]
#[case(FieldCodec::list_of(FieldCodec::integer()), json!([1, "two"]))]
fn mismatched_values_name_the_field(#[case] codec: FieldCodec, #[case] value: Value) {
    let error = codec.check("queued", &value).expect_err("must be rejected");
    assert!(
        matches!(&error, WireError::InvalidFieldValue { field, .. } if field == "queued"),
        "unexpected error: {error}"
    );
}

#[rstest]
fn unparseable_timestamp_text_carries_the_source() {
    let error = FieldCodec::timestamp()
        .check("sent_time", &json!("half past nine"))
        .expect_err("must be rejected");

    match error {
        WireError::InvalidTimestamp { field, source } => {
            assert_eq!(field, "sent_time");
            assert_eq!(source.text(), "half past nine");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn nested_lists_check_every_level() {
    let codec = FieldCodec::list_of(FieldCodec::list_of(FieldCodec::text()));

    codec
        .check("grid", &json!([["a"], ["b", "c"]]))
        .expect("nested lists of strings");
    codec
        .check("grid", &json!([["a"], [2]]))
        .expect_err("inner entry has the wrong shape");
}

// ============================================================================
// Presence flags
// ============================================================================

#[rstest]
fn constructors_default_to_required() {
    assert!(FieldCodec::text().is_required());
    assert!(FieldCodec::list_of(FieldCodec::json()).is_required());
}

#[rstest]
fn optional_clears_only_the_own_flag() {
    let codec = FieldCodec::list_of(FieldCodec::text()).optional();

    assert!(!codec.is_required());
    let FieldCodec::List { item, .. } = codec else {
        panic!("expected a list codec");
    };
    assert!(item.is_required(), "item flag is independent");
}

// ============================================================================
// Manifest (de)serialisation
// ============================================================================

#[rstest]
#[case(json!({"codec": "str"}), FieldCodec::text())]
#[case(json!({"codec": "int", "required": true}), FieldCodec::integer())]
#[case(json!({"codec": "bool", "required": false}), FieldCodec::boolean().optional())]
#[case(json!({"codec": "timestamp"}), FieldCodec::timestamp())]
#[case(
    json!({"codec": "list", "item": {"codec": "str"}}),
    FieldCodec::list_of(FieldCodec::text())
)]
#[case(json!({"codec": "json"}), FieldCodec::json())]
fn manifest_specs_deserialise(#[case] spec: Value, #[case] expected: FieldCodec) {
    let parsed: FieldCodec = serde_json::from_value(spec).expect("valid spec");
    assert_eq!(parsed, expected);
}

#[rstest]
fn serialisation_round_trips_through_the_manifest_form() {
    let codec = FieldCodec::list_of(FieldCodec::timestamp().optional());

    let spec = serde_json::to_value(&codec).expect("serialises");
    assert_eq!(spec["codec"], "list");
    let parsed: FieldCodec = serde_json::from_value(spec).expect("parses back");
    assert_eq!(parsed, codec);
}

#[rstest]
#[case(json!({"codec": "stringy"}))]
#[case(json!({"required": true}))]
#[case(json!({"codec": "list"}))]
fn malformed_specs_are_rejected(#[case] spec: Value) {
    assert!(serde_json::from_value::<FieldCodec>(spec).is_err());
}

#[rstest]
fn expected_descriptions_read_well() {
    assert_eq!(FieldCodec::integer().expected(), "an integer");
    assert_eq!(
        FieldCodec::list_of(FieldCodec::timestamp()).expected(),
        "a list where every entry is an ISO-8601 timestamp string"
    );
}
