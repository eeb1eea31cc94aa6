//! Unit tests for message type generation.

use super::fixtures::{PING_TYPE, locator, ping_descriptor, status_descriptor, uri};
use crate::protocol::domain::{
    FieldCodec, FieldDef, FieldSource, HandlerLocator, MessageDescriptor, MessageTypeUri,
};
use crate::protocol::error::ConfigurationError;
use crate::protocol::generate_message_type;
use rstest::rstest;
use serde_json::json;

// ============================================================================
// Happy path
// ============================================================================

#[rstest]
fn generates_model_and_schema_metadata() {
    let generated = generate_message_type(&ping_descriptor()).expect("valid descriptor");

    assert_eq!(generated.model().name(), "Ping");
    assert_eq!(generated.model().schema_name(), "PingSchema");
    assert_eq!(generated.model().handler().as_str(), "pings.PingHandler");
    assert_eq!(generated.model().message_type().as_str(), PING_TYPE);
    assert_eq!(generated.schema().name(), "PingSchema");
    assert_eq!(generated.schema().model_name(), "Ping");
}

#[rstest]
fn preserves_field_declaration_order() {
    let generated = generate_message_type(&status_descriptor()).expect("valid descriptor");

    let names: Vec<_> = generated
        .schema()
        .fields()
        .iter()
        .map(FieldDef::name)
        .collect();
    assert_eq!(names, ["queued", "paused", "updated_at", "tags", "detail"]);
}

#[rstest]
fn stores_the_wire_identifier_verbatim() {
    // Odd spacing and casing must survive untouched; the serialiser reads
    // this string directly.
    let odd = " Spaced/1.0/PING ";
    let descriptor = MessageDescriptor::new(
        "Ping",
        locator("pings.PingHandler"),
        uri(odd),
        FieldSource::empty(),
    );

    let generated = generate_message_type(&descriptor).expect("valid descriptor");
    assert_eq!(generated.message_type().as_str(), odd);
}

#[rstest]
fn an_empty_field_list_is_valid() {
    let descriptor = MessageDescriptor::new(
        "Trust",
        locator("trust.TrustPingHandler"),
        uri("trust-ping/1.0/ping"),
        FieldSource::empty(),
    );

    let generated = generate_message_type(&descriptor).expect("valid descriptor");
    assert!(generated.schema().fields().is_empty());
}

#[rstest]
fn each_call_mints_an_independent_pair() {
    let first = generate_message_type(&ping_descriptor()).expect("valid descriptor");
    let second = generate_message_type(&ping_descriptor()).expect("valid descriptor");

    assert_eq!(first, second);
    assert!(!std::sync::Arc::ptr_eq(
        &first.schema_handle(),
        &second.schema_handle()
    ));
}

// ============================================================================
// Schema composition
// ============================================================================

#[rstest]
fn schema_source_reuses_declared_fields() {
    let base = generate_message_type(&status_descriptor()).expect("valid descriptor");
    let derived = MessageDescriptor::new(
        "StatusReport",
        locator("admin_routing.StatusReportHandler"),
        uri("admin-routing/1.0/status-report"),
        FieldSource::Schema(base.schema_handle()),
    );

    let generated = generate_message_type(&derived).expect("valid descriptor");
    assert_eq!(generated.model().schema_name(), "StatusReportSchema");
    assert_eq!(generated.schema().fields(), base.schema().fields());
}

// ============================================================================
// Manifest sources
// ============================================================================

#[rstest]
fn manifest_object_builds_codec_checked_fields() {
    let descriptor = MessageDescriptor::new(
        "Send",
        locator("routing.SendHandler"),
        uri("admin-routing/1.0/send"),
        FieldSource::Manifest(json!({
            "to": {"codec": "str"},
            "content": {"codec": "json", "required": false},
            "sent_time": {"codec": "timestamp"},
            "recipients": {"codec": "list", "item": {"codec": "str"}, "required": false},
        })),
    );

    let generated = generate_message_type(&descriptor).expect("valid manifest");
    let schema = generated.schema();
    assert_eq!(schema.fields().len(), 4);
    assert_eq!(
        schema.field("recipients").map(|field| field.codec().clone()),
        Some(FieldCodec::list_of(FieldCodec::text()).optional())
    );
    assert!(schema.field("sent_time").is_some_and(FieldDef::is_required));
}

#[rstest]
fn manifest_required_defaults_to_true() {
    let descriptor = MessageDescriptor::new(
        "Send",
        locator("routing.SendHandler"),
        uri("admin-routing/1.0/send"),
        FieldSource::Manifest(json!({"to": {"codec": "str"}})),
    );

    let generated = generate_message_type(&descriptor).expect("valid manifest");
    assert!(generated.schema().field("to").is_some_and(FieldDef::is_required));
}

#[rstest]
#[case(json!(["to", "content"]), "an array")]
#[case(json!("to"), "a string")]
#[case(json!(17), "a number")]
#[case(json!(null), "null")]
fn non_object_manifest_is_unsupported(#[case] manifest: serde_json::Value, #[case] found: &str) {
    let descriptor = MessageDescriptor::new(
        "Send",
        locator("routing.SendHandler"),
        uri("admin-routing/1.0/send"),
        FieldSource::Manifest(manifest),
    );

    let error = generate_message_type(&descriptor).expect_err("must be rejected");
    assert_eq!(
        error,
        ConfigurationError::UnsupportedFieldSource {
            found: found.to_owned()
        }
    );
}

#[rstest]
fn malformed_codec_spec_names_the_field() {
    let descriptor = MessageDescriptor::new(
        "Send",
        locator("routing.SendHandler"),
        uri("admin-routing/1.0/send"),
        FieldSource::Manifest(json!({"to": {"codec": "stringy"}})),
    );

    let error = generate_message_type(&descriptor).expect_err("must be rejected");
    assert!(
        matches!(&error, ConfigurationError::InvalidCodecSpec { field, .. } if field == "to"),
        "unexpected error: {error}"
    );
}

// ============================================================================
// Name validation
// ============================================================================

#[rstest]
#[case("")]
#[case("   ")]
fn empty_model_name_is_rejected(#[case] name: &str) {
    let descriptor = MessageDescriptor::new(
        name,
        locator("pings.PingHandler"),
        uri(PING_TYPE),
        FieldSource::empty(),
    );

    assert_eq!(
        generate_message_type(&descriptor).expect_err("must be rejected"),
        ConfigurationError::EmptyName
    );
}

#[rstest]
fn empty_field_name_is_rejected() {
    let descriptor = MessageDescriptor::new(
        "Ping",
        locator("pings.PingHandler"),
        uri(PING_TYPE),
        FieldSource::inline([("  ", FieldCodec::text())]),
    );

    assert_eq!(
        generate_message_type(&descriptor).expect_err("must be rejected"),
        ConfigurationError::EmptyFieldName
    );
}

#[rstest]
#[case("@type")]
#[case("~thread")]
#[case("~transport")]
fn reserved_field_names_are_rejected(#[case] field: &str) {
    let descriptor = MessageDescriptor::new(
        "Ping",
        locator("pings.PingHandler"),
        uri(PING_TYPE),
        FieldSource::inline([(field, FieldCodec::text())]),
    );

    assert_eq!(
        generate_message_type(&descriptor).expect_err("must be rejected"),
        ConfigurationError::ReservedFieldName(field.to_owned())
    );
}

#[rstest]
fn duplicate_field_names_are_rejected() {
    let descriptor = MessageDescriptor::new(
        "Ping",
        locator("pings.PingHandler"),
        uri(PING_TYPE),
        FieldSource::inline([
            ("comment", FieldCodec::text()),
            ("comment", FieldCodec::integer()),
        ]),
    );

    assert_eq!(
        generate_message_type(&descriptor).expect_err("must be rejected"),
        ConfigurationError::DuplicateField("comment".to_owned())
    );
}

// ============================================================================
// Identifier newtypes
// ============================================================================

#[rstest]
fn empty_message_type_uri_is_rejected() {
    assert_eq!(
        MessageTypeUri::new("  ").expect_err("must be rejected"),
        ConfigurationError::EmptyMessageType
    );
}

#[rstest]
fn empty_handler_locator_is_rejected() {
    assert_eq!(
        HandlerLocator::new("").expect_err("must be rejected"),
        ConfigurationError::EmptyHandlerLocator
    );
}
