use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "{context}: unexpected HTTP status");
}

/// ISO-8601 UTC with milliseconds, e.g. `2020-01-15T00:00:00.000Z`.
pub fn assert_iso_timestamp(value: &Value) {
    let text = value.as_str().expect("timestamp is a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(text).is_ok(),
        "not RFC 3339: {text}"
    );
    assert!(text.ends_with('Z'), "not UTC: {text}");
    assert_eq!(text.len(), 24, "not millisecond precision: {text}");
}

/// `{ success: true, data, timestamp }`; returns `data`.
pub fn assert_success_envelope(body: &Value) -> anyhow::Result<&Value> {
    assert_eq!(body["success"], Value::Bool(true), "success flag: {body}");
    assert_iso_timestamp(&body["timestamp"]);
    body.get("data").context("envelope has data")
}

/// Uniform error body with the given status.
pub fn assert_error_body(body: &Value, status: StatusCode, error: &str) {
    assert_eq!(body["error"], error, "error: {body}");
    assert_eq!(body["statusCode"], status.as_u16(), "statusCode: {body}");
    assert!(body["message"].is_string(), "message: {body}");
    assert_iso_timestamp(&body["timestamp"]);
}

/// Field names listed in a validation error's `details`.
pub fn detail_fields(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .filter_map(|d| d["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn codes(data: &Value) -> Vec<String> {
    data.as_array()
        .map(|drugs| {
            drugs
                .iter()
                .filter_map(|d| d["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
