//! Request body decoding into a flat [`FieldMap`].
//!
//! Two wire formats are accepted, selected by a substring match on the
//! declared content type. Anything else is rejected before validation.

use percent_encoding::percent_decode_str;
use serde_json::Value;

use crate::error::CoreError;
use crate::fields::FieldMap;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Decode `body` according to `content_type`.
pub fn decode_fields(content_type: &str, body: &[u8]) -> Result<FieldMap, CoreError> {
    if content_type.contains(CONTENT_TYPE_JSON) {
        decode_json(body)
    } else if content_type.contains(CONTENT_TYPE_FORM) {
        decode_form(body)
    } else {
        Err(CoreError::UnsupportedContentType)
    }
}

fn decode_json(body: &[u8]) -> Result<FieldMap, CoreError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| CoreError::MalformedBody(format!("invalid JSON: {e}")))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CoreError::MalformedBody(
            "expected a JSON object".to_string(),
        )),
    }
}

fn decode_form(body: &[u8]) -> Result<FieldMap, CoreError> {
    let body = std::str::from_utf8(body)
        .map_err(|_| CoreError::MalformedBody("form body is not valid UTF-8".to_string()))?;

    let mut fields = FieldMap::new();
    for segment in body.split('&') {
        // Segments without '=' carry no value and are skipped.
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        let key = percent_decode(key)?;
        let value = percent_decode(&value.replace('+', " "))?;
        fields.insert(key, Value::String(value));
    }
    Ok(fields)
}

fn percent_decode(raw: &str) -> Result<String, CoreError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| CoreError::MalformedBody(format!("invalid percent-encoding in '{raw}'")))
}
