//! Typed submission record, client metadata and the insertion command.

use serde::Serialize;

use crate::card::CardType;
use crate::fields::{FieldMap, FieldValue};

// ---------------------------------------------------------------------------
// Wire field names
// ---------------------------------------------------------------------------

pub const FIELD_CARD_TYPE: &str = "tipo_carta";
pub const FIELD_BLACK_TEXT: &str = "carta_negra";
pub const FIELD_WHITE_TEXT: &str = "carta_blanca";
pub const FIELD_CONTEXT: &str = "contexto";

/// Every field a submission reads. Anything else in the mapping is ignored.
pub const KNOWN_FIELDS: &[&str] = &[
    FIELD_CARD_TYPE,
    FIELD_BLACK_TEXT,
    FIELD_WHITE_TEXT,
    FIELD_CONTEXT,
];

/// Placeholder for client metadata the request did not carry.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// A card contribution as submitted, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionForm {
    pub card_type: FieldValue,
    pub black_text: FieldValue,
    pub white_text: FieldValue,
    pub context: FieldValue,
}

impl SubmissionForm {
    /// Build the record from a decoded mapping, reading only [`KNOWN_FIELDS`].
    pub fn from_fields(fields: &FieldMap) -> Self {
        Self {
            card_type: FieldValue::from_fields(fields, FIELD_CARD_TYPE),
            black_text: FieldValue::from_fields(fields, FIELD_BLACK_TEXT),
            white_text: FieldValue::from_fields(fields, FIELD_WHITE_TEXT),
            context: FieldValue::from_fields(fields, FIELD_CONTEXT),
        }
    }
}

/// Keys in `fields` that a submission does not read, in mapping order.
pub fn unrecognized_keys(fields: &FieldMap) -> Vec<&str> {
    fields
        .keys()
        .map(String::as_str)
        .filter(|k| !KNOWN_FIELDS.contains(k))
        .collect()
}

/// Who sent the submission, as far as request headers tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip: String,
    pub user_agent: String,
}

impl ClientInfo {
    /// Missing or empty values fall back to [`UNKNOWN_CLIENT`].
    pub fn new(ip: Option<&str>, user_agent: Option<&str>) -> Self {
        let or_unknown = |v: Option<&str>| {
            v.filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_CLIENT)
                .to_string()
        };
        Self {
            ip: or_unknown(ip),
            user_agent: or_unknown(user_agent),
        }
    }
}

/// A validated submission, ready to insert as one row.
///
/// Optional texts are `None` when not provided, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubmission {
    pub card_type: CardType,
    pub black_text: Option<String>,
    pub white_text: Option<String>,
    pub context: Option<String>,
    pub client_ip: String,
    pub client_agent: String,
}
