//! Submission rules.
//!
//! Rules run in a fixed order and every rule runs; failures accumulate so a
//! client sees all problems at once. Rule 2 is the only one with a
//! precondition (it needs a card type to check membership).

use serde::Serialize;

use crate::card::{
    CardType, CARD_TYPE_BLACK, CARD_TYPE_BOTH, CARD_TYPE_WHITE, MAX_BLACK_TEXT_LENGTH,
    MAX_CONTEXT_LENGTH, MAX_WHITE_TEXT_LENGTH,
};
use crate::error::CoreError;
use crate::fields::FieldValue;
use crate::submission::{ClientInfo, NewSubmission, SubmissionForm};

pub const MSG_CARD_TYPE_REQUIRED: &str = "tipo_carta is required";
pub const MSG_CARD_TYPE_INVALID: &str = "tipo_carta must be 'negra', 'blanca', or 'ambas'";
pub const MSG_BLACK_TEXT_REQUIRED: &str = "carta_negra is required when tipo_carta is 'negra'";
pub const MSG_WHITE_TEXT_REQUIRED: &str = "carta_blanca is required when tipo_carta is 'blanca'";
pub const MSG_EITHER_TEXT_REQUIRED: &str =
    "At least one of carta_negra or carta_blanca is required when tipo_carta is 'ambas'";
pub const MSG_BLACK_TEXT_TOO_LONG: &str = "carta_negra must be 500 characters or less";
pub const MSG_WHITE_TEXT_TOO_LONG: &str = "carta_blanca must be 200 characters or less";
pub const MSG_CONTEXT_TOO_LONG: &str = "contexto must be 1000 characters or less";

/// Outcome of running the rules against one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Failure messages in rule order. Empty means valid.
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn check(&mut self, failed: bool, message: &str) {
        if failed {
            self.errors.push(message.to_string());
        }
    }
}

/// Run every rule against `form`.
pub fn validate(form: &SubmissionForm) -> ValidationResult {
    let mut result = ValidationResult::default();
    let card_type = form.card_type.as_text();

    // 1-2: presence, then membership.
    if form.card_type.is_provided() {
        result.check(
            card_type.and_then(CardType::from_wire).is_none(),
            MSG_CARD_TYPE_INVALID,
        );
    } else {
        result.errors.push(MSG_CARD_TYPE_REQUIRED.to_string());
    }

    // 3-5: content required by the card type.
    result.check(
        card_type == Some(CARD_TYPE_BLACK) && !form.black_text.is_provided(),
        MSG_BLACK_TEXT_REQUIRED,
    );
    result.check(
        card_type == Some(CARD_TYPE_WHITE) && !form.white_text.is_provided(),
        MSG_WHITE_TEXT_REQUIRED,
    );
    result.check(
        card_type == Some(CARD_TYPE_BOTH)
            && !form.black_text.is_provided()
            && !form.white_text.is_provided(),
        MSG_EITHER_TEXT_REQUIRED,
    );

    // 6-8: length limits.
    result.check(
        exceeds(&form.black_text, MAX_BLACK_TEXT_LENGTH),
        MSG_BLACK_TEXT_TOO_LONG,
    );
    result.check(
        exceeds(&form.white_text, MAX_WHITE_TEXT_LENGTH),
        MSG_WHITE_TEXT_TOO_LONG,
    );
    result.check(exceeds(&form.context, MAX_CONTEXT_LENGTH), MSG_CONTEXT_TOO_LONG);

    result
}

fn exceeds(value: &FieldValue, max: usize) -> bool {
    value.char_len().is_some_and(|len| len > max)
}

/// Validate `form` and, if it passes, build the row to insert.
pub fn prepare(form: SubmissionForm, client: ClientInfo) -> Result<NewSubmission, CoreError> {
    let result = validate(&form);
    if !result.is_valid() {
        return Err(CoreError::Validation(result.errors));
    }

    let card_type = form
        .card_type
        .as_text()
        .and_then(CardType::from_wire)
        .ok_or_else(|| CoreError::Validation(vec![MSG_CARD_TYPE_INVALID.to_string()]))?;

    Ok(NewSubmission {
        card_type,
        black_text: form.black_text.into_column(),
        white_text: form.white_text.into_column(),
        context: form.context.into_column(),
        client_ip: client.ip,
        client_agent: client.user_agent,
    })
}
