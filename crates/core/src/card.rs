//! Card type constants and length limits for contributed card content.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Card types
// ---------------------------------------------------------------------------

/// Wire value for a black (question) card contribution.
pub const CARD_TYPE_BLACK: &str = "negra";
/// Wire value for a white (answer) card contribution.
pub const CARD_TYPE_WHITE: &str = "blanca";
/// Wire value for a contribution carrying both card kinds.
pub const CARD_TYPE_BOTH: &str = "ambas";

/// All accepted `tipo_carta` values.
pub const VALID_CARD_TYPES: &[&str] = &[CARD_TYPE_BLACK, CARD_TYPE_WHITE, CARD_TYPE_BOTH];

// ---------------------------------------------------------------------------
// Length limits (characters)
// ---------------------------------------------------------------------------

pub const MAX_BLACK_TEXT_LENGTH: usize = 500;
pub const MAX_WHITE_TEXT_LENGTH: usize = 200;
pub const MAX_CONTEXT_LENGTH: usize = 1000;

/// The kind of card a contribution describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Negra,
    Blanca,
    Ambas,
}

impl CardType {
    /// Parse a wire value. Matching is exact: no trimming, no case folding.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            CARD_TYPE_BLACK => Some(Self::Negra),
            CARD_TYPE_WHITE => Some(Self::Blanca),
            CARD_TYPE_BOTH => Some(Self::Ambas),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negra => CARD_TYPE_BLACK,
            Self::Blanca => CARD_TYPE_WHITE,
            Self::Ambas => CARD_TYPE_BOTH,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
