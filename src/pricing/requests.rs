//! Request DTOs for the quotation API.

use serde::{Deserialize, Deserializer};

/// Body of `POST /cotizar`.
///
/// The intake form sends its two flags as the strings `"si"`/`"no"`; they
/// are normalized to booleans here so nothing downstream compares strings.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Size tier, 1-5. Required; validated against the price table.
    pub size_code: Option<u8>,
    /// Whether the tattoo sits on a sensitive body area.
    #[serde(default, deserialize_with = "si_no")]
    pub sensitive_zone: bool,
    /// Whether the client wants the design advisory session.
    #[serde(default, deserialize_with = "si_no")]
    pub wants_advisory: bool,
    /// Free-text idea description, echoed back untouched.
    #[serde(default)]
    pub idea_description: String,
}

/// Exactly `"si"` means yes; anything else (including absence) means no.
fn si_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value == "si")
}
