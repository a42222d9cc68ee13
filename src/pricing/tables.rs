//! Static pricing and duration tables.
//!
//! The studio prices by size tier. Every table here is a process-wide
//! constant: there is no runtime mutation path and no storage behind it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Price range for a size tier, in Colombian pesos (no decimals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    /// True for the zero-priced sentinel entry of the largest tier.
    ///
    /// That tier is priced by hand by the studio, so the entry must never
    /// reach surcharge arithmetic or formatting.
    pub fn is_custom_quote(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

/// Surcharge factor for tattoos on sensitive body areas (ribs, hands, neck).
pub const SENSITIVE_ZONE_FACTOR: Decimal = dec!(1.05);

/// Flat fee for the optional design advisory session, in pesos.
/// Added after the zone surcharge, never multiplied by it.
pub const ADVISORY_FEE: i64 = 100_000;

/// Currency suffix appended to every formatted price.
pub const CURRENCY: &str = "COP";

/// Message returned when a size falls in the custom-quote tier.
pub const CUSTOM_QUOTE_MESSAGE: &str =
    "Este tamaño requiere una cotización personalizada. Escríbenos y agendamos una asesoría.";

/// Base price per size code. Code 5 is the custom-quote sentinel.
const PRICE_TABLE: [(u8, PriceRange); 5] = [
    (1, PriceRange { min: 300_000, max: 500_000 }),
    (2, PriceRange { min: 500_000, max: 700_000 }),
    (3, PriceRange { min: 700_000, max: 1_000_000 }),
    (4, PriceRange { min: 1_000_000, max: 1_400_000 }),
    (5, PriceRange { min: 0, max: 0 }),
];

/// Estimated design time per size code.
const DESIGN_HOURS: [(u8, &str); 5] = [
    (1, "1hr"),
    (2, "1.5-2hrs"),
    (3, "2-3hrs"),
    (4, "3-4hrs"),
    (5, "4-5hrs"),
];

/// Estimated session time per size code.
const SESSION_HOURS: [(u8, &str); 5] = [
    (1, "1-2hrs"),
    (2, "2-3hrs"),
    (3, "3-4hrs"),
    (4, "4-5hrs"),
    (5, "5-6hrs+"),
];

/// Look up the base price range for a size code.
pub fn price_range(size_code: u8) -> Option<PriceRange> {
    PRICE_TABLE
        .iter()
        .find(|(code, _)| *code == size_code)
        .map(|(_, range)| *range)
}

/// Look up the design-time estimate for a size code.
pub fn design_hours(size_code: u8) -> Option<&'static str> {
    DESIGN_HOURS
        .iter()
        .find(|(code, _)| *code == size_code)
        .map(|(_, hours)| *hours)
}

/// Look up the session-time estimate for a size code.
pub fn session_hours(size_code: u8) -> Option<&'static str> {
    SESSION_HOURS
        .iter()
        .find(|(code, _)| *code == size_code)
        .map(|(_, hours)| *hours)
}
