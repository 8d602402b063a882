use serde::{Deserialize, Serialize};

/// One row of the country reference table. Loaded once at startup and never
/// mutated afterwards; lookups borrow or clone, they never write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country_name: String,
    pub capital: String,
    pub iso2: String,
    pub iso3: String,
    pub fips: String,
    pub top_level_domain: String,
    /// 1-4 decimal digits, no leading `+`. Not unique across records: shared
    /// calling codes (e.g. "1") resolve to the first entry in table order.
    pub phone_code: String,
    /// IANA zone id of the capital. Absent for a few territories, in which
    /// case no classification can be produced for the record.
    #[serde(default)]
    pub time_zone_in_capital: Option<String>,
}

/// A detected phone-number candidate. `(country_code, full_number)` is the
/// dedup identity when scanning unstructured text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCandidate {
    pub country_code: String,
    pub full_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Available,
    Soon,
    Ended,
    Unavailable,
}

/// Outcome of classifying one country against one instant. Pure data; the
/// same `(country, instant)` pair always yields an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub tier: StatusTier,
    pub message: String,
    pub local_time: String,
    pub country: CountryRecord,
}

/// Render-ready projection of a classification, consumed by whatever
/// presentation layer sits on top (CLI text, JSON for a UI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPayload {
    pub country_name: String,
    pub tier: StatusTier,
    pub glyph: &'static str,
    pub message: String,
    pub local_time: String,
    pub background: &'static str,
    pub text_color: &'static str,
    pub border_color: &'static str,
}

/// The three fixed zones the nearest-reference heuristic compares against.
/// Tie-break order is the declaration order: India, then UK, then US.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceZone {
    India,
    UnitedKingdom,
    UnitedStates,
}

impl ReferenceZone {
    pub const ALL: [ReferenceZone; 3] = [
        ReferenceZone::India,
        ReferenceZone::UnitedKingdom,
        ReferenceZone::UnitedStates,
    ];

    pub fn zone_id(self) -> &'static str {
        match self {
            ReferenceZone::India => "Asia/Kolkata",
            ReferenceZone::UnitedKingdom => "Europe/London",
            ReferenceZone::UnitedStates => "America/New_York",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReferenceZone::India => "India",
            ReferenceZone::UnitedKingdom => "United Kingdom",
            ReferenceZone::UnitedStates => "United States",
        }
    }
}
