use crate::data::CountryTable;
use crate::domain::model::CountryRecord;

/// Strip everything that is not a decimal digit.
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Exact dialing-code lookup. The input may carry `+`, spaces, or hyphens;
/// only its digits are compared. Shared codes resolve to the first record in
/// table order; NANP area codes are not used to tell members apart.
pub fn resolve_by_code<'a>(table: &'a CountryTable, digits: &str) -> Option<&'a CountryRecord> {
    let normalized = normalize_digits(digits);
    if normalized.is_empty() {
        return None;
    }

    table
        .records()
        .iter()
        .find(|record| record.phone_code == normalized)
}
