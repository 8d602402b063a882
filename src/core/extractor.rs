use crate::core::resolver::{normalize_digits, resolve_by_code};
use crate::data::CountryTable;
use crate::domain::model::ParsedCandidate;
use regex::Regex;
use std::collections::HashSet;

/// Longest fragment scan mode will even look at. Anything longer is page
/// prose, not a phone number.
const MAX_FRAGMENT_LEN: usize = 100;

/// Words that mark a fragment as a UI label rather than a number.
const LABEL_WORDS: &[&str] = &[
    "phone",
    "number",
    "call",
    "mobile",
    "fax",
    "tel",
    "contact",
    "extension",
];

/// Digit-only mode, for input already known to be a single phone number.
///
/// All digits are concatenated, then candidate country-code prefix lengths
/// are tried from 4 down to 1. A prefix that exists in the table is accepted
/// when the remainder is at least 4 digits and the total is at most 18; the
/// single-digit code "1" instead requires a total of 10 to 15 digits. The
/// longest valid prefix wins. No valid split means the input is unparseable.
pub fn extract_candidate(table: &CountryTable, raw: &str) -> Option<ParsedCandidate> {
    let digits = normalize_digits(raw);
    if digits.len() < 4 {
        tracing::debug!("input too short to split: {} digits", digits.len());
        return None;
    }

    for prefix_len in (1..=4).rev() {
        let prefix = &digits[..prefix_len];
        if resolve_by_code(table, prefix).is_none() {
            continue;
        }

        let remaining = digits.len() - prefix_len;
        let accepted = if prefix == "1" {
            (10..=15).contains(&digits.len())
        } else {
            remaining >= 4 && digits.len() <= 18
        };

        if accepted {
            tracing::debug!("accepted prefix '{}' ({} digits total)", prefix, digits.len());
            return Some(ParsedCandidate {
                country_code: prefix.to_string(),
                full_number: raw.trim().to_string(),
            });
        }
    }

    None
}

/// Arbitrary-text mode, for unstructured page content.
///
/// The text is split into trimmed line fragments. Fragments that are too
/// long or carry non-phone markers (URLs, label words) are skipped, the rest
/// are matched against a small set of permissive anchored patterns. Each
/// match's leading 1-4 digit group must resolve against the table or the
/// match is dropped silently. Results are deduplicated by
/// `(country_code, full_number)`.
pub fn scan_text(table: &CountryTable, text: &str) -> Vec<ParsedCandidate> {
    let patterns = phone_patterns();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut candidates = Vec::new();

    for fragment in text.lines().map(str::trim) {
        if fragment.is_empty() || !looks_like_phone_fragment(fragment) {
            continue;
        }

        for pattern in &patterns {
            let Some(caps) = pattern.captures(fragment) else {
                continue;
            };
            let code = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

            if resolve_by_code(table, code).is_none() {
                continue;
            }

            let key = (code.to_string(), fragment.to_string());
            if seen.insert(key) {
                candidates.push(ParsedCandidate {
                    country_code: code.to_string(),
                    full_number: fragment.to_string(),
                });
            }
            break;
        }
    }

    tracing::debug!("scan found {} candidate(s)", candidates.len());
    candidates
}

fn looks_like_phone_fragment(fragment: &str) -> bool {
    if fragment.len() > MAX_FRAGMENT_LEN {
        return false;
    }

    let lower = fragment.to_lowercase();
    if lower.contains("http://")
        || lower.contains("https://")
        || lower.contains("www.")
        || lower.contains('@')
    {
        return false;
    }

    !LABEL_WORDS.iter().any(|word| lower.contains(word))
}

/// Permissive shapes a phone number shows up in: "+91 97854-78207",
/// "+31 6 42437939", "39-3493433405", "(+39) 3493433405", and a catch-all
/// for looser grouping. Anchored so the whole fragment must be the number.
fn phone_patterns() -> Vec<Regex> {
    [
        r"^\+?(\d{1,4})[-\s]+(\d+[-\s]*\d*)$",
        r"^\+?(\d{1,4})\s+(\d+\s+\d+)$",
        r"^\+?(\d{1,4})[-\s](\d+)$",
        r"^\+?(\d{1,4})\s+(\d+)$",
        r"^\(\+?(\d{1,4})\)[-\s]?(\d+)$",
        r"^\+?(\d{1,4})[-\s]*(\d{2,})[-\s]*(\d+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone pattern is valid"))
    .collect()
}
