use crate::core::classifier::{classify, closest_reference_zone};
use crate::core::extractor::{extract_candidate, scan_text};
use crate::core::formatter::{current_time_line, format_payload};
use crate::core::resolver::resolve_by_code;
use crate::core::search::search;
use crate::data::CountryTable;
use crate::domain::model::{
    CountryRecord, DisplayPayload, ParsedCandidate, ReferenceZone,
};
use crate::domain::ports::Clock;
use chrono::{DateTime, Utc};

/// One resolved phone-number candidate with its classification, when the
/// destination's timezone allowed one.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub candidate: ParsedCandidate,
    pub country: CountryRecord,
    pub payload: Option<DisplayPayload>,
    pub closest_zone: Option<ReferenceZone>,
}

/// One directory search hit with its classification and clock line.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub country: CountryRecord,
    pub payload: Option<DisplayPayload>,
    pub current_time: Option<String>,
}

/// Ties the stages together: extract -> resolve -> classify -> format.
///
/// Owns the immutable table and a clock; holds no other state, so repeated
/// calls with a frozen clock return identical results.
pub struct LookupEngine<C: Clock> {
    table: CountryTable,
    clock: C,
}

impl<C: Clock> LookupEngine<C> {
    pub fn new(table: CountryTable, clock: C) -> Self {
        Self { table, clock }
    }

    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    /// Dialing-code lookup on an already-isolated code string.
    pub fn resolve_code(&self, digits: &str) -> Option<&CountryRecord> {
        resolve_by_code(&self.table, digits)
    }

    /// Digit-only pipeline over a single phone-number string.
    pub fn lookup_number(&self, raw: &str) -> Option<LookupOutcome> {
        tracing::debug!("looking up number: '{}'", raw);
        let candidate = extract_candidate(&self.table, raw)?;
        self.outcome_for(candidate, self.clock.now())
    }

    /// Arbitrary-text pipeline over unstructured content. The clock is read
    /// once so every candidate is classified against the same instant.
    pub fn scan_page(&self, text: &str) -> Vec<LookupOutcome> {
        let candidates = scan_text(&self.table, text);
        tracing::debug!("scan produced {} candidate(s)", candidates.len());
        let now = self.clock.now();
        candidates
            .into_iter()
            .filter_map(|candidate| self.outcome_for(candidate, now))
            .collect()
    }

    /// Directory search plus per-hit classification.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let now = self.clock.now();
        let hits = search(&self.table, query);
        tracing::debug!("search '{}' matched {} record(s)", query, hits.len());
        hits.into_iter()
            .map(|country| SearchHit {
                payload: classify(country, now).as_ref().map(format_payload),
                current_time: current_time_line(country, now),
                country: country.clone(),
            })
            .collect()
    }

    fn outcome_for(
        &self,
        candidate: ParsedCandidate,
        now: DateTime<Utc>,
    ) -> Option<LookupOutcome> {
        let country = resolve_by_code(&self.table, &candidate.country_code)?.clone();
        let payload = classify(&country, now).as_ref().map(format_payload);
        let closest_zone = closest_reference_zone(&country, now);
        Some(LookupOutcome {
            candidate,
            country,
            payload,
            closest_zone,
        })
    }
}
