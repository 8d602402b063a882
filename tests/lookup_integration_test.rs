use chrono::{DateTime, TimeZone, Utc};
use country_time_finder::core::classifier::classify;
use country_time_finder::core::formatter::format_payload;
use country_time_finder::{Clock, CountryTable, LookupEngine, StatusTier};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn engine_at(hour: u32, minute: u32) -> LookupEngine<FixedClock> {
    let instant = Utc.with_ymd_and_hms(2026, 1, 15, hour, minute, 0).unwrap();
    LookupEngine::new(CountryTable::load().unwrap(), FixedClock(instant))
}

#[test]
fn test_indian_mobile_number_resolves_and_classifies() {
    // 06:30 UTC = 12:00 in Kolkata.
    let engine = engine_at(6, 30);
    let outcome = engine.lookup_number("+91-9876543210").unwrap();

    assert_eq!(outcome.candidate.country_code, "91");
    assert_eq!(outcome.candidate.full_number, "+91-9876543210");
    assert_eq!(outcome.country.country_name, "India");

    let payload = outcome.payload.unwrap();
    assert_eq!(payload.tier, StatusTier::Available);
    assert_eq!(payload.message, "Available Now");
    assert_eq!(payload.local_time, "12:00 PM");
}

#[test]
fn test_nanp_number_resolves_to_canonical_record() {
    let engine = engine_at(15, 0);
    let outcome = engine.lookup_number("+1-9024811350").unwrap();

    assert_eq!(outcome.candidate.country_code, "1");
    // "1" is shared; the canonical first record wins.
    assert_eq!(outcome.country.country_name, "United States");
    // 15:00 UTC = 10:00 in New York: the window just opened.
    assert_eq!(outcome.payload.unwrap().tier, StatusTier::Available);
}

#[test]
fn test_four_digit_input_with_no_valid_split_is_absent() {
    let engine = engine_at(12, 0);
    assert!(engine.lookup_number("1234").is_none());
}

#[test]
fn test_page_scan_end_to_end() {
    // 06:30 UTC: noon in Kolkata, 07:30 in London, 01:30 in Nassau.
    let engine = engine_at(6, 30);
    let page = "Our offices\n\
                +91 98765 43210\n\
                +44-2079460958\n\
                +1242-359-1234\n\
                https://example.com/+33-123456789\n\
                Phone: +49 30 123456";
    let outcomes = engine.scan_page(page);

    let countries: Vec<&str> = outcomes
        .iter()
        .map(|o| o.country.country_name.as_str())
        .collect();
    assert_eq!(countries, vec!["India", "United Kingdom", "Bahamas"]);

    let tiers: Vec<StatusTier> = outcomes
        .iter()
        .map(|o| o.payload.as_ref().unwrap().tier)
        .collect();
    assert_eq!(
        tiers,
        vec![StatusTier::Available, StatusTier::Soon, StatusTier::Unavailable]
    );
}

#[test]
fn test_directory_search_classifies_hits() {
    let engine = engine_at(6, 30);
    let hits = engine.search("united");

    let names: Vec<&str> = hits
        .iter()
        .map(|h| h.country.country_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["United States", "United Kingdom", "United Arab Emirates"]
    );

    // Every hit carries a clock line for the popup-style display.
    assert!(hits.iter().all(|h| h.current_time.is_some()));
}

#[test]
fn test_unmatched_queries_yield_empty_results_not_errors() {
    let engine = engine_at(12, 0);
    assert!(engine.lookup_number("no digits at all").is_none());
    assert!(engine.scan_page("nothing resembling a number").is_empty());
    assert!(engine.search("atlantis").is_empty());
}

#[test]
fn test_business_hours_roundtrip_keeps_available_style() {
    let table = CountryTable::load().unwrap();
    let india = table
        .records()
        .iter()
        .find(|c| c.country_name == "India")
        .unwrap();

    // Noon in Kolkata, well inside the window.
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 6, 30, 0).unwrap();
    let payload = format_payload(&classify(india, now).unwrap());

    assert_eq!(payload.tier, StatusTier::Available);
    assert_eq!(payload.glyph, "\u{1F7E2}");
    assert_eq!(
        (payload.background, payload.text_color, payload.border_color),
        ("#d1fae5", "#065f46", "#a7f3d0")
    );
}
