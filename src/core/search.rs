use crate::core::resolver::normalize_digits;
use crate::data::CountryTable;
use crate::domain::model::CountryRecord;
use regex::Regex;

/// Free-text directory search over the reference table.
///
/// Queries starting with `+` or made of digits are phone searches and match
/// dialing codes by equality or prefix. Anything else matches ISO2/ISO3/FIPS
/// exactly, the top-level domain with or without a leading dot, or (word by
/// word) the start of words in the country name or capital.
pub fn search<'a>(table: &'a CountryTable, query: &str) -> Vec<&'a CountryRecord> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let is_phone_search =
        term.starts_with('+') || term.chars().all(|c| c.is_ascii_digit());
    let search_digits = normalize_digits(&term);

    table
        .records()
        .iter()
        .filter(|record| matches_query(record, &term, is_phone_search, &search_digits))
        .collect()
}

fn matches_query(
    record: &CountryRecord,
    term: &str,
    is_phone_search: bool,
    search_digits: &str,
) -> bool {
    if is_phone_search && !search_digits.is_empty() {
        return record.phone_code == search_digits
            || record.phone_code.starts_with(search_digits);
    }

    if record.iso2.to_lowercase() == term
        || record.iso3.to_lowercase() == term
        || record.fips.to_lowercase() == term
    {
        return true;
    }

    let domain = record.top_level_domain.to_lowercase();
    if domain == term || domain == term.replacen('.', "", 1) {
        return true;
    }

    let words: Vec<&str> = term.split_whitespace().collect();
    let matches_name = words
        .iter()
        .all(|word| word_boundary_prefix(&record.country_name, word));
    let matches_capital = words
        .iter()
        .all(|word| word_boundary_prefix(&record.capital, word));

    matches_name || matches_capital
}

/// Case-insensitive "word starts with" match, anchored at word boundaries so
/// "land" does not hit "Ireland".
fn word_boundary_prefix(haystack: &str, word: &str) -> bool {
    let pattern = format!(r"(?i)\b{}", regex::escape(word));
    Regex::new(&pattern)
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CountryTable {
        CountryTable::load().unwrap()
    }

    fn names(hits: &[&CountryRecord]) -> Vec<String> {
        hits.iter().map(|c| c.country_name.clone()).collect()
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let table = table();
        assert!(search(&table, "").is_empty());
        assert!(search(&table, "   ").is_empty());
    }

    #[test]
    fn test_phone_prefix_search() {
        let table = table();
        assert_eq!(names(&search(&table, "+60")), vec!["Malaysia"]);
        assert_eq!(names(&search(&table, "60")), vec!["Malaysia"]);

        // "1" prefixes the whole NANP block in the table.
        let nanp = search(&table, "1");
        assert_eq!(nanp.len(), 6);
        assert_eq!(nanp[0].country_name, "United States");
    }

    #[test]
    fn test_short_code_search() {
        let table = table();
        assert_eq!(names(&search(&table, "MY")), vec!["Malaysia"]);
        assert_eq!(names(&search(&table, "deu")), vec!["Germany"]);
        // FIPS for Germany differs from its ISO2.
        assert_eq!(names(&search(&table, "gm")), vec!["Germany"]);
    }

    #[test]
    fn test_domain_search_with_or_without_dot() {
        let table = table();
        assert_eq!(names(&search(&table, ".in")), vec!["India"]);
        let bare = search(&table, "in");
        assert!(bare.iter().any(|c| c.country_name == "India"));
    }

    #[test]
    fn test_name_words_must_all_prefix_match() {
        let table = table();
        let united = search(&table, "united");
        assert_eq!(
            names(&united),
            vec!["United States", "United Kingdom", "United Arab Emirates"]
        );

        assert_eq!(names(&search(&table, "united king")), vec!["United Kingdom"]);
        // Mid-word fragments do not match.
        assert!(search(&table, "land").is_empty());
    }

    #[test]
    fn test_capital_search() {
        let table = table();
        assert_eq!(names(&search(&table, "new delhi")), vec!["India"]);
        assert_eq!(names(&search(&table, "kuala")), vec!["Malaysia"]);
    }
}
