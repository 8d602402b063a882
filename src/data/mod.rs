use crate::domain::model::CountryRecord;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{
    validate_iso2, validate_non_empty_string, validate_phone_code, Validate,
};

/// The reference dataset shipped with the crate. Order matters: shared
/// calling codes resolve to the first record carrying them.
const EMBEDDED_COUNTRIES: &str = include_str!("countries.json");

/// Immutable country reference table. Records are only looked up after load,
/// never created, mutated, or removed.
#[derive(Debug, Clone)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
}

impl CountryTable {
    /// Load the embedded dataset and check its invariants.
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED_COUNTRIES)
    }

    /// Parse a table from a JSON document (an array of records).
    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_str(content)?;
        let table = Self { records };
        table.validate()?;
        Ok(table)
    }

    /// Build a table from already-constructed records, e.g. in tests.
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self> {
        let table = Self { records };
        table.validate()?;
        Ok(table)
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Validate for CountryTable {
    fn validate(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(LookupError::ReferenceDataError {
                message: "country table is empty".to_string(),
            });
        }

        for record in &self.records {
            validate_non_empty_string("country_name", &record.country_name)?;
            validate_phone_code("phone_code", &record.phone_code)?;
            validate_iso2("iso2", &record.iso2)?;
        }

        Ok(())
    }
}
