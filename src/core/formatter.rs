use crate::domain::model::{ClassificationResult, CountryRecord, DisplayPayload, StatusTier};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Fixed presentation attributes of one tier: marker glyph and the
/// background/text/border color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    pub glyph: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

pub fn tier_style(tier: StatusTier) -> TierStyle {
    match tier {
        StatusTier::Available => TierStyle {
            glyph: "\u{1F7E2}",
            background: "#d1fae5",
            text: "#065f46",
            border: "#a7f3d0",
        },
        StatusTier::Soon => TierStyle {
            glyph: "\u{1F7E1}",
            background: "#fef3c7",
            text: "#92400e",
            border: "#fde68a",
        },
        StatusTier::Ended => TierStyle {
            glyph: "\u{1F535}",
            background: "#dbeafe",
            text: "#1e40af",
            border: "#93c5fd",
        },
        StatusTier::Unavailable => TierStyle {
            glyph: "\u{1F534}",
            background: "#fee2e2",
            text: "#991b1b",
            border: "#fecaca",
        },
    }
}

/// Project a classification into the render-ready payload. Pure, no I/O.
pub fn format_payload(result: &ClassificationResult) -> DisplayPayload {
    let style = tier_style(result.tier);
    DisplayPayload {
        country_name: result.country.country_name.clone(),
        tier: result.tier,
        glyph: style.glyph,
        message: result.message.clone(),
        local_time: result.local_time.clone(),
        background: style.background,
        text_color: style.text,
        border_color: style.border,
    }
}

/// The long clock line shown next to a directory search hit: weekday, date,
/// and a 12-hour time with seconds. The caller refreshes it on its own
/// timer; this is a pure render of one instant.
pub fn current_time_line(country: &CountryRecord, now: DateTime<Utc>) -> Option<String> {
    let zone = country.time_zone_in_capital.as_deref()?;
    let tz: Tz = zone.parse().ok()?;
    Some(
        now.with_timezone(&tz)
            .format("%a, %b %-d, %Y, %I:%M:%S %p")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(zone: Option<&str>) -> CountryRecord {
        CountryRecord {
            country_name: "India".to_string(),
            capital: "New Delhi".to_string(),
            iso2: "IN".to_string(),
            iso3: "IND".to_string(),
            fips: "IN".to_string(),
            top_level_domain: "in".to_string(),
            phone_code: "91".to_string(),
            time_zone_in_capital: zone.map(str::to_string),
        }
    }

    #[test]
    fn test_each_tier_has_its_fixed_style() {
        assert_eq!(tier_style(StatusTier::Available).glyph, "\u{1F7E2}");
        assert_eq!(tier_style(StatusTier::Available).background, "#d1fae5");
        assert_eq!(tier_style(StatusTier::Soon).text, "#92400e");
        assert_eq!(tier_style(StatusTier::Ended).border, "#93c5fd");
        assert_eq!(tier_style(StatusTier::Unavailable).background, "#fee2e2");
    }

    #[test]
    fn test_payload_carries_classification_and_style() {
        let result = ClassificationResult {
            tier: StatusTier::Available,
            message: "Available Now".to_string(),
            local_time: "12:00 PM".to_string(),
            country: record(Some("Asia/Kolkata")),
        };

        let payload = format_payload(&result);
        assert_eq!(payload.country_name, "India");
        assert_eq!(payload.tier, StatusTier::Available);
        assert_eq!(payload.glyph, "\u{1F7E2}");
        assert_eq!(payload.message, "Available Now");
        assert_eq!(payload.background, "#d1fae5");
        assert_eq!(payload.text_color, "#065f46");
        assert_eq!(payload.border_color, "#a7f3d0");
    }

    #[test]
    fn test_payload_serializes_for_downstream_consumers() {
        let result = ClassificationResult {
            tier: StatusTier::Soon,
            message: "Opens in 2h".to_string(),
            local_time: "08:10 AM".to_string(),
            country: record(Some("Asia/Kolkata")),
        };

        let json = serde_json::to_value(format_payload(&result)).unwrap();
        assert_eq!(json["tier"], "soon");
        assert_eq!(json["background"], "#fef3c7");
    }

    #[test]
    fn test_current_time_line() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 6, 30, 0).unwrap();
        let line = current_time_line(&record(Some("Asia/Kolkata")), now).unwrap();
        assert_eq!(line, "Thu, Jan 15, 2026, 12:00:00 PM");

        assert!(current_time_line(&record(None), now).is_none());
        assert!(current_time_line(&record(Some("Not/AZone")), now).is_none());
    }
}
