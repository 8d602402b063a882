use crate::domain::model::{ClassificationResult, CountryRecord, ReferenceZone, StatusTier};
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Business window in destination local time: 10:00 up to but excluding 19:00.
const BUSINESS_START: i32 = 10;
const BUSINESS_END: i32 = 19;

/// Classify a country against an instant.
///
/// Returns `None` when the record has no timezone or its zone id does not
/// parse; conversion failures are swallowed here, never propagated. The
/// result is a pure function of `(country, now)`.
pub fn classify(country: &CountryRecord, now: DateTime<Utc>) -> Option<ClassificationResult> {
    let zone = country.time_zone_in_capital.as_deref()?;
    let tz: Tz = match zone.parse() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::debug!("unrecognized zone id '{}' for {}", zone, country.country_name);
            return None;
        }
    };

    let local = now.with_timezone(&tz);
    let hour = local.hour() as i32;
    let minute = local.minute() as f64;

    let (tier, message) = if (BUSINESS_START..BUSINESS_END).contains(&hour) {
        (StatusTier::Available, "Available Now".to_string())
    } else if (6..BUSINESS_START).contains(&hour) {
        let hours_until_start = f64::from(BUSINESS_START) - f64::from(hour) - minute / 60.0;
        (
            StatusTier::Soon,
            format!("Opens in {}h", hours_until_start.ceil() as i64),
        )
    } else if (BUSINESS_END..23).contains(&hour) {
        let hours_since_end = f64::from(hour - BUSINESS_END) + minute / 60.0;
        (
            StatusTier::Ended,
            format!("Ended {}h ago", hours_since_end.floor() as i64),
        )
    } else {
        // 23:00-05:59. The next 10:00 is past midnight only for the late
        // evening hour; after midnight it is a direct countdown.
        let hours_until_start = if hour >= BUSINESS_END {
            f64::from(24 - hour) + f64::from(BUSINESS_START) - minute / 60.0
        } else {
            f64::from(BUSINESS_START) - f64::from(hour) - minute / 60.0
        };
        (
            StatusTier::Unavailable,
            format!("Opens in {}h", hours_until_start.ceil() as i64),
        )
    };

    Some(ClassificationResult {
        tier,
        message,
        local_time: local.format("%I:%M %p").to_string(),
        country: country.clone(),
    })
}

/// Which of the three fixed reference zones is closest to the country's
/// current time of day, by circular distance (mod 24h, folded to <= 12h).
/// Ties go to the earlier entry in declaration order: India, UK, US.
pub fn closest_reference_zone(
    country: &CountryRecord,
    now: DateTime<Utc>,
) -> Option<ReferenceZone> {
    let zone = country.time_zone_in_capital.as_deref()?;
    let tz: Tz = zone.parse().ok()?;
    let country_hour = decimal_hour(&now.with_timezone(&tz));

    let mut best: Option<(ReferenceZone, f64)> = None;
    for reference in ReferenceZone::ALL {
        let ref_tz: Tz = reference.zone_id().parse().ok()?;
        let distance = circular_distance(country_hour, decimal_hour(&now.with_timezone(&ref_tz)));
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((reference, distance));
        }
    }

    best.map(|(reference, _)| reference)
}

fn decimal_hour<T: Timelike>(t: &T) -> f64 {
    f64::from(t.hour()) + f64::from(t.minute()) / 60.0
}

fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 24.0;
    if diff > 12.0 {
        24.0 - diff
    } else {
        diff
    }
}
