use crate::field::FieldKey;
use chrono::{DateTime, NaiveDate};
use person_sdk::PersonRecord;

/// Sentinel shown when no record is loaded at all.
pub const DATA_NOT_FOUND: &str = "Data not found";

/// Sentinel substituted for an individual missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Extract the display string for a field from the current record.
///
/// Total over its inputs: an absent or empty record yields the not-found
/// sentinel for every key, and missing sub-fields degrade to `N/A`
/// independently, so a partial record still produces partial output.
#[must_use]
pub fn extract(field: FieldKey, record: Option<&PersonRecord>) -> String {
    let Some(record) = record.filter(|record| !record.is_empty()) else {
        return DATA_NOT_FOUND.to_string();
    };

    match field {
        FieldKey::Name => {
            let name = record.name.as_ref();
            format!(
                "{} {}",
                or_not_available(name.and_then(|name| name.first.as_deref())),
                or_not_available(name.and_then(|name| name.last.as_deref())),
            )
        }
        FieldKey::Location => {
            let street = record
                .location
                .as_ref()
                .and_then(|location| location.street.as_ref());
            let number = street.and_then(|street| street.number).map_or_else(
                || NOT_AVAILABLE.to_string(),
                |number| number.to_string(),
            );
            format!(
                "{number} {}",
                or_not_available(street.and_then(|street| street.name.as_deref())),
            )
        }
        FieldKey::Birthday => record
            .dob
            .as_ref()
            .and_then(|dob| dob.date.as_deref())
            .and_then(format_birthday)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        FieldKey::Email => or_not_available(record.email.as_deref()).to_string(),
        FieldKey::Phone => or_not_available(record.phone.as_deref()).to_string(),
    }
}

fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Format a date of birth in en-US month/day/year order, e.g. `3/12/1985`.
/// The Random User API sends RFC 3339 timestamps; bare dates are accepted
/// too. Unparseable input yields `None`.
fn format_birthday(date: &str) -> Option<String> {
    let day = DateTime::parse_from_rfc3339(date)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .ok()?;
    Some(day.format("%-m/%-d/%Y").to_string())
}
