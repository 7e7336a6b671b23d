use person_sdk::PersonRecord;
use profile_card::{extract, FieldKey, DATA_NOT_FOUND, NOT_AVAILABLE};
use serde_json::json;

fn person(value: serde_json::Value) -> PersonRecord {
    serde_json::from_value(value).expect("valid person record")
}

fn full_person() -> PersonRecord {
    person(json!({
        "name": {"title": "Ms", "first": "Ada", "last": "Lovelace"},
        "location": {"street": {"number": 7744, "name": "Analytical Way"}},
        "dob": {"date": "1985-03-12T10:23:40.809Z", "age": 40},
        "email": "ada@example.com",
        "phone": "011-222-3333"
    }))
}

#[test]
fn absent_record_returns_not_found_for_every_key() {
    for field in FieldKey::ALL {
        assert_eq!(extract(field, None), DATA_NOT_FOUND);
    }
}

#[test]
fn empty_record_returns_not_found_for_every_key() {
    let record = PersonRecord::default();
    for field in FieldKey::ALL {
        assert_eq!(extract(field, Some(&record)), DATA_NOT_FOUND);
    }
}

#[test]
fn well_formed_record_yields_non_empty_strings_for_every_key() {
    let record = full_person();
    for field in FieldKey::ALL {
        let value = extract(field, Some(&record));
        assert!(!value.is_empty(), "{field} extracted to an empty string");
        assert_ne!(value, DATA_NOT_FOUND);
    }
}

#[test]
fn name_joins_first_and_last() {
    let record = full_person();
    assert_eq!(extract(FieldKey::Name, Some(&record)), "Ada Lovelace");
}

#[test]
fn name_substitutes_missing_parts_independently() {
    let record = person(json!({"name": {"first": "Ada"}}));
    assert_eq!(
        extract(FieldKey::Name, Some(&record)),
        format!("Ada {NOT_AVAILABLE}")
    );

    let record = person(json!({"name": {"last": "Lovelace"}}));
    assert_eq!(
        extract(FieldKey::Name, Some(&record)),
        format!("{NOT_AVAILABLE} Lovelace")
    );
}

#[test]
fn location_joins_street_number_and_name() {
    let record = full_person();
    assert_eq!(
        extract(FieldKey::Location, Some(&record)),
        "7744 Analytical Way"
    );
}

#[test]
fn location_missing_street_parts_degrade_independently() {
    let record = person(json!({"location": {"street": {"name": "Analytical Way"}}}));
    assert_eq!(
        extract(FieldKey::Location, Some(&record)),
        format!("{NOT_AVAILABLE} Analytical Way")
    );

    let record = person(json!({"location": {"city": "London"}}));
    assert_eq!(
        extract(FieldKey::Location, Some(&record)),
        format!("{NOT_AVAILABLE} {NOT_AVAILABLE}")
    );
}

#[test]
fn birthday_formats_in_month_day_year_order() {
    let record = person(json!({
        "name": {"first": "Ada", "last": "Lovelace"},
        "dob": {"date": "1985-03-12"},
        "email": "a@x.com"
    }));
    assert_eq!(extract(FieldKey::Birthday, Some(&record)), "3/12/1985");
    assert_eq!(extract(FieldKey::Phone, Some(&record)), NOT_AVAILABLE);
}

#[test]
fn birthday_accepts_rfc3339_timestamps() {
    let record = person(json!({"dob": {"date": "1992-07-01T10:23:40.809Z"}}));
    assert_eq!(extract(FieldKey::Birthday, Some(&record)), "7/1/1992");
}

#[test]
fn birthday_without_date_is_not_available() {
    let record = person(json!({"dob": {"age": 40}}));
    assert_eq!(extract(FieldKey::Birthday, Some(&record)), NOT_AVAILABLE);
}

#[test]
fn unparseable_birthday_is_not_available() {
    let record = person(json!({"dob": {"date": "next tuesday"}}));
    assert_eq!(extract(FieldKey::Birthday, Some(&record)), NOT_AVAILABLE);
}

#[test]
fn email_and_phone_pass_through() {
    let record = full_person();
    assert_eq!(extract(FieldKey::Email, Some(&record)), "ada@example.com");
    assert_eq!(extract(FieldKey::Phone, Some(&record)), "011-222-3333");

    let record = person(json!({"email": "a@x.com"}));
    assert_eq!(extract(FieldKey::Phone, Some(&record)), NOT_AVAILABLE);
}
