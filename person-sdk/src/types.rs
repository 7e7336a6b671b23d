use serde::{Deserialize, Serialize};

/// One randomly generated person. Every field is optional: providers may
/// omit any part of the record and a partial record is still displayable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: Option<PersonName>,
    pub picture: Option<Picture>,
    pub location: Option<Location>,
    pub dob: Option<Dob>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cell: Option<String>,
}

impl PersonRecord {
    /// Whether every field of the record is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.picture.is_none()
            && self.location.is_none()
            && self.dob.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.cell.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonName {
    pub title: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Portrait URLs in the sizes the provider renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Picture {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub street: Option<Street>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Street {
    pub number: Option<u32>,
    pub name: Option<String>,
}

/// Date of birth. `date` is the provider's timestamp string (RFC 3339 for
/// the Random User API); parsing is left to the consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dob {
    pub date: Option<String>,
    pub age: Option<u32>,
}
