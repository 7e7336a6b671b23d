use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable display category on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Location,
    Birthday,
    Email,
    Phone,
}

impl FieldKey {
    /// Every selectable field, in display order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Location,
        Self::Birthday,
        Self::Email,
        Self::Phone,
    ];

    /// Parse the wire label carried by an interaction target.
    /// Unknown labels are rejected rather than mapped to a default.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "name" => Some(Self::Name),
            "location" => Some(Self::Location),
            "birthday" => Some(Self::Birthday),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            _ => None,
        }
    }

    /// The lowercase label identifying this field on the wire.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::Birthday => "birthday",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// The title line shown above the field value.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Hi, My name is",
            Self::Location => "My address is",
            Self::Birthday => "My birthday is",
            Self::Email => "My email is",
            Self::Phone => "My phone number is",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
