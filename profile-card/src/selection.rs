use crate::field::FieldKey;

/// Tracks which field is active on the card.
/// Exactly one field is active at any time; selecting a field deactivates
/// every other one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTracker {
    active: FieldKey,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self {
            active: FieldKey::Name,
        }
    }
}

impl SelectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `field` the active selection.
    /// Re-selecting the already-active field leaves the state unchanged.
    pub fn select(&mut self, field: FieldKey) {
        self.active = field;
    }

    /// Select by wire label. Unknown labels leave the selection untouched
    /// and report `false`.
    pub fn select_label(&mut self, label: &str) -> bool {
        match FieldKey::parse(label) {
            Some(field) => {
                self.select(field);
                true
            }
            None => false,
        }
    }

    /// Restore the default selection used whenever a new record loads.
    pub fn reset(&mut self) {
        self.active = FieldKey::Name;
    }

    #[must_use]
    pub fn current(&self) -> FieldKey {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, field: FieldKey) -> bool {
        self.active == field
    }
}
