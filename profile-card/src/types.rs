use crate::field::FieldKey;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of the record fetch. Exactly one record is live at a
/// time; `Failed` carries the user-facing message, never the raw error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Snapshot of what the renderer should currently show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardView {
    pub load_state: LoadState,
    /// Title line for the active field, e.g. "Hi, My name is".
    pub title: String,
    /// Display value for the active field, already formatted and with
    /// fallbacks applied.
    pub value: String,
    pub active: FieldKey,
    /// Large portrait URL, when a record with a picture is loaded.
    pub picture: Option<String>,
    /// Accessible alt text for the portrait, built from the name parts
    /// present in the record.
    pub picture_alt: Option<String>,
}

/// The selectable item a renderer resolved from a raw event target.
///
/// The renderer walks an event target to its nearest enclosing selectable
/// item and hands over that item's field label. `label` is `None` for
/// non-interactive chrome inside the selectable list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionTarget {
    pub label: Option<String>,
}

impl InteractionTarget {
    /// An item carrying a field label.
    #[must_use]
    pub fn labeled(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
        }
    }

    /// An enclosing item that carries no field label.
    #[must_use]
    pub fn chrome() -> Self {
        Self { label: None }
    }
}
