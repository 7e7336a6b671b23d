use crate::{field::FieldKey, types::InteractionTarget};

/// Keys that activate a selectable item from the keyboard.
pub const ACTIVATION_KEYS: [&str; 2] = ["Enter", " "];

/// Whether a key name counts as keyboard activation.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    ACTIVATION_KEYS.contains(&key)
}

/// Resolve a renderer-provided interaction target to the field it selects.
///
/// `None` means no selectable item enclosed the raw event target. An item
/// without a label, or with a label no field matches, resolves to nothing
/// and the interaction is ignored.
#[must_use]
pub fn resolve_field(target: Option<&InteractionTarget>) -> Option<FieldKey> {
    FieldKey::parse(target?.label.as_deref()?)
}
