mod dispatch;
mod extract;
mod field;
mod selection;
mod session;
mod types;

pub use dispatch::{is_activation_key, resolve_field, ACTIVATION_KEYS};
pub use extract::{extract, DATA_NOT_FOUND, NOT_AVAILABLE};
pub use field::FieldKey;
pub use selection::SelectionTracker;
pub use session::{CardSession, LOAD_FAILED_MESSAGE};
pub use types::{CardView, InteractionTarget, LoadState};
