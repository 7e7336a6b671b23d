use crate::{
    dispatch,
    extract::extract,
    field::FieldKey,
    selection::SelectionTracker,
    types::{CardView, InteractionTarget, LoadState},
};
use futures::lock::Mutex;
use person_sdk::{PersonProvider, PersonRecord};
use std::sync::Arc;

/// User-facing message shown when a fetch fails.
/// The raw provider error only goes to the tracing sink.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load user data. Check your connection and try again.";

/// Manages one profile card: the fetch lifecycle, the currently loaded
/// record, and the active field selection.
/// The session can be shared across tasks and reused for any number of
/// fetches; interactions arriving while a fetch is pending are answered
/// from the previous record.
pub struct CardSession {
    provider: Arc<dyn PersonProvider>,
    state: Mutex<CardState>,
}

struct CardState {
    load: LoadState,
    record: Option<PersonRecord>,
    selection: SelectionTracker,
    in_flight: bool,
}

impl CardSession {
    #[must_use]
    pub fn new(provider: Arc<dyn PersonProvider>) -> Self {
        Self {
            provider,
            state: Mutex::new(CardState {
                load: LoadState::Idle,
                record: None,
                selection: SelectionTracker::new(),
                in_flight: false,
            }),
        }
    }

    /// Fetch a new record from the provider and return the resulting state.
    ///
    /// At most one request is in flight at a time: a call made while a
    /// fetch is pending is dropped without a transition. The in-flight
    /// guard is cleared after completion on every exit path, so a later
    /// request is always possible, even after a failure. The previous
    /// record survives a failed fetch; a successful fetch replaces it
    /// wholesale and resets the selection to the name field.
    pub async fn request_new_record(&self) -> LoadState {
        {
            let mut state = self.state.lock().await;
            if state.in_flight {
                tracing::debug!(
                    provider = self.provider.provider(),
                    "fetch already in flight, dropping request"
                );
                return state.load.clone();
            }
            state.in_flight = true;
            state.load = LoadState::Loading;
        }

        let result = self.provider.fetch_person().await;

        let mut state = self.state.lock().await;
        match result {
            Ok(record) => {
                state.record = Some(record);
                state.selection.reset();
                state.load = LoadState::Loaded;
            }
            Err(error) => {
                tracing::error!(
                    provider = self.provider.provider(),
                    %error,
                    "failed to fetch person record"
                );
                state.load = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        state.in_flight = false;
        state.load.clone()
    }

    /// Pointer hover over the selectable list.
    /// Targets that resolve to no field are ignored without a transition.
    pub async fn on_hover(&self, target: Option<&InteractionTarget>) {
        if let Some(field) = dispatch::resolve_field(target) {
            self.state.lock().await.selection.select(field);
        }
    }

    /// Keyboard activation on the selectable list.
    /// Returns whether the key's default action should be suppressed,
    /// which is only the case when an activation key lands on a valid
    /// selectable item.
    pub async fn on_activate_key(&self, target: Option<&InteractionTarget>, key: &str) -> bool {
        if !dispatch::is_activation_key(key) {
            return false;
        }
        let Some(field) = dispatch::resolve_field(target) else {
            return false;
        };
        self.state.lock().await.selection.select(field);
        true
    }

    pub async fn load_state(&self) -> LoadState {
        self.state.lock().await.load.clone()
    }

    pub async fn active_field(&self) -> FieldKey {
        self.state.lock().await.selection.current()
    }

    /// Snapshot what the renderer should currently show, derived from the
    /// active selection and the current record (or the not-found sentinel
    /// before the first load).
    pub async fn view(&self) -> CardView {
        let state = self.state.lock().await;
        let active = state.selection.current();
        let record = state.record.as_ref();

        CardView {
            load_state: state.load.clone(),
            title: active.title().to_string(),
            value: extract(active, record),
            active,
            picture: record
                .and_then(|record| record.picture.as_ref())
                .and_then(|picture| picture.large.clone()),
            picture_alt: record.and_then(picture_alt),
        }
    }
}

/// Alt text for the portrait: the name parts that are present, followed by
/// "profile picture". A record without any name part gets no alt text.
fn picture_alt(record: &PersonRecord) -> Option<String> {
    let name = record.name.as_ref()?;
    let parts: Vec<&str> = [
        name.title.as_deref(),
        name.first.as_deref(),
        name.last.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        return None;
    }
    Some(format!("{} profile picture", parts.join(" ")))
}
