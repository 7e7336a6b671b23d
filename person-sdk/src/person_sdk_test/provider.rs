use std::{collections::VecDeque, sync::Mutex};

use crate::{
    errors::{ProviderError, ProviderResult},
    provider::PersonProvider,
    types::PersonRecord,
};

/// Result for a mocked `fetch_person` call.
/// It can either be a record or an error to return.
pub enum MockFetchResult {
    Record(PersonRecord),
    Error(ProviderError),
}

impl MockFetchResult {
    /// Construct a result that yields the provided record.
    #[must_use]
    pub fn record(record: PersonRecord) -> Self {
        Self::Record(record)
    }

    /// Construct a result that yields the provided error.
    #[must_use]
    pub fn error(error: ProviderError) -> Self {
        Self::Error(error)
    }
}

impl From<PersonRecord> for MockFetchResult {
    fn from(record: PersonRecord) -> Self {
        Self::record(record)
    }
}

impl From<ProviderResult<PersonRecord>> for MockFetchResult {
    fn from(result: ProviderResult<PersonRecord>) -> Self {
        match result {
            Ok(record) => Self::Record(record),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockPersonProviderState {
    mocked_fetch_results: VecDeque<MockFetchResult>,
    fetch_calls: usize,
}

impl MockPersonProviderState {
    fn enqueue_fetch_result(&mut self, result: MockFetchResult) {
        self.mocked_fetch_results.push_back(result);
    }

    fn reset(&mut self) {
        self.fetch_calls = 0;
    }

    fn restore(&mut self) {
        self.mocked_fetch_results.clear();
        self.reset();
    }
}

/// A mock person provider for testing that counts calls and yields
/// predefined outputs.
pub struct MockPersonProvider {
    provider: &'static str,
    state: Mutex<MockPersonProviderState>,
}

impl Default for MockPersonProvider {
    fn default() -> Self {
        Self {
            provider: "mock",
            state: Mutex::new(MockPersonProviderState::default()),
        }
    }
}

impl MockPersonProvider {
    /// Construct a new mock person provider instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the provider identifier returned by the mock.
    pub fn set_provider(&mut self, provider: &'static str) {
        self.provider = provider;
    }

    /// Enqueue one or more mocked fetch results.
    pub fn enqueue_fetch_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockFetchResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        for result in results {
            state.enqueue_fetch_result(result);
        }
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked fetch result.
    pub fn enqueue_fetch<R>(&self, result: R) -> &Self
    where
        R: Into<MockFetchResult>,
    {
        self.enqueue_fetch_results(std::iter::once(result.into()))
    }

    /// Number of `fetch_person` calls seen so far.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.fetch_calls
    }

    /// Reset the call counter without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both the call counter and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl PersonProvider for MockPersonProvider {
    fn provider(&self) -> &'static str {
        self.provider
    }

    async fn fetch_person(&self) -> ProviderResult<PersonRecord> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.fetch_calls += 1;

        let result = state.mocked_fetch_results.pop_front().ok_or_else(|| {
            ProviderError::Invariant(self.provider, "no mocked fetch results available".to_string())
        })?;

        match result {
            MockFetchResult::Record(record) => Ok(record),
            MockFetchResult::Error(error) => Err(error),
        }
    }
}
