use crate::{errors::ProviderResult, types::PersonRecord};

/// The seam between consumers and any source of person records.
#[async_trait::async_trait]
pub trait PersonProvider: Send + Sync {
    /// Identifier of the provider, used in diagnostics.
    fn provider(&self) -> &'static str;

    /// Fetch one freshly generated person record.
    async fn fetch_person(&self) -> ProviderResult<PersonRecord>;
}
