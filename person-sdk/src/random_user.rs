use crate::{
    client_utils::get_json,
    errors::{ProviderError, ProviderResult},
    provider::PersonProvider,
    telemetry,
    types::PersonRecord,
};
use reqwest::{
    header::{self, HeaderValue},
    Client,
};

pub const RANDOM_USER_API_URL: &str = "https://randomuser.me/api/";

pub struct RandomUserApi {
    pub base_url: String,
    pub seed: Option<String>,
    pub client: Client,
}

#[derive(Default)]
pub struct RandomUserApiOptions {
    pub base_url: Option<String>,
    /// Upstream seed; the same seed yields the same person on every fetch.
    pub seed: Option<String>,
}

impl RandomUserApi {
    #[must_use]
    pub fn new(options: RandomUserApiOptions) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: options
                .base_url
                .unwrap_or_else(|| RANDOM_USER_API_URL.to_string()),
            seed: options.seed,
            client: Client::builder().default_headers(headers).build().unwrap(),
        }
    }

    fn request_url(&self) -> String {
        match &self.seed {
            Some(seed) => format!("{}?seed={seed}", self.base_url),
            None => self.base_url.clone(),
        }
    }
}

#[async_trait::async_trait]
impl PersonProvider for RandomUserApi {
    fn provider(&self) -> &'static str {
        "randomuser"
    }

    async fn fetch_person(&self) -> ProviderResult<PersonRecord> {
        let url = self.request_url();

        let envelope: random_user_api::UserEnvelope =
            telemetry::trace_fetch(self.provider(), &url, get_json(&self.client, &url)).await?;

        if let Some(info) = &envelope.info {
            tracing::debug!(
                seed = info.seed.as_deref(),
                results = info.results,
                page = info.page,
                version = info.version.as_deref(),
                "random user response info"
            );
        }

        envelope.results.into_iter().next().ok_or_else(|| {
            ProviderError::Invariant("randomuser", "no results in response".to_string())
        })
    }
}

mod random_user_api {
    use crate::types::PersonRecord;
    use serde::Deserialize;

    /// Wire shape of a Random User API response.
    #[derive(Debug, Deserialize)]
    pub struct UserEnvelope {
        #[serde(default)]
        pub results: Vec<PersonRecord>,
        pub info: Option<ResponseInfo>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ResponseInfo {
        pub seed: Option<String>,
        pub results: Option<u32>,
        pub page: Option<u32>,
        pub version: Option<String>,
    }
}
