use crate::errors::{ProviderError, ProviderResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Span wrapper for one provider fetch. Records the request target up
/// front and the outcome (status code, error detail, duration) when the
/// fetch completes. This is the observability sink for raw provider
/// errors; consumers only see the collapsed `ProviderError`.
pub struct FetchSpan {
    span: Span,
    start_time: Instant,
}

impl FetchSpan {
    pub fn new(provider: &str, url: &str) -> Self {
        let span = info_span!("person_sdk.fetch");
        span.set_attribute("http.request.method", "GET");
        span.set_attribute("url.full", url.to_string());
        span.set_attribute("person_sdk.provider.name", provider.to_string());

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_error(&mut self, error: &ProviderError) {
        if let ProviderError::Status(status, _) = error {
            self.span
                .set_attribute("http.response.status_code", i64::from(status.as_u16()));
        }
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        self.span
            .set_attribute("person_sdk.fetch.duration", self.elapsed_seconds());
    }

    fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

pub async fn trace_fetch<T, F>(provider: &str, url: &str, f: F) -> ProviderResult<T>
where
    F: std::future::Future<Output = ProviderResult<T>>,
{
    let mut span = FetchSpan::new(provider, url);
    let result = span.instrument_future(f).await;

    if let Err(error) = &result {
        span.on_error(error);
    }

    span.on_end();
    result
}
