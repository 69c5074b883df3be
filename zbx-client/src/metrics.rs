//! Client metrics
//!
//! OpenTelemetry instruments recorded by [`ZbxClient`](crate::ZbxClient) when
//! observability is enabled through the builder:
//!
//! - **zbx.client.requests.total**: calls by method and status (counter)
//! - **zbx.client.request.duration**: call latency in seconds (histogram)
//! - **zbx.client.errors.total**: failures by error kind (counter)
//! - **zbx.client.logins.total**: logins by selected method (counter)

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};

/// Client metrics for monitoring
pub struct ClientMetrics {
    pub requests_total: Counter<u64>,
    pub request_duration: Histogram<f64>,
    pub errors_total: Counter<u64>,
    pub logins_total: Counter<u64>,
}

impl ClientMetrics {
    /// Instruments on the global meter named `service_name`
    pub fn new(service_name: impl Into<String>) -> Self {
        // The global meter API wants a 'static name; one leak per client build.
        let name: &'static str = Box::leak(service_name.into().into_boxed_str());
        let meter = global::meter(name);
        Self::new_with_meter(&meter)
    }

    pub fn new_with_meter(meter: &Meter) -> Self {
        Self {
            requests_total: meter
                .u64_counter("zbx.client.requests.total")
                .with_description("Total number of API calls")
                .build(),
            request_duration: meter
                .f64_histogram("zbx.client.request.duration")
                .with_description("API call duration in seconds")
                .with_unit("s")
                .build(),
            errors_total: meter
                .u64_counter("zbx.client.errors.total")
                .with_description("Total number of failed API calls by error kind")
                .build(),
            logins_total: meter
                .u64_counter("zbx.client.logins.total")
                .with_description("Total number of successful logins by login method")
                .build(),
        }
    }

    /// Record one finished call
    pub fn record_request(&self, method: &str, status: &str, duration_secs: f64) {
        let attributes = &[
            KeyValue::new("method", method.to_string()),
            KeyValue::new("status", status.to_string()),
        ];
        self.requests_total.add(1, attributes);
        self.request_duration.record(duration_secs, attributes);
    }

    /// Record a failure of the given [`Error::kind`](zbx_core::Error::kind)
    pub fn record_error(&self, kind: &'static str) {
        self.errors_total.add(1, &[KeyValue::new("kind", kind)]);
    }

    /// Record a successful login
    pub fn record_login(&self, method: &'static str) {
        self.logins_total.add(1, &[KeyValue::new("method", method)]);
    }
}
