//! Request spans for the PawConnect API.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// One `INFO` span per request, closed with the status and latency in ms.
///
/// The span records the method and the path only. Search text (`?q=`) and
/// the bearer token stay out of the logs; handlers log what they need
/// inside the span.
///
/// ```text
/// INFO request{method=PUT path=/api/location/district}: finished processing request latency=2 ms status=200
/// INFO request{method=POST path=/api/onboarding}: Onboarding completed account=u1 role="봉사자"
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = request.uri().path(),
    )
}
