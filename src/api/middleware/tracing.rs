//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// Each request gets an `INFO` span carrying method, URI and HTTP version.
/// Responses are logged at `INFO` with status code and latency in
/// milliseconds, so expired-link 404s and redirects show up side by side.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/urls version=HTTP/1.1}: started processing request
/// INFO request{method=POST uri=/urls version=HTTP/1.1}: finished processing request latency=3 ms status=201
/// INFO request{method=GET uri=/u/aB3xY9 version=HTTP/1.1}: finished processing request latency=1 ms status=302
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = api::routes::routes()
///     .with_state(state)
///     .layer(tracing::layer());
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
