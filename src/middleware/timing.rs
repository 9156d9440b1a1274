use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

static RESPONSE_TIME_US: HeaderName = HeaderName::from_static("x-response-time-us");
static SERVER_TIMING: HeaderName = HeaderName::from_static("server-timing");

/// Stamps every response with how long the inner service took
/// (`x-response-time-us` and `server-timing: total;dur=<ms>`) and emits
/// one `request` event carrying method, path, status and latency.
pub async fn timing_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let started = Instant::now();
    let mut response = next.run(req).await;
    let elapsed = started.elapsed();
    let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

    let headers = response.headers_mut();
    headers.insert(RESPONSE_TIME_US.clone(), HeaderValue::from(elapsed_us));
    if let Ok(value) = HeaderValue::from_str(&format!(
        "total;dur={:.3}",
        elapsed.as_secs_f64() * 1000.0
    )) {
        headers.insert(SERVER_TIMING.clone(), value);
    }

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_us,
        "request"
    );

    response
}
