//! Random slowdown middleware for testing
#![allow(dead_code)] // Feature-gated middleware

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::IntoResponse;
use rand_distr::{Distribution, Normal};

/// Middleware that delays each request by a random amount, useful for
/// exercising frontend loading states against a local server.
/// Delays are drawn from a gaussian with mean 800ms and standard
/// deviation 1500ms, clamped at zero.
pub async fn slowdown_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let normal = Normal::new(800.0, 1500.0).unwrap();
    let delay_ms = 0.0f64.max(normal.sample(&mut rand::rng()));

    tokio::time::sleep(std::time::Duration::from_millis(delay_ms as u64)).await;
    next.run(request).await
}
