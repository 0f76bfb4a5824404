//! Shared constants for e2e tests.

/// How long to wait for a test server to answer its banner route.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Poll interval while waiting for readiness.
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
