//! HTTP client layer: `ZoneHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::ZoneHttp;
pub use retry::{RetryConfig, RetryPolicy};
