//! HTTP transport module
//!
//! The transport collaborator for all endpoint managers. Retry, backoff and
//! rate limiting live here and only here; layers above never retry.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Credentials**: API key or pre-obtained OAuth bearer token

mod client;
mod credentials;
mod rate_limit;

pub use client::{BackoffType, HttpClient, HttpClientConfig, RequestConfig, DEFAULT_BASE_URL};
pub use credentials::Credentials;
pub use rate_limit::{RateLimiter, RateLimiterConfig};
