//! # botapi-http
//!
//! HTTP transport for `botapi-core`: [`HttpRequestSender`] posts each call as JSON to
//! `{api_url}/bot{token}/{method}` and decodes the response envelope. [`HttpConfig`] loads
//! token, API URL and timeout from the environment.

mod config;
mod mask;
mod sender;

pub use config::{HttpConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use mask::mask_token;
pub use sender::{HttpRequestSender, HttpSenderError};
