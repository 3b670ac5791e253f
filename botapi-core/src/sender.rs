//! Transport seam: the leaf that performs the actual network call.
//!
//! [`RequestSender`] is transport-agnostic; the HTTP implementation lives in `botapi-http`.
//! Tests substitute a recording implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::params::ParameterBag;
use crate::response::ResponseEnvelope;

/// Performs one API call. Returns the decoded envelope, or [`crate::BotApiError::Transport`]
/// if the exchange could not be completed.
#[async_trait]
pub trait RequestSender: Send + Sync {
    async fn send(&self, method: &str, params: &ParameterBag) -> Result<ResponseEnvelope>;
}

#[async_trait]
impl<S> RequestSender for Arc<S>
where
    S: RequestSender + ?Sized,
{
    async fn send(&self, method: &str, params: &ParameterBag) -> Result<ResponseEnvelope> {
        (**self).send(method, params).await
    }
}
