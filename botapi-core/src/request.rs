//! Generic request builder and dispatch.
//!
//! [`Request<T>`] accumulates parameters and is consumed by [`Request::send`], which calls the
//! [`RequestSender`] and deserializes the payload into `T`. Endpoint builders wrap a `Request`
//! and implement [`ApiRequest`] to keep their own type through `add` chains.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{BotApiError, Result};
use crate::params::ParameterBag;
use crate::sender::RequestSender;
use crate::target::Target;

/// Target method name plus the name of the type its result decodes into. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: &'static str,
    result_type: &'static str,
}

impl RequestDescriptor {
    pub fn of<T>(method: &'static str) -> Self {
        Self {
            method,
            result_type: std::any::type_name::<T>(),
        }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn result_type(&self) -> &'static str {
        self.result_type
    }
}

/// Single-shot builder for one API call returning `T`.
pub struct Request<T> {
    sender: Arc<dyn RequestSender>,
    descriptor: RequestDescriptor,
    params: ParameterBag,
    /// First error raised while building; reported by `send` before any network call.
    error: Option<BotApiError>,
    _result: PhantomData<fn() -> T>,
}

impl<T> Request<T>
where
    T: DeserializeOwned,
{
    /// A request not addressed to any chat (e.g. `getMe`).
    pub fn new(sender: Arc<dyn RequestSender>, method: &'static str) -> Self {
        Self {
            sender,
            descriptor: RequestDescriptor::of::<T>(method),
            params: ParameterBag::new(),
            error: None,
            _result: PhantomData,
        }
    }

    /// A request whose bag is seeded with `chat_id` or `inline_message_id`.
    pub fn with_target(
        sender: Arc<dyn RequestSender>,
        method: &'static str,
        target: Target,
    ) -> Self {
        let mut request = Self::new(sender, method);
        if let Err(e) = target.seed(&mut request.params) {
            request.error = Some(e);
        }
        request
    }

    /// Sets `key` to `value` and returns the builder. `None` values remove the key.
    pub fn add<V>(mut self, key: &str, value: V) -> Self
    where
        V: Serialize,
    {
        self.insert(key, value);
        self
    }

    /// In-place form of [`Request::add`].
    pub fn insert<V>(&mut self, key: &str, value: V)
    where
        V: Serialize,
    {
        if let Err(e) = self.params.insert(key, value) {
            self.error.get_or_insert(e);
        }
    }

    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    pub fn method(&self) -> &'static str {
        self.descriptor.method
    }

    pub fn params(&self) -> &ParameterBag {
        &self.params
    }

    /// Dispatches the call. Consumes the builder.
    pub async fn send(self) -> Result<T> {
        let Request {
            sender,
            descriptor,
            params,
            error,
            ..
        } = self;

        if let Some(err) = error {
            tracing::warn!(method = descriptor.method, error = %err, "request not sent");
            return Err(err);
        }

        tracing::debug!(
            method = descriptor.method,
            result_type = descriptor.result_type,
            param_count = params.len(),
            "dispatching request"
        );

        let envelope = sender.send(descriptor.method, &params).await?;
        let payload = envelope.into_result().inspect_err(|e| {
            if let BotApiError::Api {
                code, description, ..
            } = e
            {
                tracing::warn!(
                    method = descriptor.method,
                    code = *code,
                    description = %description,
                    "API rejected request"
                );
            }
        })?;

        let result = serde_json::from_value(payload).inspect_err(|e| {
            tracing::warn!(
                method = descriptor.method,
                result_type = descriptor.result_type,
                error = %e,
                "cannot decode result"
            );
        })?;
        Ok(result)
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("descriptor", &self.descriptor)
            .field("params", &self.params)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Endpoint builder backed by a [`Request`]. Provides chaining `add` and dispatch for the
/// wrapper type.
pub trait ApiRequest: Sized {
    type Output: DeserializeOwned + Send + 'static;

    fn request(&self) -> &Request<Self::Output>;

    fn request_mut(&mut self) -> &mut Request<Self::Output>;

    fn into_request(self) -> Request<Self::Output>;

    /// Sets a raw wire parameter, for fields without a typed setter.
    fn add<V>(mut self, key: &str, value: V) -> Self
    where
        V: Serialize,
    {
        self.request_mut().insert(key, value);
        self
    }

    fn params(&self) -> &ParameterBag {
        self.request().params()
    }

    fn method(&self) -> &'static str {
        self.request().method()
    }

    fn send(self) -> BoxFuture<'static, Result<Self::Output>> {
        self.into_request().send().boxed()
    }
}

impl<T> ApiRequest for Request<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = T;

    fn request(&self) -> &Request<T> {
        self
    }

    fn request_mut(&mut self) -> &mut Request<T> {
        self
    }

    fn into_request(self) -> Request<T> {
        self
    }
}
