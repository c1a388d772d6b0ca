use std::collections::BTreeMap;

use lambda_http::{http::StatusCode, Body, Response};
use serde::Serialize;

use crate::error::HandlerError;

/// Response value built by a handler and handed back to the runtime.
///
/// The runtime owns the wire encoding; see `tests/integration_test.rs` for
/// the proxy payload a reply turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub body: String,
    pub headers: BTreeMap<String, String>,
    pub status_code: u16,
}

impl Reply {
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            headers: BTreeMap::new(),
            status_code,
        }
    }

    /// Serializes `payload` compactly and tags the reply as JSON.
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> Result<Self, HandlerError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| HandlerError::failed(format!("unserializable body: {e}")))?;

        Ok(Self::text(status_code, body).with_header("Content-Type", "application/json"))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl TryFrom<Reply> for Response<Body> {
    type Error = HandlerError;

    fn try_from(reply: Reply) -> Result<Self, Self::Error> {
        let status = StatusCode::from_u16(reply.status_code).map_err(|_| {
            HandlerError::failed(format!("invalid status code {}", reply.status_code))
        })?;

        let mut builder = Response::builder().status(status);
        for (name, value) in &reply.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body(Body::Text(reply.body))
            .map_err(|e| HandlerError::failed(format!("invalid response: {e}")))
    }
}
