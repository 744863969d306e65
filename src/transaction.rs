// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Concrete request/response values exchanged with the execution layer.

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A fully-built request, the output of one deferred request-expression
/// evaluation. Execution layers serialize these when capturing traffic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RequestInfo {
    #[serde(
        serialize_with = "crate::serde_helpers::serialize_method",
        deserialize_with = "crate::serde_helpers::deserialize_method"
    )]
    pub method: Method,
    #[serde(
        serialize_with = "crate::serde_helpers::serialize_uri",
        deserialize_with = "crate::serde_helpers::deserialize_uri"
    )]
    pub uri: Uri,
    /// The HTTP-version token for the start-line, e.g. "HTTP/1.1".
    pub version: String,
    #[serde(
        serialize_with = "crate::serde_helpers::serialize_headers",
        deserialize_with = "crate::serde_helpers::deserialize_headers"
    )]
    pub headers: HeaderMap,
    /// Length in bytes of the rendered body, if one is present.
    pub body_length: Option<u64>,

    /// Rendered body bytes. Skipped during serialization; capture writers
    /// may include these when configured to do so.
    #[serde(skip)]
    pub body: Option<Bytes>,
}

/// Response portion seen by checks, transformers and extractors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseInfo {
    pub status: u16,
    /// The HTTP-version token from the status-line, e.g. "HTTP/1.1".
    pub version: String,
    #[serde(
        serialize_with = "crate::serde_helpers::serialize_headers",
        deserialize_with = "crate::serde_helpers::deserialize_headers"
    )]
    pub headers: HeaderMap,
    /// Length in bytes of the received (decoded) body, if available.
    pub body_length: Option<u64>,

    /// Received body bytes. Skipped during serialization.
    #[serde(skip)]
    pub body: Option<Bytes>,
}

/// Rewrites a response before checks run, e.g. to normalize bodies.
pub type ResponseTransformer = Arc<dyn Fn(ResponseInfo) -> ResponseInfo + Send + Sync>;

/// Derives auxiliary metadata from a completed exchange for reporting.
pub type ExtraInfoExtractor = Arc<dyn Fn(&RequestInfo, &ResponseInfo) -> Value + Send + Sync>;
