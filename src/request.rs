// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Request blueprints: identity, per-request overrides, and the fluent
//! builder that accumulates them before resolution.

use crate::body::{Body, BodyPart};
use crate::check::HttpCheck;
use crate::expression::{constant, BuildError, Expression};
use crate::protocol::HttpProtocol;
use crate::transaction::{ExtraInfoExtractor, RequestInfo, ResponseTransformer};
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri};
use std::sync::Arc;

/// Identity of one request blueprint: its reported name, HTTP method, and
/// the symbolic URL resolved per execution.
#[derive(Clone)]
pub struct CommonAttributes {
    pub name: String,
    pub method: Method,
    pub url: Expression<String>,
}

/// Every per-request override an author may declare. Absent fields fall
/// back to protocol defaults at resolution time.
///
/// Values of this type are never mutated once a builder hands them on;
/// builder mutators consume the whole value and return a fresh one.
#[derive(Clone, Default)]
pub struct HttpAttributes {
    pub checks: Vec<HttpCheck>,
    pub ignore_default_checks: bool,
    pub headers: HeaderMap,
    pub response_transformer: Option<ResponseTransformer>,
    pub max_redirects: Option<u32>,
    pub explicit_resources: Vec<HttpRequestBuilder>,
    pub body: Option<Body>,
    pub body_parts: Vec<BodyPart>,
    pub extra_info_extractor: Option<ExtraInfoExtractor>,
}

/// Fluent, value-semantics builder over [`HttpAttributes`].
///
/// Each mutator takes the builder by value and returns the updated one, so
/// a clone taken before a mutation is never affected by it. Builders exist
/// only during single-threaded scenario authoring; execution sees only the
/// resolved definitions.
#[derive(Clone)]
pub struct HttpRequestBuilder {
    pub common: CommonAttributes,
    pub attributes: HttpAttributes,
}

impl HttpRequestBuilder {
    pub fn new<S: Into<String>>(name: S, method: Method, url: Expression<String>) -> Self {
        Self {
            common: CommonAttributes {
                name: name.into(),
                method,
                url,
            },
            attributes: HttpAttributes::default(),
        }
    }

    pub fn get<S: Into<String>, U: Into<String>>(name: S, url: U) -> Self {
        Self::new(name, Method::GET, constant(url.into()))
    }

    pub fn post<S: Into<String>, U: Into<String>>(name: S, url: U) -> Self {
        Self::new(name, Method::POST, constant(url.into()))
    }

    pub fn put<S: Into<String>, U: Into<String>>(name: S, url: U) -> Self {
        Self::new(name, Method::PUT, constant(url.into()))
    }

    pub fn delete<S: Into<String>, U: Into<String>>(name: S, url: U) -> Self {
        Self::new(name, Method::DELETE, constant(url.into()))
    }

    pub fn head<S: Into<String>, U: Into<String>>(name: S, url: U) -> Self {
        Self::new(name, Method::HEAD, constant(url.into()))
    }

    /// Append one check after those already declared.
    pub fn check(mut self, check: HttpCheck) -> Self {
        self.attributes.checks.push(check);
        self
    }

    /// Append several checks, preserving both prior and given order.
    pub fn checks<I: IntoIterator<Item = HttpCheck>>(mut self, checks: I) -> Self {
        self.attributes.checks.extend(checks);
        self
    }

    /// Exclude protocol-level checks from this request. Idempotent.
    pub fn ignore_default_checks(mut self) -> Self {
        self.attributes.ignore_default_checks = true;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.attributes.headers.append(name, value);
        self
    }

    pub fn transform_response(mut self, transformer: ResponseTransformer) -> Self {
        self.attributes.response_transformer = Some(transformer);
        self
    }

    pub fn extra_info_extractor(mut self, extractor: ExtraInfoExtractor) -> Self {
        self.attributes.extra_info_extractor = Some(extractor);
        self
    }

    pub fn max_redirects(mut self, max: u32) -> Self {
        self.attributes.max_redirects = Some(max);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.attributes.body = Some(body);
        self
    }

    /// Rewrite the body through `f` when one is present; a builder without
    /// a body passes through unchanged.
    pub fn map_body<F: FnOnce(Body) -> Body>(mut self, f: F) -> Self {
        self.attributes.body = self.attributes.body.take().map(f);
        self
    }

    /// Append one multipart segment; segments keep declaration order.
    pub fn body_part(mut self, part: BodyPart) -> Self {
        self.attributes.body_parts.push(part);
        self
    }

    /// Replace the declared sub-resources wholesale.
    pub fn resources<I: IntoIterator<Item = HttpRequestBuilder>>(mut self, resources: I) -> Self {
        self.attributes.explicit_resources = resources.into_iter().collect();
        self
    }
}

/// Assemble the deferred request-construction expression for one blueprint.
///
/// The returned expression is pure over the session it is given: it
/// evaluates the URL, joins relative URLs against the protocol base, stamps
/// declared headers and renders the body. Any failure surfaces as a
/// [`BuildError`] for the executor to report.
pub(crate) fn request_expression(
    common: &CommonAttributes,
    attributes: &HttpAttributes,
    protocol: &Arc<HttpProtocol>,
) -> Expression<RequestInfo> {
    let url = Arc::clone(&common.url);
    let method = common.method.clone();
    let headers = attributes.headers.clone();
    let body = attributes.body.clone();
    let protocol = Arc::clone(protocol);

    Arc::new(move |session| {
        let raw = url(session)?;
        let uri = join_url(protocol.base_url.as_ref(), &raw)?;
        let body_bytes = match &body {
            Some(body) => Some(body.render(session)?),
            None => None,
        };
        Ok(RequestInfo {
            method: method.clone(),
            uri,
            version: "HTTP/1.1".into(),
            headers: headers.clone(),
            body_length: body_bytes.as_ref().map(|b| b.len() as u64),
            body: body_bytes,
        })
    })
}

/// Join a raw URL against the protocol base. Absolute URLs pass through;
/// relative ones require a base.
fn join_url(base: Option<&Uri>, raw: &str) -> Result<Uri, BuildError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.parse::<Uri>().map_err(|e| BuildError::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        });
    }

    let base = base.ok_or_else(|| BuildError::InvalidUrl {
        url: raw.to_string(),
        reason: "relative URL with no protocol base_url".to_string(),
    })?;

    let joined = if raw.starts_with('/') {
        format!("{}{}", base.to_string().trim_end_matches('/'), raw)
    } else {
        format!("{}/{}", base.to_string().trim_end_matches('/'), raw)
    };
    joined.parse::<Uri>().map_err(|e| BuildError::InvalidUrl {
        url: joined,
        reason: e.to_string(),
    })
}
