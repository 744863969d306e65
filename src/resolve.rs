// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Resolution of request blueprints against protocol defaults.

use crate::body::BodyPart;
use crate::check::{CheckOrder, DefaultStatusCheck, HttpCheck};
use crate::expression::Expression;
use crate::protocol::HttpProtocol;
use crate::request::{request_expression, HttpRequestBuilder};
use crate::transaction::{ExtraInfoExtractor, RequestInfo, ResponseTransformer};
use hyper::Method;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Upper bound on nested sub-resource declarations. Blueprints never nest
/// this deep in practice; hitting the bound means a self-referential or
/// runaway declaration.
pub const MAX_RESOURCE_DEPTH: usize = 8;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("resource nesting under request '{request}' exceeds {depth} levels")]
    ResourceNestingTooDeep { request: String, depth: usize },
}

/// A fully-resolved, immutable request definition, ready for an executor.
///
/// Definitions are produced once per blueprint at scenario-compile time and
/// then shared read-only by every concurrent execution; only the deferred
/// `request` expression is evaluated per execution.
#[derive(Clone)]
pub struct HttpRequestDef {
    pub name: String,
    /// Deferred request construction, evaluated once per execution against
    /// that execution's session.
    pub request: Expression<RequestInfo>,
    /// Final check sequence: exactly one status-classified check, sorted by
    /// classification, declaration order preserved within one class.
    pub checks: Vec<HttpCheck>,
    pub response_transformer: Option<ResponseTransformer>,
    pub max_redirects: Option<u32>,
    pub extra_info_extractor: Option<ExtraInfoExtractor>,
    /// Multipart segments in declaration order.
    pub body_parts: Vec<BodyPart>,
    pub throttled: bool,
    pub protocol: Arc<HttpProtocol>,
    /// Already-resolved sub-resources, retrieval requests only.
    pub resources: Vec<HttpRequestDef>,
}

impl std::fmt::Debug for HttpRequestDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequestDef")
            .field("name", &self.name)
            .field("checks", &self.checks.len())
            .field("response_transformer", &self.response_transformer.is_some())
            .field("max_redirects", &self.max_redirects)
            .field("extra_info_extractor", &self.extra_info_extractor.is_some())
            .field("body_parts", &self.body_parts.len())
            .field("throttled", &self.throttled)
            .field("resources", &self.resources)
            .finish()
    }
}

impl HttpRequestBuilder {
    /// Merge this blueprint with protocol defaults into a request
    /// definition.
    ///
    /// The only failure is a resource tree nested past
    /// [`MAX_RESOURCE_DEPTH`]; everything else about resolution is total.
    pub fn build(
        &self,
        protocol: &Arc<HttpProtocol>,
        throttled: bool,
    ) -> Result<HttpRequestDef, ResolveError> {
        self.resolve_at_depth(protocol, throttled, 0)
    }

    fn resolve_at_depth(
        &self,
        protocol: &Arc<HttpProtocol>,
        throttled: bool,
        depth: usize,
    ) -> Result<HttpRequestDef, ResolveError> {
        if depth > MAX_RESOURCE_DEPTH {
            return Err(ResolveError::ResourceNestingTooDeep {
                request: self.common.name.clone(),
                depth,
            });
        }
        let attrs = &self.attributes;

        // Protocol checks run ahead of request checks unless suppressed.
        let mut checks: Vec<HttpCheck> = if attrs.ignore_default_checks {
            attrs.checks.clone()
        } else {
            protocol
                .checks
                .iter()
                .chain(attrs.checks.iter())
                .cloned()
                .collect()
        };

        // Every request is status-validated; an author-declared status
        // check takes the place of the canonical one.
        if !checks.iter().any(|c| c.order() == CheckOrder::Status) {
            debug!(request = %self.common.name, "no status check declared, inserting default");
            checks.insert(0, Arc::new(DefaultStatusCheck));
        }

        // Stable sort: declaration order survives within a classification.
        checks.sort_by_key(|c| c.order());

        let response_transformer = attrs
            .response_transformer
            .clone()
            .or_else(|| protocol.response_transformer.clone());
        let max_redirects = attrs.max_redirects.or(protocol.max_redirects);
        let extra_info_extractor = attrs
            .extra_info_extractor
            .clone()
            .or_else(|| protocol.extra_info_extractor.clone());

        // Only safe retrieval requests are auto-fetched as side resources.
        let mut resources = Vec::new();
        for resource in &attrs.explicit_resources {
            if resource.common.method != Method::GET {
                debug!(
                    request = %self.common.name,
                    resource = %resource.common.name,
                    method = %resource.common.method,
                    "dropping non-retrieval resource"
                );
                continue;
            }
            resources.push(resource.resolve_at_depth(protocol, throttled, depth + 1)?);
        }

        Ok(HttpRequestDef {
            name: self.common.name.clone(),
            request: request_expression(&self.common, attrs, protocol),
            checks,
            response_transformer,
            max_redirects,
            extra_info_extractor,
            body_parts: attrs.body_parts.clone(),
            throttled,
            protocol: Arc::clone(protocol),
            resources,
        })
    }
}
