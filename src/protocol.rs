// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Protocol-wide defaults shared by every request of a scenario.

use crate::check::HttpCheck;
use crate::transaction::{ExtraInfoExtractor, ResponseTransformer};
use hyper::Uri;
use serde::Deserialize;

/// Fallback configuration applied wherever a request blueprint leaves a
/// field unset.
///
/// Constructed once at scenario-definition time, then frozen behind an
/// `Arc` and read concurrently by any number of resolutions and executions.
/// Nothing here is mutable afterwards.
#[derive(Clone, Default)]
pub struct HttpProtocol {
    /// Base for relative request URLs, joined at expression-evaluation time.
    pub base_url: Option<Uri>,
    /// Checks applied to every request unless it opts out.
    pub checks: Vec<HttpCheck>,
    pub response_transformer: Option<ResponseTransformer>,
    pub max_redirects: Option<u32>,
    pub extra_info_extractor: Option<ExtraInfoExtractor>,
}

impl std::fmt::Debug for HttpProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProtocol")
            .field("base_url", &self.base_url)
            .field("checks", &self.checks.len())
            .field("response_transformer", &self.response_transformer.is_some())
            .field("max_redirects", &self.max_redirects)
            .field("extra_info_extractor", &self.extra_info_extractor.is_some())
            .finish()
    }
}

impl HttpProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, uri: Uri) -> Self {
        self.base_url = Some(uri);
        self
    }

    pub fn check(mut self, check: HttpCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn checks<I: IntoIterator<Item = HttpCheck>>(mut self, checks: I) -> Self {
        self.checks.extend(checks);
        self
    }

    pub fn transform_response(mut self, transformer: ResponseTransformer) -> Self {
        self.response_transformer = Some(transformer);
        self
    }

    pub fn max_redirects(mut self, max: u32) -> Self {
        self.max_redirects = Some(max);
        self
    }

    pub fn extra_info_extractor(mut self, extractor: ExtraInfoExtractor) -> Self {
        self.extra_info_extractor = Some(extractor);
        self
    }
}

/// Data-only protocol settings loadable from a TOML file. Code-valued
/// defaults (checks, transformers) are attached in the scenario source.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProtocolConfig {
    pub base_url: Option<String>,

    #[serde(default)]
    pub max_redirects: Option<u32>,
}

impl ProtocolConfig {
    /// Load protocol settings from a TOML file, e.g.:
    ///
    /// base_url = "https://staging.example.test"
    /// max_redirects = 5
    pub async fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let s = tokio::fs::read_to_string(path.as_ref()).await?;
        let cfg: Self = toml::from_str(&s)?;
        Ok(cfg)
    }

    /// Turn the settings into protocol defaults. An unparseable `base_url`
    /// is rejected here, at scenario-definition time, never deferred.
    pub fn into_protocol(self) -> anyhow::Result<HttpProtocol> {
        let mut protocol = HttpProtocol::new();
        if let Some(raw) = self.base_url {
            let uri: Uri = raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid base_url '{}': {}", raw, e))?;
            protocol = protocol.base_url(uri);
        }
        if let Some(max) = self.max_redirects {
            protocol = protocol.max_redirects(max);
        }
        Ok(protocol)
    }
}
