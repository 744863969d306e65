// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Shared test utilities to reduce duplication across test modules.

use crate::check::{Check, CheckFailure, CheckOrder, HttpCheck};
use crate::session::Session;
use crate::transaction::{RequestInfo, ResponseInfo};
use hyper::{HeaderMap, Method};
use std::sync::Arc;

/// A named check that always passes, used to observe ordering.
pub struct LabeledCheck {
    pub label: &'static str,
    pub classification: CheckOrder,
}

impl Check for LabeledCheck {
    fn name(&self) -> &'static str {
        self.label
    }

    fn order(&self) -> CheckOrder {
        self.classification
    }

    fn verify(&self, _response: &ResponseInfo, _session: &Session) -> Result<(), CheckFailure> {
        Ok(())
    }
}

pub fn make_check(label: &'static str, order: CheckOrder) -> HttpCheck {
    Arc::new(LabeledCheck {
        label,
        classification: order,
    })
}

pub fn check_names(checks: &[HttpCheck]) -> Vec<&'static str> {
    checks.iter().map(|c| c.name()).collect()
}

pub fn make_test_session() -> Session {
    Session::new("test-scenario")
}

pub fn make_test_request() -> RequestInfo {
    RequestInfo {
        method: Method::GET,
        uri: "https://example.test/".parse().expect("valid test uri"),
        version: "HTTP/1.1".into(),
        headers: HeaderMap::new(),
        body_length: None,
        body: None,
    }
}

pub fn make_test_response(status: u16) -> ResponseInfo {
    ResponseInfo {
        status,
        version: "HTTP/1.1".into(),
        headers: HeaderMap::new(),
        body_length: None,
        body: None,
    }
}
