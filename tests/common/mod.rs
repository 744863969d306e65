// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

use std::sync::Arc;

use hyper::HeaderMap;
use surge_http::check::{Check, CheckFailure, CheckOrder, HttpCheck};
use surge_http::session::Session;
use surge_http::transaction::ResponseInfo;

/// A named check that always passes, used to observe resolved ordering.
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

pub fn make_response(status: u16) -> ResponseInfo {
    ResponseInfo {
        status,
        version: "HTTP/1.1".into(),
        headers: HeaderMap::new(),
        body_length: None,
        body: None,
    }
}
