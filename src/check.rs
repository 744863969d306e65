// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Response checks and the classification that fixes their evaluation order.

use crate::session::Session;
use crate::transaction::ResponseInfo;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Evaluation-order classification of a check.
///
/// The derived `Ord` is the execution order contract: `Status` ranks first
/// so a resolved request is always status-validated before anything else
/// inspects the response. Multiple checks may share a classification; their
/// relative order is the order they were declared in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckOrder {
    Status,
    Url,
    Header,
    Body,
    Checksum,
    ResponseTime,
}

/// Represents a single check that did not hold against a response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Error)]
#[error("check '{check}' failed: {message}")]
pub struct CheckFailure {
    pub check: String,
    pub message: String,
}

/// A declared response-validation unit.
///
/// The resolution engine relies only on `order()`; `verify` is invoked by
/// the execution layer, in the order the resolved definition fixes.
pub trait Check: Send + Sync {
    fn name(&self) -> &'static str;

    fn order(&self) -> CheckOrder;

    fn verify(&self, response: &ResponseInfo, session: &Session) -> Result<(), CheckFailure>;
}

/// Shared handle to a check; definitions and protocols hold these.
pub type HttpCheck = Arc<dyn Check>;

/// Returns true if `status` is an acceptable outcome for an unchecked
/// request: any 2xx, or 304 Not Modified.
pub fn is_accepted_status(status: u16) -> bool {
    (200..=299).contains(&status) || status == 304
}

/// Canonical status check inserted when a request declares none.
pub struct DefaultStatusCheck;

impl Check for DefaultStatusCheck {
    fn name(&self) -> &'static str {
        "status_accepted"
    }

    fn order(&self) -> CheckOrder {
        CheckOrder::Status
    }

    fn verify(&self, response: &ResponseInfo, _session: &Session) -> Result<(), CheckFailure> {
        if is_accepted_status(response.status) {
            Ok(())
        } else {
            Err(CheckFailure {
                check: self.name().into(),
                message: format!("status {} is not 2xx or 304", response.status),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_test_response, make_test_session};
    use rstest::rstest;

    #[test]
    fn accepted_status_boundaries_and_neighbors() {
        assert!(!is_accepted_status(199));
        assert!(is_accepted_status(200));
        assert!(is_accepted_status(204));
        assert!(is_accepted_status(299));
        assert!(!is_accepted_status(300));
        assert!(is_accepted_status(304));
        assert!(!is_accepted_status(404));
        assert!(!is_accepted_status(500));
    }

    #[rstest]
    #[case(200, true)]
    #[case(304, true)]
    #[case(301, false)]
    #[case(403, false)]
    fn default_status_check_cases(#[case] status: u16, #[case] ok: bool) {
        let check = DefaultStatusCheck;
        let session = make_test_session();
        let result = check.verify(&make_test_response(status), &session);

        if ok {
            assert!(result.is_ok());
        } else {
            let failure = result.unwrap_err();
            assert_eq!(failure.check, "status_accepted");
            assert!(failure.message.contains(&status.to_string()));
        }
    }

    #[test]
    fn status_ranks_before_every_other_classification() {
        for order in [
            CheckOrder::Url,
            CheckOrder::Header,
            CheckOrder::Body,
            CheckOrder::Checksum,
            CheckOrder::ResponseTime,
        ] {
            assert!(CheckOrder::Status < order);
        }
    }

    #[test]
    fn classification_order_is_total() {
        let mut orders = [
            CheckOrder::ResponseTime,
            CheckOrder::Body,
            CheckOrder::Status,
            CheckOrder::Checksum,
            CheckOrder::Url,
            CheckOrder::Header,
        ];
        orders.sort();
        assert_eq!(
            orders,
            [
                CheckOrder::Status,
                CheckOrder::Url,
                CheckOrder::Header,
                CheckOrder::Body,
                CheckOrder::Checksum,
                CheckOrder::ResponseTime,
            ]
        );
    }
}
