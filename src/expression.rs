// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Deferred, session-dependent expressions and their failure channel.

use crate::session::Session;
use std::sync::Arc;
use thiserror::Error;

/// A value computed lazily against one session, once per execution.
///
/// Expressions are shared immutably (`Arc`) between a blueprint, its
/// resolved definition, and every concurrent execution evaluating it.
pub type Expression<T> = Arc<dyn Fn(&Session) -> Result<T, BuildError> + Send + Sync>;

/// Failure raised while turning a symbolic request part into a concrete
/// value. Returned, never thrown; the executor reports it as a failed
/// execution and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("session attribute '{key}' is not set")]
    MissingAttribute { key: String },

    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to render request part: {0}")]
    Render(String),
}

/// Expression that ignores the session and yields a clone of `value`.
pub fn constant<T>(value: T) -> Expression<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(move |_session| Ok(value.clone()))
}

/// Wrap a closure over session state as an expression.
pub fn from_fn<T, F>(f: F) -> Expression<T>
where
    F: Fn(&Session) -> Result<T, BuildError> + Send + Sync + 'static,
{
    Arc::new(f)
}
