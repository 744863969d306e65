// SPDX-FileCopyrightText: 2026 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Request body content and multipart segments.

use crate::expression::{constant, BuildError, Expression};
use crate::session::Session;
use bytes::Bytes;

/// Body content for one request, rendered per execution.
#[derive(Clone)]
pub enum Body {
    /// Textual body computed against session state.
    Text(Expression<String>),
    /// Fixed binary payload, shared as-is by every execution.
    Raw(Bytes),
}

impl Body {
    /// Fixed textual body.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Body::Text(constant(text.into()))
    }

    /// Textual body computed from session state.
    pub fn expr(expression: Expression<String>) -> Self {
        Body::Text(expression)
    }

    pub fn raw<B: Into<Bytes>>(bytes: B) -> Self {
        Body::Raw(bytes.into())
    }

    /// Render the body against one session's state.
    pub fn render(&self, session: &Session) -> Result<Bytes, BuildError> {
        match self {
            Body::Text(expression) => expression(session).map(Bytes::from),
            Body::Raw(bytes) => Ok(bytes.clone()),
        }
    }
}

/// One segment of a multipart request body. Segments keep the order they
/// were declared in.
#[derive(Clone)]
pub struct BodyPart {
    pub name: String,
    pub body: Body,
    pub content_type: Option<String>,
    pub filename: Option<String>,
}

impl BodyPart {
    pub fn new<S: Into<String>>(name: S, body: Body) -> Self {
        Self {
            name: name.into(),
            body,
            content_type: None,
            filename: None,
        }
    }

    pub fn content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn filename<S: Into<String>>(mut self, filename: S) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::from_fn;
    use crate::test_helpers::make_test_session;

    #[test]
    fn text_body_renders_constant() {
        let body = Body::text("hello");
        let session = make_test_session();
        assert_eq!(body.render(&session).unwrap(), Bytes::from_static(b"hello"));
    }

    #[test]
    fn expr_body_reads_session() {
        let body = Body::expr(from_fn(|session: &Session| {
            Ok(format!("{{\"user\":\"{}\"}}", session.required_str("user")?))
        }));

        let mut session = make_test_session();
        session.set("user", "ada");
        assert_eq!(
            body.render(&session).unwrap(),
            Bytes::from_static(b"{\"user\":\"ada\"}")
        );

        let empty = make_test_session();
        assert!(body.render(&empty).is_err());
    }

    #[test]
    fn raw_body_is_shared_unchanged() {
        let payload = Bytes::from_static(&[0x1f, 0x8b, 0x00]);
        let body = Body::raw(payload.clone());
        let session = make_test_session();
        assert_eq!(body.render(&session).unwrap(), payload);
    }

    #[test]
    fn body_part_builder_sets_optional_fields() {
        let part = BodyPart::new("avatar", Body::raw(Bytes::from_static(b"img")))
            .content_type("image/png")
            .filename("avatar.png");

        assert_eq!(part.name, "avatar");
        assert_eq!(part.content_type.as_deref(), Some("image/png"));
        assert_eq!(part.filename.as_deref(), Some("avatar.png"));
    }
}
