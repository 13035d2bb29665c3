// SPDX-License-Identifier: MPL-2.0
//! Request-side value objects: ratings, identifiers and the form payload.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Marker sent in `thumber_token` by scripted submissions.
pub const ASYNC_SUBMISSION_MARKER: &str = "ajax";

/// Form field names understood by the feedback endpoint.
pub mod field {
    pub const SECURITY_TOKEN: &str = "csrfmiddlewaretoken";
    pub const SUBMISSION_MARKER: &str = "thumber_token";
    pub const SATISFIED: &str = "satisfied";
    pub const FEEDBACK_ID: &str = "id";
    pub const COMMENT: &str = "comment";
}

/// The two mutually exclusive choices of the rating control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Satisfied,
    NotSatisfied,
}

impl Rating {
    /// Wire value of the `satisfied` field.
    #[must_use]
    pub fn form_value(self) -> &'static str {
        match self {
            Rating::Satisfied => "True",
            Rating::NotSatisfied => "False",
        }
    }
}

/// Server-issued identifier correlating a rating with its follow-up comment.
///
/// Deserializes from either a JSON string or a JSON integer and is sent back
/// verbatim as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FeedbackId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = FeedbackId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-empty string or an integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FeedbackId, E> {
                if v.is_empty() {
                    return Err(E::invalid_value(de::Unexpected::Str(v), &self));
                }
                Ok(FeedbackId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FeedbackId, E> {
                Ok(FeedbackId::new(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FeedbackId, E> {
                Ok(FeedbackId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Opaque anti-forgery token passed through to the endpoint.
///
/// `Debug` is redacted so the value never ends up in logs.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SecurityToken(String);

impl SecurityToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecurityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecurityToken(<redacted>)")
    }
}

/// What a single submission carries besides the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadContent {
    Rating(Rating),
    Comment {
        feedback_id: FeedbackId,
        comment: String,
    },
}

/// Value object handed to a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    security_token: SecurityToken,
    content: PayloadContent,
}

impl SubmissionPayload {
    pub fn rating(security_token: SecurityToken, rating: Rating) -> Self {
        Self {
            security_token,
            content: PayloadContent::Rating(rating),
        }
    }

    pub fn comment(
        security_token: SecurityToken,
        feedback_id: FeedbackId,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            security_token,
            content: PayloadContent::Comment {
                feedback_id,
                comment: comment.into(),
            },
        }
    }

    #[must_use]
    pub fn content(&self) -> &PayloadContent {
        &self.content
    }

    #[must_use]
    pub fn security_token(&self) -> &SecurityToken {
        &self.security_token
    }

    /// Encodes the payload as ordered form fields.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (field::SUBMISSION_MARKER, ASYNC_SUBMISSION_MARKER.to_string()),
            (
                field::SECURITY_TOKEN,
                self.security_token.expose().to_string(),
            ),
        ];
        match &self.content {
            PayloadContent::Rating(rating) => {
                fields.push((field::SATISFIED, rating.form_value().to_string()));
            }
            PayloadContent::Comment {
                feedback_id,
                comment,
            } => {
                fields.push((field::FEEDBACK_ID, feedback_id.as_str().to_string()));
                fields.push((field::COMMENT, comment.clone()));
            }
        }
        fields
    }
}
