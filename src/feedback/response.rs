// SPDX-License-Identifier: MPL-2.0
//! Parsed endpoint response.

use super::payload::FeedbackId;
use crate::error::SubmissionFailed;
use serde::Deserialize;

/// Body returned by the feedback endpoint.
///
/// The reference server answers `{"success": true, "id": 17}`. Both fields are
/// optional here; which ones matter depends on the step that was submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionResult {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub id: Option<FeedbackId>,
}

impl SubmissionResult {
    /// Parses a JSON object body.
    ///
    /// An explicit `"success": false` is treated as a failed submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionFailed`] when the body is not a JSON object with the
    /// expected field types, or when the server reports failure.
    pub fn from_json(body: &[u8]) -> Result<Self, SubmissionFailed> {
        let result: Self = serde_json::from_slice(body)?;
        if result.success == Some(false) {
            return Err(SubmissionFailed::new("server reported failure"));
        }
        Ok(result)
    }

    /// Returns the identifier, failing when the server omitted it.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionFailed`] if `id` is absent.
    pub fn require_id(self) -> Result<FeedbackId, SubmissionFailed> {
        self.id
            .ok_or_else(|| SubmissionFailed::new("response is missing the feedback id"))
    }
}
