// SPDX-License-Identifier: MPL-2.0
//! Per-mount session state: the captured identifier and outcome handlers.

use super::payload::FeedbackId;
use crate::error::SubmissionFailed;
use std::fmt;
use std::sync::Arc;

/// Callback replacing the built-in success region.
pub type SuccessHandler = Arc<dyn Fn() + Send + Sync>;

/// Callback replacing the built-in error region.
pub type ErrorHandler = Arc<dyn Fn(&SubmissionFailed) + Send + Sync>;

/// Caller-registered outcome callbacks. Unset means "use the default region".
#[derive(Clone, Default)]
pub struct OutcomeHandlers {
    pub on_success: Option<SuccessHandler>,
    pub on_error: Option<ErrorHandler>,
}

impl fmt::Debug for OutcomeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutcomeHandlers")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// Transient state held for one widget mount. Never persisted, never reset.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSession {
    feedback_id: Option<FeedbackId>,
    handlers: OutcomeHandlers,
}

impl FeedbackSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn feedback_id(&self) -> Option<&FeedbackId> {
        self.feedback_id.as_ref()
    }

    pub(crate) fn store_feedback_id(&mut self, id: FeedbackId) {
        self.feedback_id = Some(id);
    }

    #[must_use]
    pub fn handlers(&self) -> &OutcomeHandlers {
        &self.handlers
    }

    pub(crate) fn handlers_mut(&mut self) -> &mut OutcomeHandlers {
        &mut self.handlers
    }
}
