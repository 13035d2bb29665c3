// SPDX-License-Identifier: MPL-2.0
//! The feedback widget's interaction state machine.
//!
//! ```text
//!   Idle ──satisfied ok──────────────────────────────▶ Completed(Success)
//!    │                                                   ▲
//!    └──not satisfied ok──▶ AwaitingComment ──comment ok─┘
//!
//!   any failure ──────────────────────────────────────▶ Completed(Failure)
//! ```
//!
//! Events only start a [`Submission`]; the caller drives it to completion and
//! hands the resulting [`Completion`] back to [`FeedbackWidget::complete`].
//! This keeps the machine synchronous and independent of the GUI runtime.

use super::payload::{FeedbackId, Rating, SecurityToken, SubmissionPayload};
use super::response::SubmissionResult;
use super::session::FeedbackSession;
use super::transport::{Transport, TransportFuture};
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::SubmissionFailed;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// How a completed flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Position in the three-step flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Rating control visible, everything else hidden.
    Idle,
    /// Reached only after a successful "not satisfied" rating.
    AwaitingComment,
    /// Terminal.
    Completed(Outcome),
}

/// Which request a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Rating(Rating),
    Comment,
}

/// Visibility of every region the widget controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub form: bool,
    pub rating: bool,
    pub comment: bool,
    pub submit: bool,
    pub success: bool,
    pub error: bool,
}

impl Regions {
    fn initial() -> Self {
        Self {
            form: true,
            rating: true,
            comment: false,
            submit: false,
            success: false,
            error: false,
        }
    }
}

impl Default for Regions {
    fn default() -> Self {
        Self::initial()
    }
}

/// Result of a finished transport call, tagged with its step.
#[derive(Debug, Clone)]
pub struct Completion {
    pub step: Step,
    pub result: Result<SubmissionResult, SubmissionFailed>,
}

/// An in-flight request produced by a UI event.
pub struct Submission {
    step: Step,
    payload: SubmissionPayload,
    request: TransportFuture,
    timeout: Duration,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("step", &self.step)
            .field("payload", &self.payload)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Submission {
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn payload(&self) -> &SubmissionPayload {
        &self.payload
    }

    /// Awaits the transport, bounded by the widget timeout.
    pub async fn send(self) -> Completion {
        let result = match tokio::time::timeout(self.timeout, self.request).await {
            Ok(result) => result,
            Err(_) => Err(SubmissionFailed::timed_out(self.timeout)),
        };
        Completion {
            step: self.step,
            result,
        }
    }
}

/// Binary satisfaction widget with an optional follow-up comment.
pub struct FeedbackWidget {
    transport: Arc<dyn Transport>,
    security_token: SecurityToken,
    timeout: Duration,
    session: FeedbackSession,
    stage: Stage,
    regions: Regions,
    comment: String,
    in_flight: Option<Step>,
}

impl fmt::Debug for FeedbackWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackWidget")
            .field("stage", &self.stage)
            .field("regions", &self.regions)
            .field("session", &self.session)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl FeedbackWidget {
    pub fn new(transport: Arc<dyn Transport>, security_token: SecurityToken) -> Self {
        Self {
            transport,
            security_token,
            timeout: Duration::from_secs(u64::from(DEFAULT_TIMEOUT_SECS)),
            session: FeedbackSession::new(),
            stage: Stage::Idle,
            regions: Regions::initial(),
            comment: String::new(),
            in_flight: None,
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Registers the success callback, replacing any previous one.
    ///
    /// Only completions that happen after this call are affected.
    pub fn set_success_handler<F>(&mut self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.session.handlers_mut().on_success = Some(Arc::new(handler));
    }

    /// Registers the error callback, replacing any previous one.
    ///
    /// Only completions that happen after this call are affected.
    pub fn set_error_handler<F>(&mut self, handler: F)
    where
        F: Fn(&SubmissionFailed) + Send + Sync + 'static,
    {
        self.session.handlers_mut().on_error = Some(Arc::new(handler));
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn regions(&self) -> Regions {
        self.regions
    }

    #[must_use]
    pub fn feedback_id(&self) -> Option<&FeedbackId> {
        self.session.feedback_id()
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a request is outstanding. Events are ignored while busy.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Updates the comment text being typed.
    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.comment = text.into();
    }

    /// Handles a change of the rating control.
    ///
    /// Returns `None` when the event is not acceptable in the current state.
    pub fn select_rating(&mut self, rating: Rating) -> Option<Submission> {
        if self.stage != Stage::Idle || self.is_busy() {
            log::warn!("Ignoring rating {rating:?} in stage {:?}", self.stage);
            return None;
        }
        let payload = SubmissionPayload::rating(self.security_token.clone(), rating);
        Some(self.dispatch(Step::Rating(rating), payload))
    }

    /// Handles a submit of the comment form.
    ///
    /// Only accepted in [`Stage::AwaitingComment`], which cannot be entered
    /// without a stored feedback identifier.
    pub fn submit_comment(&mut self) -> Option<Submission> {
        if self.stage != Stage::AwaitingComment || self.is_busy() {
            log::warn!(
                "Ignoring comment submission in stage {:?} (busy: {})",
                self.stage,
                self.is_busy()
            );
            return None;
        }
        let Some(feedback_id) = self.session.feedback_id().cloned() else {
            log::warn!("Ignoring comment submission without a feedback id");
            return None;
        };
        let payload =
            SubmissionPayload::comment(self.security_token.clone(), feedback_id, self.comment.clone());
        Some(self.dispatch(Step::Comment, payload))
    }

    fn dispatch(&mut self, step: Step, payload: SubmissionPayload) -> Submission {
        log::debug!("Submitting feedback step {step:?}");
        self.in_flight = Some(step);
        let request = self.transport.submit(payload.clone());
        Submission {
            step,
            payload,
            request,
            timeout: self.timeout,
        }
    }

    /// Applies the result of a finished submission.
    ///
    /// Completions that do not match the outstanding request are dropped.
    pub fn complete(&mut self, completion: Completion) {
        if self.in_flight != Some(completion.step) {
            log::warn!(
                "Dropping completion for {:?}; outstanding request is {:?}",
                completion.step,
                self.in_flight
            );
            return;
        }
        self.in_flight = None;

        match (completion.step, completion.result) {
            (Step::Rating(Rating::NotSatisfied), Ok(result)) => match result.require_id() {
                Ok(feedback_id) => self.await_comment(feedback_id),
                Err(failure) => self.fail(&failure),
            },
            (_, Ok(_)) => {
                self.regions.form = false;
                self.succeed();
            }
            (_, Err(failure)) => self.fail(&failure),
        }
    }

    fn await_comment(&mut self, feedback_id: FeedbackId) {
        log::info!("Rating recorded as {feedback_id}, awaiting comment");
        self.session.store_feedback_id(feedback_id);
        self.regions.rating = false;
        self.regions.comment = true;
        self.regions.submit = true;
        self.stage = Stage::AwaitingComment;
    }

    fn succeed(&mut self) {
        log::info!("Feedback submitted");
        self.stage = Stage::Completed(Outcome::Success);
        match self.session.handlers().on_success.clone() {
            Some(handler) => handler(),
            None => self.regions.success = true,
        }
    }

    fn fail(&mut self, failure: &SubmissionFailed) {
        log::warn!("{failure}");
        self.stage = Stage::Completed(Outcome::Failure);
        match self.session.handlers().on_error.clone() {
            Some(handler) => handler(failure),
            None => {
                self.regions.form = false;
                self.regions.error = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedTransport;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn widget(transport: &Arc<ScriptedTransport>) -> FeedbackWidget {
        FeedbackWidget::new(transport.clone(), SecurityToken::new("csrf"))
    }

    fn ok_with_id(id: &str) -> Result<SubmissionResult, SubmissionFailed> {
        Ok(SubmissionResult {
            success: Some(true),
            id: Some(FeedbackId::new(id)),
        })
    }

    #[test]
    fn starts_idle_with_only_rating_visible() {
        let transport = Arc::new(ScriptedTransport::new());
        let widget = widget(&transport);

        assert_eq!(widget.stage(), Stage::Idle);
        assert_eq!(widget.regions(), Regions::initial());
        assert!(!widget.is_busy());
        assert!(widget.feedback_id().is_none());
    }

    #[test]
    fn rating_marks_widget_busy_and_blocks_second_event() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);

        assert!(widget.select_rating(Rating::Satisfied).is_some());
        assert!(widget.is_busy());
        assert!(widget.select_rating(Rating::NotSatisfied).is_none());
        assert_eq!(transport.submitted().len(), 1);
    }

    #[test]
    fn comment_before_rating_is_ignored() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);
        widget.set_comment("out of band");

        assert!(widget.submit_comment().is_none());
        assert_eq!(widget.stage(), Stage::Idle);
        assert!(transport.submitted().is_empty());
    }

    #[test]
    fn not_satisfied_success_reveals_comment_controls() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);

        let submission = widget.select_rating(Rating::NotSatisfied).unwrap();
        widget.complete(Completion {
            step: submission.step(),
            result: ok_with_id("7"),
        });

        assert_eq!(widget.stage(), Stage::AwaitingComment);
        assert_eq!(widget.feedback_id(), Some(&FeedbackId::new("7")));
        let regions = widget.regions();
        assert!(regions.form && !regions.rating && regions.comment && regions.submit);
        assert!(!regions.success && !regions.error);
    }

    #[test]
    fn missing_identifier_routes_to_failure() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);

        widget.select_rating(Rating::NotSatisfied).unwrap();
        widget.complete(Completion {
            step: Step::Rating(Rating::NotSatisfied),
            result: Ok(SubmissionResult::default()),
        });

        assert_eq!(widget.stage(), Stage::Completed(Outcome::Failure));
        assert!(widget.feedback_id().is_none());
        assert!(widget.regions().error);
        assert!(!widget.regions().form);
    }

    #[test]
    fn stale_completion_is_dropped() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);

        widget.select_rating(Rating::Satisfied).unwrap();
        widget.complete(Completion {
            step: Step::Comment,
            result: Ok(SubmissionResult::default()),
        });

        assert_eq!(widget.stage(), Stage::Idle);
        assert!(widget.is_busy());
    }

    #[test]
    fn completed_widget_ignores_further_events() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);

        widget.select_rating(Rating::Satisfied).unwrap();
        widget.complete(Completion {
            step: Step::Rating(Rating::Satisfied),
            result: Ok(SubmissionResult::default()),
        });

        assert!(widget.select_rating(Rating::NotSatisfied).is_none());
        assert!(widget.submit_comment().is_none());
        assert_eq!(widget.stage(), Stage::Completed(Outcome::Success));
    }

    #[test]
    fn error_handler_keeps_form_visible() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        widget.set_error_handler(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        widget.select_rating(Rating::Satisfied).unwrap();
        widget.complete(Completion {
            step: Step::Rating(Rating::Satisfied),
            result: Err(SubmissionFailed::new("boom")),
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(widget.regions().form);
        assert!(!widget.regions().error);
        assert_eq!(widget.stage(), Stage::Completed(Outcome::Failure));
    }

    #[test]
    fn replacing_handler_uses_latest_only() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut widget = widget(&transport);
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let (f, s) = (first.clone(), second.clone());
        widget.set_success_handler(move || {
            f.fetch_add(1, Ordering::SeqCst);
        });
        widget.set_success_handler(move || {
            s.fetch_add(1, Ordering::SeqCst);
        });

        widget.select_rating(Rating::Satisfied).unwrap();
        widget.complete(Completion {
            step: Step::Rating(Rating::Satisfied),
            result: Ok(SubmissionResult::default()),
        });

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert!(!widget.regions().success);
    }

    #[tokio::test]
    async fn hung_transport_times_out_into_failure() {
        let transport = Arc::new(ScriptedTransport::hanging());
        let mut widget = widget(&transport).with_timeout(Duration::from_millis(20));

        let completion = widget.select_rating(Rating::Satisfied).unwrap().send().await;
        assert!(completion.result.is_err());

        widget.complete(completion);
        assert_eq!(widget.stage(), Stage::Completed(Outcome::Failure));
        assert!(widget.regions().error);
    }
}
