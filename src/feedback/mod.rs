// SPDX-License-Identifier: MPL-2.0
//! Headless core of the feedback widget.
//!
//! Everything here is independent of the GUI toolkit so the flow can be
//! embedded elsewhere and tested without a window.
//!
//! # Components
//!
//! - [`payload`] - Ratings, identifiers, the anti-forgery token and form encoding
//! - [`response`] - Typed endpoint response with validation
//! - [`transport`] - `Transport` trait with the `reqwest` implementation
//! - [`session`] - Per-mount session and outcome handlers
//! - [`widget`] - The `FeedbackWidget` state machine
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use thumber::feedback::{FeedbackWidget, HttpTransport, Rating, SecurityToken};
//!
//! let transport = Arc::new(HttpTransport::new(&config.endpoint)?);
//! let mut widget = FeedbackWidget::new(transport, SecurityToken::new(token));
//! widget.set_success_handler(|| println!("thanks!"));
//!
//! if let Some(submission) = widget.select_rating(Rating::Satisfied) {
//!     let completion = submission.send().await;
//!     widget.complete(completion);
//! }
//! ```

pub mod payload;
pub mod response;
pub mod session;
pub mod transport;
pub mod widget;

pub use payload::{FeedbackId, PayloadContent, Rating, SecurityToken, SubmissionPayload};
pub use response::SubmissionResult;
pub use session::{ErrorHandler, FeedbackSession, OutcomeHandlers, SuccessHandler};
pub use transport::{HttpTransport, Transport, TransportFuture, UnavailableTransport};
pub use widget::{Completion, FeedbackWidget, Outcome, Regions, Stage, Step, Submission};
