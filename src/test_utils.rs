// SPDX-License-Identifier: MPL-2.0
//! Test doubles shared by unit tests.

use crate::error::SubmissionFailed;
use crate::feedback::{SubmissionPayload, SubmissionResult, Transport, TransportFuture};
use futures_util::future::{self, FutureExt};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that records payloads and answers from a queue of scripted results.
///
/// With an empty queue every call succeeds with an empty body. A hanging
/// transport never resolves.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<SubmissionResult, SubmissionFailed>>>,
    submitted: Mutex<Vec<SubmissionPayload>>,
    hang: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::default()
        }
    }

    pub fn respond(self, result: Result<SubmissionResult, SubmissionFailed>) -> Self {
        self.responses.lock().unwrap().push_back(result);
        self
    }

    pub fn submitted(&self) -> Vec<SubmissionPayload> {
        self.submitted.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn submit(&self, payload: SubmissionPayload) -> TransportFuture {
        self.submitted.lock().unwrap().push(payload);
        if self.hang {
            return future::pending::<Result<SubmissionResult, SubmissionFailed>>().boxed();
        }
        let result = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SubmissionResult::default()));
        future::ready(result).boxed()
    }
}
