// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.
#![allow(dead_code)]

use futures_util::future::{self, FutureExt};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thumber::error::SubmissionFailed;
use thumber::feedback::{
    FeedbackId, FeedbackWidget, SecurityToken, SubmissionPayload, SubmissionResult, Transport,
    TransportFuture,
};

/// Transport replaying queued results and recording every payload.
#[derive(Debug, Default)]
pub struct FakeEndpoint {
    responses: Mutex<VecDeque<Result<SubmissionResult, SubmissionFailed>>>,
    submitted: Mutex<Vec<SubmissionPayload>>,
}

impl FakeEndpoint {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, result: Result<SubmissionResult, SubmissionFailed>) {
        self.responses.lock().unwrap().push_back(result);
    }

    pub fn submitted(&self) -> Vec<SubmissionPayload> {
        self.submitted.lock().unwrap().clone()
    }
}

impl Transport for FakeEndpoint {
    fn submit(&self, payload: SubmissionPayload) -> TransportFuture {
        self.submitted.lock().unwrap().push(payload);
        let result = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SubmissionFailed::new("no scripted response")));
        future::ready(result).boxed()
    }
}

pub fn ok() -> Result<SubmissionResult, SubmissionFailed> {
    Ok(SubmissionResult::default())
}

pub fn ok_with_id(id: &str) -> Result<SubmissionResult, SubmissionFailed> {
    Ok(SubmissionResult {
        success: Some(true),
        id: Some(FeedbackId::new(id)),
    })
}

pub fn widget(endpoint: &Arc<FakeEndpoint>) -> FeedbackWidget {
    FeedbackWidget::new(endpoint.clone(), SecurityToken::new("csrf-token"))
}

/// Counts how often a callback fired.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Looks up a form field by name.
pub fn field(payload: &SubmissionPayload, name: &str) -> Option<String> {
    payload
        .form_fields()
        .into_iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
