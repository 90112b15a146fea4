// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scripted in-memory transport for unit tests.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::{ApiResponse, Protocol};

/// A request seen by [`MockProtocol`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Request {
    Get { path: String },
    Post { path: String, body: Value },
}

/// Transport that replays queued responses and records every request.
///
/// GETs pop from the state queue and fail with 503 once it is empty.
/// POSTs pop from the status queue and succeed once it is empty.
#[derive(Debug, Default)]
pub(crate) struct MockProtocol {
    gets: Mutex<VecDeque<Result<String, u16>>>,
    post_statuses: Mutex<VecDeque<u16>>,
    requests: Mutex<Vec<Request>>,
}

impl MockProtocol {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_state(&self, body: &str) {
        self.gets.lock().push_back(Ok(body.to_string()));
    }

    pub(crate) fn push_state_status(&self, code: u16) {
        self.gets.lock().push_back(Err(code));
    }

    pub(crate) fn push_post_status(&self, code: u16) {
        self.post_statuses.lock().push_back(code);
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    pub(crate) fn posts(&self) -> Vec<(String, Value)> {
        self.requests
            .lock()
            .iter()
            .filter_map(|r| match r {
                Request::Post { path, body } => Some((path.clone(), body.clone())),
                Request::Get { .. } => None,
            })
            .collect()
    }

    pub(crate) fn get_count(&self) -> usize {
        self.requests
            .lock()
            .iter()
            .filter(|r| matches!(r, Request::Get { .. }))
            .count()
    }
}

fn status_error(code: u16) -> ProtocolError {
    ProtocolError::Status {
        code,
        reason: "Scripted".to_string(),
    }
}

impl Protocol for MockProtocol {
    async fn get(&self, path: &str) -> Result<ApiResponse, ProtocolError> {
        self.requests.lock().push(Request::Get {
            path: path.to_string(),
        });
        match self.gets.lock().pop_front() {
            Some(Ok(body)) => Ok(ApiResponse::new(body)),
            Some(Err(code)) => Err(status_error(code)),
            None => Err(status_error(503)),
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<ApiResponse, ProtocolError> {
        self.requests.lock().push(Request::Post {
            path: path.to_string(),
            body: body.clone(),
        });
        match self.post_statuses.lock().pop_front() {
            Some(code) if !(200..300).contains(&code) => Err(status_error(code)),
            _ => Ok(ApiResponse::new("")),
        }
    }
}
