//! Single-shot remote task
//!
//! Holds the lifecycle of one user-initiated request: idle, pending, then a
//! result or an error. Observers subscribe to state changes (a front end shows
//! its loading indicator while the state is `Pending`).

use crate::util::errors::{PatentProError, PatentProResult};
use log::{debug, warn};
use patentpro_core_types::AnalysisResult;
use serde::Serialize;
use std::future::Future;
use tokio::sync::watch;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    Idle,
    Pending,
    Succeeded(AnalysisResult),
    /// Display text of the error; the error value itself goes back to the submitter.
    Failed(String),
}

#[derive(Debug)]
pub struct RemoteTask {
    state: watch::Sender<TaskState>,
}

impl Default for RemoteTask {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteTask {
    pub fn new() -> Self {
        let (state, _) = watch::channel(TaskState::Idle);
        Self { state }
    }

    pub fn state(&self) -> TaskState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TaskState> {
        self.state.subscribe()
    }

    pub fn is_pending(&self) -> bool {
        matches!(*self.state.borrow(), TaskState::Pending)
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        match &*self.state.borrow() {
            TaskState::Succeeded(result) => Some(result.clone()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<String> {
        match &*self.state.borrow() {
            TaskState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Drops any previous outcome.
    pub fn reset(&self) {
        self.state.send_replace(TaskState::Idle);
    }

    /// Runs `request` as this task's one in-flight call.
    ///
    /// The previous result is cleared when the call starts. Errors are returned
    /// to the caller unchanged; the task keeps only their display text. If the
    /// returned future is dropped before it finishes, the task goes back to
    /// `Idle`.
    pub async fn submit<F, E>(&self, request: F) -> PatentProResult<AnalysisResult>
    where
        F: Future<Output = Result<AnalysisResult, E>>,
        E: Into<PatentProError>,
    {
        let accepted = self.state.send_if_modified(|state| {
            if matches!(state, TaskState::Pending) {
                false
            } else {
                *state = TaskState::Pending;
                true
            }
        });
        if !accepted {
            warn!("Rejected submit: task already pending");
            return Err(PatentProError::TaskBusy);
        }

        debug!("Remote task pending");
        let mut guard = PendingGuard {
            state: &self.state,
            armed: true,
        };
        let outcome = request.await.map_err(Into::into);
        guard.armed = false;

        match outcome {
            Ok(result) => {
                self.state.send_replace(TaskState::Succeeded(result.clone()));
                debug!("Remote task succeeded");
                Ok(result)
            }
            Err(e) => {
                self.state.send_replace(TaskState::Failed(e.to_string()));
                debug!("Remote task failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Lives across the request's await point; dropping it means the submit
/// future was cancelled.
struct PendingGuard<'a> {
    state: &'a watch::Sender<TaskState>,
    armed: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let cancelled = self.state.send_if_modified(|state| {
            if matches!(state, TaskState::Pending) {
                *state = TaskState::Idle;
                true
            } else {
                false
            }
        });
        if cancelled {
            warn!("Remote task cancelled before completion");
        }
    }
}
