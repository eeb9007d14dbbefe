//! Sequential permission request coordinator.
//!
//! Walks an ordered queue of [`PermissionId`]s, consults the capability
//! table for each, silently drops categories that are already resolved, and
//! surfaces exactly one pending category at a time for the presentation
//! layer to request or skip. A one-shot completion callback fires exactly
//! once when the queue empties.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::capability::CapabilityTable;
use crate::permission::{AuthorizationStatus, PermissionId};

type CompletionFn = Box<dyn FnOnce() + Send>;

/// Where the flow currently is. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Walking the queue head-first, probing statuses.
    Scanning,
    /// A pending category is surfaced; waiting for request or skip.
    AwaitingDecision,
    /// A consent invocation is in flight.
    Requesting,
    /// The queue emptied and the completion callback has fired.
    Completed,
}

struct FlowState {
    queue: VecDeque<PermissionId>,
    current: Option<PermissionId>,
    phase: Phase,
    on_complete: Option<CompletionFn>,
}

/// Handle onto one permission flow.
///
/// Cloning yields another handle onto the same flow, so a presentation
/// layer can observe `current()` / `is_requesting()` while something else
/// drives the mutating entry points. All mutation goes through
/// [`request_current`](Self::request_current) and
/// [`skip_current`](Self::skip_current); the queue itself is never exposed.
///
/// Backend failures are absorbed: a failed probe is treated as
/// [`AuthorizationStatus::NotSupported`] (the category is still presented
/// once), and a failed invocation is treated as a completed decision. The
/// flow therefore never stalls or errors because of a backend fault.
#[derive(Clone)]
pub struct PermissionCoordinator {
    state: Arc<Mutex<FlowState>>,
    capabilities: Arc<CapabilityTable>,
}

impl PermissionCoordinator {
    /// Build a coordinator over `ids` (kept verbatim: order preserved, no
    /// dedup) and immediately run the scan loop.
    ///
    /// Returns once the flow has settled: either a pending category is
    /// surfaced or, if every entry probed as resolved (or `ids` was empty),
    /// `on_complete` has already fired.
    pub async fn start(
        ids: impl IntoIterator<Item = PermissionId>,
        capabilities: Arc<CapabilityTable>,
        on_complete: impl FnOnce() + Send + 'static,
    ) -> Self {
        let coordinator = Self {
            state: Arc::new(Mutex::new(FlowState {
                queue: ids.into_iter().collect(),
                current: None,
                phase: Phase::Scanning,
                on_complete: Some(Box::new(on_complete)),
            })),
            capabilities,
        };
        coordinator.scan().await;
        coordinator
    }

    /// The category currently awaiting a decision, if any.
    ///
    /// Stays set while a request for it is in flight.
    pub fn current(&self) -> Option<PermissionId> {
        self.state.lock().expect("flow state lock").current
    }

    /// Whether a consent invocation is in flight.
    pub fn is_requesting(&self) -> bool {
        self.state.lock().expect("flow state lock").phase == Phase::Requesting
    }

    /// Whether the queue has emptied and the completion callback has fired.
    pub fn is_completed(&self) -> bool {
        self.state.lock().expect("flow state lock").phase == Phase::Completed
    }

    /// Trigger the platform consent flow for the pending category.
    ///
    /// No-op unless a category is pending and no request is already in
    /// flight. Once the invocation resolves (the outcome is not inspected),
    /// the entry is dequeued and scanning resumes. Returns whether an
    /// invocation was actually performed.
    pub async fn request_current(&self) -> bool {
        let id = {
            let mut state = self.state.lock().expect("flow state lock");
            if state.phase != Phase::AwaitingDecision {
                tracing::debug!(phase = ?state.phase, "request_current ignored");
                return false;
            }
            let Some(id) = state.current else {
                tracing::debug!("request_current ignored: no pending permission");
                return false;
            };
            state.phase = Phase::Requesting;
            id
        };

        if let Err(error) = self.capabilities.invoke(id).await {
            // Absorbed: a decision we could not collect counts as made.
            tracing::warn!("consent invocation for {id} failed: {error}");
        }

        {
            let mut state = self.state.lock().expect("flow state lock");
            state.queue.pop_front();
            state.current = None;
            state.phase = Phase::Scanning;
        }
        self.scan().await;
        true
    }

    /// Dequeue the pending category without invoking its consent flow,
    /// independent of its probed status, and resume scanning.
    ///
    /// Rejected while a request is in flight; a no-op once the flow has
    /// completed.
    pub async fn skip_current(&self) {
        {
            let mut state = self.state.lock().expect("flow state lock");
            match state.phase {
                Phase::AwaitingDecision => {}
                Phase::Requesting => {
                    tracing::debug!("skip_current ignored: request in flight");
                    return;
                }
                Phase::Scanning | Phase::Completed => return,
            }
            state.queue.pop_front();
            state.current = None;
            state.phase = Phase::Scanning;
        }
        self.scan().await;
    }

    /// Walk the queue from the head until an unresolved category is found
    /// or the queue empties.
    ///
    /// Only ever invoked from `start` and from the continuations of the two
    /// entry points above, each of which holds the flow in `Scanning`
    /// first, so at most one scan (and at most one probe) is active at a
    /// time.
    async fn scan(&self) {
        loop {
            let head = {
                let mut state = self.state.lock().expect("flow state lock");
                let Some(&id) = state.queue.front() else {
                    state.phase = Phase::Completed;
                    let on_complete = state.on_complete.take();
                    drop(state);
                    if let Some(on_complete) = on_complete {
                        on_complete();
                    }
                    return;
                };
                id
            };

            let status = match self.capabilities.probe(head).await {
                Ok(status) => status,
                Err(error) => {
                    // Absorbed: present the category once rather than drop
                    // it or stall on it.
                    tracing::warn!(
                        "status probe for {head} failed, treating as not supported: {error}"
                    );
                    AuthorizationStatus::NotSupported
                }
            };

            let mut state = self.state.lock().expect("flow state lock");
            if status.is_resolved() {
                state.queue.pop_front();
                continue;
            }
            state.current = Some(head);
            state.phase = Phase::AwaitingDecision;
            return;
        }
    }
}
