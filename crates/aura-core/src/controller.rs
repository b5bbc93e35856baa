//! Session controller — owns the console state and runs every operation
//! that mutates it.
//!
//! Single-threaded: state lives in a `RefCell` that is only borrowed
//! between suspension points, so readers can take a snapshot while a
//! turn is paused on the clock or the network. At most one mutating
//! operation (turn, upload, reset) runs at a time; others are rejected
//! with [`ConsoleError::TurnInFlight`].

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use aura_types::{
    ConsoleError, Result,
    config::ClientConfig,
    dataset::{DatasetContext, DatasetUpload},
    event::ConsoleEvent,
    message::{ArtifactState, Message, Sender},
    session::Session,
};
use crate::event_bus::EventBus;
use crate::ports::*;
use crate::reveal::{StagedReveal, ORCHESTRATOR_LABEL};
use crate::state::ConsoleState;

/// What a completed turn revealed
#[derive(Debug, Clone, PartialEq)]
pub struct TurnSummary {
    pub request_id: Option<String>,
    pub plan_message_id: String,
    pub agents_succeeded: usize,
    pub agents_failed: usize,
}

pub struct SessionController {
    config: ClientConfig,
    gateway: Rc<dyn GatewayPort>,
    clock: Rc<dyn ClockPort>,
    event_bus: EventBus,
    state: RefCell<ConsoleState>,
}

/// Clears `busy` when the operation ends, on every exit path.
struct BusyGuard<'a> {
    state: &'a RefCell<ConsoleState>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().busy = false;
    }
}

impl SessionController {
    pub fn new(
        config: ClientConfig,
        gateway: Rc<dyn GatewayPort>,
        clock: Rc<dyn ClockPort>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            config,
            gateway,
            clock,
            event_bus,
            state: RefCell::new(ConsoleState::new()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Borrow the live state. Do not hold across an await.
    pub fn state(&self) -> Ref<'_, ConsoleState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> ConsoleState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    fn dispatch(&self, event: ConsoleEvent) {
        self.state.borrow_mut().apply(&event);
        self.event_bus.emit(event);
    }

    fn begin(&self) -> Result<BusyGuard<'_>> {
        let mut state = self.state.borrow_mut();
        if state.busy {
            log::warn!("Rejecting operation: another one is in flight");
            return Err(ConsoleError::TurnInFlight);
        }
        state.busy = true;
        Ok(BusyGuard { state: &self.state })
    }

    // ─── Session ─────────────────────────────────────────────

    /// Return the current session identity, requesting one first if none
    /// exists. An unreachable gateway is not an error: a local identity is
    /// used and the state is marked degraded. Fails only with
    /// [`ConsoleError::TurnInFlight`] when no session exists yet and another
    /// operation is already creating one.
    pub async fn initialize_session(&self) -> Result<Session> {
        let existing = self.state.borrow().session.clone();
        if let Some(session) = existing {
            return Ok(session);
        }
        let _guard = self.begin()?;
        Ok(self.open_session().await)
    }

    async fn open_session(&self) -> Session {
        let user_id = self.config.user_id.clone();
        let (session, degraded) = match self.gateway.create_session(&user_id).await {
            Ok(SessionGrant { session_id: Some(id) }) if !id.is_empty() => {
                log::info!("Session started: {}", id);
                (Session::new(id, user_id), false)
            }
            Ok(_) => {
                let session = Session::local(user_id);
                log::info!("Gateway returned no session id, using {}", session.session_id);
                (session, false)
            }
            Err(e) => {
                let session = Session::local(user_id);
                log::warn!(
                    "Session init failed ({}), continuing offline as {}",
                    e,
                    session.session_id
                );
                (session, true)
            }
        };
        self.dispatch(ConsoleEvent::SessionReady {
            session: session.clone(),
            degraded,
        });
        session
    }

    async fn ensure_session(&self) -> Session {
        let existing = self.state.borrow().session.clone();
        match existing {
            Some(session) => session,
            None => self.open_session().await,
        }
    }

    /// Clear timeline, dataset, plan and statuses. The session identity stays.
    pub fn reset_session(&self) -> Result<()> {
        let _guard = self.begin()?;
        self.dispatch(ConsoleEvent::SessionReset);
        log::info!("Session state reset");
        Ok(())
    }

    // ─── Dataset ─────────────────────────────────────────────

    /// Upload a dataset and make it the active context for later queries.
    /// A failure leaves the current dataset in place and is shown in the
    /// timeline as a failed artifact.
    pub async fn upload_dataset(&self, upload: DatasetUpload) -> Result<DatasetContext> {
        let _guard = self.begin()?;
        let filename = upload.filename.clone();

        let result = match upload.validate(&self.config.upload) {
            Ok(()) => self.gateway.upload_dataset(upload).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(dataset) => {
                log::info!(
                    "Dataset {} loaded: {} rows x {} columns",
                    dataset.dataset_id,
                    dataset.row_count(),
                    dataset.column_count()
                );
                let summary = dataset.summary();
                self.dispatch(ConsoleEvent::DatasetLoaded {
                    dataset: dataset.clone(),
                });
                self.dispatch(ConsoleEvent::MessageAppended {
                    message: Message::system(summary),
                });
                Ok(dataset)
            }
            Err(e) => {
                log::warn!("Upload of {} failed: {}", filename, e);
                self.dispatch(ConsoleEvent::UploadFailed {
                    filename: filename.clone(),
                    error: e.to_string(),
                });
                self.dispatch(ConsoleEvent::MessageAppended {
                    message: Message::artifact(
                        Sender::System,
                        format!("Could not load '{}'", filename),
                        ArtifactState::failure(format!("Upload failed: {}", filename), e.to_string()),
                    ),
                });
                Err(e)
            }
        }
    }

    // ─── Turn ────────────────────────────────────────────────

    /// Run one turn: a single query, then the staged reveal of its result.
    ///
    /// A failed query leaves one error message in the timeline and does not
    /// touch the previous turn's plan or statuses.
    pub async fn send_message(&self, text: &str) -> Result<TurnSummary> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ConsoleError::Other("Message is empty".to_string()));
        }
        let _guard = self.begin()?;
        let session = self.ensure_session().await;

        self.dispatch(ConsoleEvent::MessageAppended {
            message: Message::user(text),
        });
        self.dispatch(ConsoleEvent::TurnStarted {
            label: ORCHESTRATOR_LABEL.to_string(),
        });

        let req = QueryRequest {
            text: text.to_string(),
            session_id: session.session_id,
            user_id: session.user_id,
            dataset_id: self.state.borrow().dataset_id().map(String::from),
        };
        log::info!(
            "Query dispatched (session {}, dataset {:?})",
            req.session_id,
            req.dataset_id
        );

        let response = match self.gateway.send_query(req).await.and_then(accepted) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Query failed: {}", e);
                self.dispatch(ConsoleEvent::TurnFailed {
                    error: e.to_string(),
                });
                self.dispatch(ConsoleEvent::MessageAppended {
                    message: Message::assistant(format!("Error: {}", e)),
                });
                return Err(e);
            }
        };

        let agents_succeeded = response.agent_responses.iter().filter(|r| r.success).count();
        let agents_failed = response.agent_responses.len() - agents_succeeded;
        log::info!(
            "Plan received: {} agent(s), {} result(s)",
            response.plan.agents.len(),
            response.agent_responses.len()
        );

        let request_id = response.request_id.clone();
        let reveal = StagedReveal::new(response);
        let plan_message_id = reveal.plan_message_id().to_string();

        for step in reveal {
            if let Some(pace) = step.wait {
                self.clock.sleep(pace.duration_ms(&self.config.pacing)).await;
            }
            for event in step.events {
                if let ConsoleEvent::StepLabel { label } = &event {
                    log::debug!("{}", label);
                }
                self.dispatch(event);
            }
        }

        Ok(TurnSummary {
            request_id,
            plan_message_id,
            agents_succeeded,
            agents_failed,
        })
    }

    // ─── Pass-through ────────────────────────────────────────

    /// Confirm a pending order. Does not touch console state.
    pub async fn approve_order(&self, order_id: &str) -> Result<bool> {
        let session = self.initialize_session().await?;
        let approved = self
            .gateway
            .approve_order(order_id, &session.session_id)
            .await?;
        log::info!("Order {} approval: {}", order_id, approved);
        Ok(approved)
    }

    pub async fn check_health(&self) -> Result<HealthStatus> {
        self.gateway.check_health().await
    }
}

/// A `success = false` body is a failed turn.
fn accepted(response: QueryResponse) -> Result<QueryResponse> {
    if response.success {
        Ok(response)
    } else {
        Err(ConsoleError::Gateway(
            response
                .error
                .unwrap_or_else(|| "orchestrator reported failure".to_string()),
        ))
    }
}
