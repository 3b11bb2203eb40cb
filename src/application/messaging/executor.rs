//! Executor - runs a matched command with failure isolation

use std::any::Any;
use std::future::{poll_fn, Future};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::application::errors::CommandError;
use crate::domain::entities::{CommandDescriptor, Message};
use crate::domain::traits::Bot;
use super::context::DispatchContext;
use super::gate::MaintenanceSwitch;

/// Reply sent when a handler faults
pub const FAILURE_NOTICE: &str = "An error occurred while executing the command.";

/// How one handler invocation ended
#[derive(Debug)]
pub enum ExecutionOutcome {
    Completed,
    Faulted(CommandError),
}

impl ExecutionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ExecutionOutcome::Completed)
    }
}

/// Completion signal for a running handler.
///
/// Dropping it detaches the handler; it keeps running and its fault is still
/// logged and reported to the chat.
pub struct Execution {
    handle: JoinHandle<ExecutionOutcome>,
}

impl Execution {
    /// Wait for the handler and its fault reporting to finish
    pub async fn outcome(self) -> ExecutionOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => ExecutionOutcome::Faulted(CommandError::Panicked(e.to_string())),
        }
    }
}

/// Invokes handlers on their own task and answers faults with a generic notice
#[derive(Clone)]
pub struct Executor {
    bot: Arc<dyn Bot>,
    owner_id: String,
    maintenance: MaintenanceSwitch,
}

impl Executor {
    pub fn new(bot: Arc<dyn Bot>, owner_id: impl Into<String>, maintenance: MaintenanceSwitch) -> Self {
        Self {
            bot,
            owner_id: owner_id.into(),
            maintenance,
        }
    }

    /// Start a handler and wait until it has been invoked.
    ///
    /// Resolves once the handler has run up to its first suspension point
    /// (or context construction failed), so a later message is authorized
    /// against whatever the handler changed synchronously.
    pub async fn execute(&self, descriptor: &CommandDescriptor, message: Message, args: Vec<String>) -> Execution {
        let name = descriptor.name.clone();
        let handler = Arc::clone(&descriptor.handler);
        let bot = Arc::clone(&self.bot);
        let owner_id = self.owner_id.clone();
        let maintenance = self.maintenance.clone();
        let (started_tx, started_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let chat_id = message.chat_id.clone();
            let received_at = message.timestamp;

            let result = match DispatchContext::build(message, args, owner_id, Arc::clone(&bot), maintenance) {
                Ok(ctx) => {
                    let invoked = tokio::spawn(async move {
                        let mut started = Some(started_tx);
                        let mut run = handler.on_start(ctx);
                        poll_fn(|cx| {
                            let poll = run.as_mut().poll(cx);
                            if let Some(tx) = started.take() {
                                let _ = tx.send(());
                            }
                            poll
                        })
                        .await
                    });
                    match invoked.await {
                        Ok(result) => result,
                        Err(e) if e.is_panic() => Err(CommandError::Panicked(panic_message(e.into_panic()))),
                        Err(e) => Err(CommandError::ExecutionFailed(e.to_string())),
                    }
                }
                Err(e) => {
                    drop(started_tx);
                    Err(e)
                }
            };

            match result {
                Ok(()) => {
                    let elapsed = Utc::now() - received_at;
                    tracing::debug!("[{}] Command {} completed in {}ms", chat_id, name, elapsed.num_milliseconds());
                    ExecutionOutcome::Completed
                }
                Err(e) => {
                    tracing::error!("Error executing command {}: {}", name, e);
                    if let Err(send_err) = bot.send_message(&chat_id, FAILURE_NOTICE).await {
                        tracing::error!("Failed to send failure notice to {}: {}", chat_id, send_err);
                    }
                    ExecutionOutcome::Faulted(e)
                }
            }
        });

        // A handler that panics on its first poll drops the sender
        let _ = started_rx.await;
        Execution { handle }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
