use std::future::Future;
use std::rc::Rc;

use futures::future::{abortable, AbortHandle, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use thiserror::Error;

use super::validation::Lead;

pub const PENDING_LABEL: &str = "SENDING...";
pub const SUCCESS_NOTICE: &str = "Thank you for signing up! We will contact you shortly.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Could not send your details, please try again. ({0})")]
    Network(String),
    #[error("Could not send your details, please try again. (status {0})")]
    Rejected(u16),
}

/// Delivers a validated lead somewhere.
pub trait Submitter {
    fn submit(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stands in for a real endpoint: waits a fixed delay and always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            TimeoutFuture::new(delay_ms).await;
            info!("Simulated submission for {} done", lead.name);
            Ok(())
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpSubmitter {
    pub endpoint: String,
}

impl Submitter for HttpSubmitter {
    fn submit(&self, lead: Lead) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let response = Request::post(&endpoint)
                .json(&lead)
                .map_err(|e| SubmitError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(SubmitError::Rejected(response.status()));
            }
            Ok(())
        })
    }
}

/// What the submission flow needs from the form it runs on.
pub trait FormView {
    fn set_sending(&self, sending: bool);
    fn alert(&self, message: &str);
    fn reset(&self);
}

/// Puts the form into its sending state right away and returns the rest of
/// the submission. The view is restored on every outcome.
pub fn begin_submission<V, S>(view: Rc<V>, submitter: &S, lead: Lead) -> impl Future<Output = ()>
where
    V: FormView + ?Sized + 'static,
    S: Submitter + ?Sized,
{
    view.set_sending(true);
    let pending = submitter.submit(lead);

    async move {
        match pending.await {
            Ok(()) => {
                view.alert(SUCCESS_NOTICE);
                view.reset();
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                view.alert(&e.to_string());
            }
        }
        view.set_sending(false);
    }
}

/// A submission in flight. Cancelling or dropping it stops the task before
/// it touches the view again.
#[derive(Debug)]
pub struct PendingSubmission {
    handle: AbortHandle,
}

impl PendingSubmission {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wraps `task` so it can be cancelled. The caller is responsible for
/// spawning the returned future.
pub fn cancellable<F>(task: F) -> (impl Future<Output = ()>, PendingSubmission)
where
    F: Future<Output = ()>,
{
    let (task, handle) = abortable(task);
    let task = async move {
        if task.await.is_err() {
            info!("Pending contact submission cancelled");
        }
    };
    (task, PendingSubmission { handle })
}
