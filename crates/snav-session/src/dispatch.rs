#![forbid(unsafe_code)]

//! Activation dispatch.
//!
//! Maps a candidate's [`Action`] onto concrete side effects performed by
//! an [`ActivationHost`]. Custom behavior is a handler registered under a
//! string key and looked up at dispatch time; there is no interpretation
//! of embedded executable text.

use ahash::AHashMap;
use snav_core::{Action, Candidate, CandidateId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

/// Handler for [`Action::Custom`] activations.
pub type CustomHandler = Box<dyn Fn(&Candidate) -> Result<()> + Send>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no handler registered for custom action: {key}")]
    UnknownAction { key: String },

    #[error("custom handler '{key}' failed: {message}")]
    Handler { key: String, message: String },

    #[error("host rejected {operation} for candidate {id}: {message}")]
    Host {
        operation: &'static str,
        id: u64,
        message: String,
    },
}

impl DispatchError {
    /// Build a handler failure for the given key.
    #[must_use]
    pub fn handler(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Build a host failure.
    #[must_use]
    pub fn host(operation: &'static str, id: CandidateId, message: impl Into<String>) -> Self {
        Self::Host {
            operation,
            id: id.raw(),
            message: message.into(),
        }
    }
}

/// Primitive activation side effects supplied by the embedding view.
pub trait ActivationHost {
    /// Whether a synthesized click would do anything for this element.
    fn can_click(&self, id: CandidateId) -> bool;

    /// Synthesize a click on the element.
    fn click(&mut self, id: CandidateId) -> Result<()>;

    /// Navigate to the element's link target.
    fn follow_link(&mut self, id: CandidateId) -> Result<()>;

    /// Submit the element's enclosing form.
    fn submit_form(&mut self, id: CandidateId) -> Result<()>;
}

/// Resolves a candidate's action against a host and a custom-handler
/// registry.
pub struct Dispatcher<H: ActivationHost> {
    host: H,
    handlers: AHashMap<String, CustomHandler>,
}

impl<H: ActivationHost> Dispatcher<H> {
    /// Create a dispatcher with an empty handler registry.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            handlers: AHashMap::new(),
        }
    }

    /// Register (or replace) the handler for a custom action key.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        handler: impl Fn(&Candidate) -> Result<()> + Send + 'static,
    ) {
        self.handlers.insert(key.into(), Box::new(handler));
    }

    /// Borrow the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Perform the candidate's configured activation.
    ///
    /// `Auto` clicks when the host reports the element clickable and
    /// otherwise submits the enclosing form.
    pub fn dispatch(&mut self, candidate: &Candidate) -> Result<()> {
        let id = candidate.id();
        match candidate.activation() {
            Action::Auto => {
                if self.host.can_click(id) {
                    self.host.click(id)
                } else {
                    self.host.submit_form(id)
                }
            }
            Action::Click => self.host.click(id),
            Action::FollowLink => self.host.follow_link(id),
            Action::SubmitForm => self.host.submit_form(id),
            Action::Custom(key) => match self.handlers.get(key) {
                Some(handler) => handler(candidate),
                None => Err(DispatchError::UnknownAction { key: key.clone() }),
            },
        }
    }
}

impl<H: ActivationHost + std::fmt::Debug> std::fmt::Debug for Dispatcher<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("host", &self.host)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
