#![forbid(unsafe_code)]

//! Fire-and-forget navigation event recording.
//!
//! The session emits one [`NavEvent`] per state transition. Emission is
//! best-effort by contract: [`NavSink::record`] returns nothing, and
//! implementations swallow their own failures. A sink must never block
//! the caller; an implementation that ships events off-process should
//! hand them to a channel or background task and return.

use snav_core::Direction;

/// What kind of transition an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEventKind {
    /// The active candidate changed (including initial focus).
    FocusChanged,
    /// The active slot was cleared.
    FocusCleared,
    /// The active candidate was activated.
    Activated,
    /// A directional input was handled.
    Input,
}

/// One navigation event.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEvent {
    pub kind: NavEventKind,
    /// Position of the (new) active candidate within the snapshot current
    /// at emission time, when there is one.
    pub index: Option<usize>,
    /// Candidate label, grapheme-truncated to 50 clusters.
    pub label: Option<String>,
    /// Requested direction, for directional inputs.
    pub direction: Option<Direction>,
}

impl NavEvent {
    /// Event with no index/label/direction payload.
    #[must_use]
    pub const fn bare(kind: NavEventKind) -> Self {
        Self {
            kind,
            index: None,
            label: None,
            direction: None,
        }
    }
}

/// Observability collaborator.
pub trait NavSink {
    /// Record one event. Failures are the implementation's problem;
    /// nothing is returned and nothing may propagate.
    fn record(&self, event: &NavEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NavSink for NullSink {
    fn record(&self, _event: &NavEvent) {}
}
