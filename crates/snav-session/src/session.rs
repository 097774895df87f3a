#![forbid(unsafe_code)]

//! Stateful focus session.
//!
//! One [`FocusSession`] per independently navigable region. The session
//! holds the single active-candidate slot and runs each input event to
//! completion: fetch a fresh snapshot from the [`Surface`], pick the next
//! candidate, update state, and tell the surface to reflect it. All
//! failure modes degrade to deterministic fallback; nothing here returns
//! an error to the input layer.

use snav_core::{Candidate, CandidateId, Direction, select_next, truncate_label};

use crate::dispatch::{ActivationHost, Dispatcher};
use crate::sink::{NavEvent, NavEventKind, NavSink};
use crate::surface::Surface;

/// Input events the session consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A four-way directional signal.
    Direction(Direction),
    /// The activate signal for the current active candidate.
    Activate,
    /// Direct selection of a candidate (pointer/click).
    PointerSelect(CandidateId),
    /// The visible candidate set mutated (elements added/removed).
    CandidatesChanged,
}

/// Focus controller over one surface.
///
/// Collaborators are injected so a session can be driven headless in
/// tests and so several sessions can coexist over independent regions.
pub struct FocusSession<S, H, K>
where
    S: Surface,
    H: ActivationHost,
    K: NavSink,
{
    surface: S,
    dispatcher: Dispatcher<H>,
    sink: K,
    active: Option<CandidateId>,
}

impl<S, H, K> FocusSession<S, H, K>
where
    S: Surface,
    H: ActivationHost,
    K: NavSink,
{
    /// Create a session with an empty active slot.
    #[must_use]
    pub fn new(surface: S, host: H, sink: K) -> Self {
        Self {
            surface,
            dispatcher: Dispatcher::new(host),
            sink,
            active: None,
        }
    }

    /// Current active candidate, if any.
    #[must_use]
    pub fn active(&self) -> Option<CandidateId> {
        self.active
    }

    /// Borrow the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the dispatcher, e.g. to register custom
    /// activation handlers.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<H> {
        &mut self.dispatcher
    }

    /// Route one input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Direction(direction) => self.handle_direction(direction),
            InputEvent::Activate => self.handle_activate(),
            InputEvent::PointerSelect(id) => self.handle_pointer_select(id),
            InputEvent::CandidatesChanged => self.candidates_changed(),
        }
    }

    /// Set (or clear) the active candidate.
    ///
    /// Fetches a fresh snapshot; a non-empty target that is not in it is
    /// ignored, which keeps the active slot a member of the snapshot
    /// current at the last selection. Clearing always succeeds.
    pub fn set_active(&mut self, next: Option<CandidateId>) {
        let snapshot = self.surface.snapshot();
        self.set_active_in(&snapshot, next);
    }

    /// Handle a directional input: fresh snapshot, selector, transition.
    pub fn handle_direction(&mut self, direction: Direction) {
        let snapshot = self.surface.snapshot();
        self.sink.record(&NavEvent {
            kind: NavEventKind::Input,
            index: self.index_in(&snapshot, self.active),
            label: self.label_in(&snapshot, self.active),
            direction: Some(direction),
        });
        if snapshot.is_empty() {
            return;
        }
        let stale = self
            .active
            .is_none_or(|id| !snapshot.iter().any(|c| c.id() == id));
        let next = if stale {
            // Establish focus rather than navigate.
            snapshot.first().map(Candidate::id)
        } else {
            select_next(self.active, &snapshot, direction)
        };
        if next.is_some() {
            self.set_active_in(&snapshot, next);
        }
    }

    /// Handle the activate signal for the current active candidate.
    ///
    /// An active candidate that dropped out of the view is not activated;
    /// the session self-heals by refocusing the first candidate instead.
    pub fn handle_activate(&mut self) {
        let Some(id) = self.active else {
            return;
        };
        let snapshot = self.surface.snapshot();
        if snapshot.is_empty() {
            return;
        }
        let Some(index) = snapshot.iter().position(|c| c.id() == id) else {
            tracing::debug!(message = "focus.activate_stale", id = id.raw());
            let first = snapshot.first().map(Candidate::id);
            self.set_active_in(&snapshot, first);
            return;
        };
        let candidate = snapshot[index].clone();
        match self.dispatcher.dispatch(&candidate) {
            Ok(()) => {
                self.sink.record(&NavEvent {
                    kind: NavEventKind::Activated,
                    index: Some(index),
                    label: Some(truncate_label(candidate.label())),
                    direction: None,
                });
            }
            Err(err) => {
                // Activation failure never corrupts focus state.
                tracing::warn!(message = "focus.activate_failed", id = id.raw(), %err);
            }
        }
    }

    /// Handle direct selection: pointer wins regardless of geometry.
    pub fn handle_pointer_select(&mut self, id: CandidateId) {
        self.set_active(Some(id));
    }

    /// React to a candidate-set mutation.
    ///
    /// Also the initial-focus path: on the first non-empty snapshot an
    /// empty session focuses the first candidate. An active candidate
    /// that dropped out of the set resets the same way; the slot only
    /// empties when the set itself is empty.
    pub fn candidates_changed(&mut self) {
        let snapshot = self.surface.snapshot();
        if snapshot.is_empty() {
            if self.active.is_some() {
                self.set_active_in(&snapshot, None);
            }
            return;
        }
        let stale = self
            .active
            .is_none_or(|id| !snapshot.iter().any(|c| c.id() == id));
        if stale {
            let first = snapshot.first().map(Candidate::id);
            self.set_active_in(&snapshot, first);
        }
    }

    fn set_active_in(&mut self, snapshot: &[Candidate], next: Option<CandidateId>) {
        let index = match next {
            Some(id) => {
                let Some(index) = snapshot.iter().position(|c| c.id() == id) else {
                    tracing::debug!(message = "focus.set_active_stale", id = id.raw());
                    return;
                };
                Some(index)
            }
            None => None,
        };

        let previous = self.active;
        if let Some(prev) = previous
            && previous != next
        {
            self.surface.clear_active(prev);
        }
        self.active = next;
        if let Some(id) = next {
            self.surface.mark_active(id);
        }

        tracing::debug!(
            message = "focus.set_active",
            from = previous.map(CandidateId::raw),
            to = next.map(CandidateId::raw),
            index
        );
        self.sink.record(&NavEvent {
            kind: if next.is_some() {
                NavEventKind::FocusChanged
            } else {
                NavEventKind::FocusCleared
            },
            index,
            label: index.map(|i| truncate_label(snapshot[i].label())),
            direction: None,
        });
    }

    fn index_in(&self, snapshot: &[Candidate], id: Option<CandidateId>) -> Option<usize> {
        id.and_then(|id| snapshot.iter().position(|c| c.id() == id))
    }

    fn label_in(&self, snapshot: &[Candidate], id: Option<CandidateId>) -> Option<String> {
        self.index_in(snapshot, id)
            .map(|i| truncate_label(snapshot[i].label()))
    }
}

impl<S, H, K> std::fmt::Debug for FocusSession<S, H, K>
where
    S: Surface,
    H: ActivationHost,
    K: NavSink,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusSession")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
