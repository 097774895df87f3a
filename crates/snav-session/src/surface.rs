#![forbid(unsafe_code)]

//! Rendering-surface collaborator.

use snav_core::{Candidate, CandidateId};

/// The rendered view the session navigates over.
///
/// Implementations enumerate the currently visible focusable elements and
/// reflect the active candidate visually. The session never caches a
/// snapshot across operations; every input event fetches a fresh one so
/// navigation stays consistent with a mutating view.
pub trait Surface {
    /// Visible focusable candidates, in visual/document order, with
    /// centers measured now. No duplicates.
    fn snapshot(&self) -> Vec<Candidate>;

    /// Mark a candidate as active: visual highlight, input focus, and
    /// scroll-into-view.
    fn mark_active(&mut self, id: CandidateId);

    /// Remove the active marking from a candidate.
    fn clear_active(&mut self, id: CandidateId);
}
