#![forbid(unsafe_code)]

//! Focusable-candidate model.
//!
//! A [`Candidate`] is a per-snapshot view of one focusable element: an
//! opaque identity, the element's center point as reported by the surface
//! at snapshot time, a short human-readable label, and the action to run
//! when the element is activated. Candidate sets are ordered slices in
//! visual/document order; that order doubles as the cyclic fallback order
//! when no candidate lies in the requested direction.

use unicode_segmentation::UnicodeSegmentation;

use crate::geometry::Point;

/// Maximum label length (in grapheme clusters) carried on navigation
/// events.
pub const LABEL_MAX_GRAPHEMES: usize = 50;

/// Opaque identity of a focusable element.
///
/// Assigned by the surface; stable for the lifetime of the element, used
/// only for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub u64);

impl CandidateId {
    /// Create a candidate id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What activating a candidate should do.
///
/// A closed set resolved by the activation dispatcher; custom behavior is
/// a registered handler looked up by key, never embedded executable text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Action {
    /// Click when the element is clickable, otherwise submit the
    /// enclosing form.
    #[default]
    Auto,
    /// Synthesize a click on the element.
    Click,
    /// Navigate to the element's link target.
    FollowLink,
    /// Submit the element's enclosing form.
    SubmitForm,
    /// Run the handler registered under this key.
    Custom(String),
}

/// One focusable element, as seen in a single snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    id: CandidateId,
    center: Point,
    label: String,
    action: Action,
}

impl Candidate {
    /// Create a candidate with the default ([`Action::Auto`]) activation.
    #[must_use]
    pub fn new(id: CandidateId, center: Point, label: impl Into<String>) -> Self {
        Self {
            id,
            center,
            label: label.into(),
            action: Action::Auto,
        }
    }

    /// Set the activation action.
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Element identity.
    #[must_use]
    pub const fn id(&self) -> CandidateId {
        self.id
    }

    /// Center point at snapshot time.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Human-readable label (untruncated).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Configured activation action.
    #[must_use]
    pub const fn activation(&self) -> &Action {
        &self.action
    }
}

/// Truncate a label to [`LABEL_MAX_GRAPHEMES`] grapheme clusters.
///
/// Grapheme-aware so combining sequences and emoji are never split.
#[must_use]
pub fn truncate_label(label: &str) -> String {
    let trimmed = label.trim();
    match trimmed.grapheme_indices(true).nth(LABEL_MAX_GRAPHEMES) {
        Some((byte_end, _)) => trimmed[..byte_end].to_string(),
        None => trimmed.to_string(),
    }
}
