#![forbid(unsafe_code)]

//! Core: candidate model, geometry, and the directional selector.

pub mod candidate;
pub mod geometry;
pub mod selector;

pub use candidate::{Action, Candidate, CandidateId, truncate_label};
pub use geometry::{Direction, Point};
pub use selector::select_next;
