#![forbid(unsafe_code)]

//! Directional best-match selection.
//!
//! [`select_next`] is a pure function over a borrowed candidate snapshot.
//! It scores every candidate in the requested half-plane by how far it
//! lies along the direction axis relative to its distance, penalizing
//! lateral deviation at half weight, and falls back to cyclic snapshot
//! order when the half-plane is empty. Navigation never dead-ends on a
//! non-empty set.

use crate::candidate::{Candidate, CandidateId};
use crate::geometry::Direction;

/// Weight applied to lateral (off-axis) deviation in the score.
///
/// The forward projection is rewarded at full weight and lateral drift is
/// penalized at half weight, so a candidate directly ahead outranks one
/// equally far but off-axis. The value is a heuristic constant; tune it,
/// nothing else depends on it.
pub const ORTHO_PENALTY_WEIGHT: f64 = 0.5;

/// Floor for the distance divisor, guarding against coincident or
/// zero-size elements.
const DISTANCE_FLOOR: f64 = 1.0;

/// Select the next candidate to focus.
///
/// - Empty `candidates` yields `None`.
/// - An empty or stale `current` yields the first candidate: this
///   establishes an initial focus rather than navigating.
/// - Otherwise the best-scoring candidate strictly in the requested
///   half-plane wins; ties keep the earliest in snapshot order.
/// - With nothing in the half-plane, the snapshot is treated as a ring:
///   `Left`/`Up` step to the predecessor of `current`, `Right`/`Down` to
///   the successor, wrapping at the ends.
#[must_use]
pub fn select_next(
    current: Option<CandidateId>,
    candidates: &[Candidate],
    direction: Direction,
) -> Option<CandidateId> {
    if candidates.is_empty() {
        return None;
    }
    let Some(current_idx) = current.and_then(|id| candidates.iter().position(|c| c.id() == id))
    else {
        return candidates.first().map(Candidate::id);
    };

    let c0 = candidates[current_idx].center();
    let (ax, ay) = direction.axis();

    let mut best: Option<CandidateId> = None;
    let mut best_score = f64::NEG_INFINITY;
    for el in candidates {
        if el.id() == candidates[current_idx].id() {
            continue;
        }
        let c1 = el.center();
        let (vx, vy) = (c1.x - c0.x, c1.y - c0.y);
        let proj = vx * ax + vy * ay;
        if proj <= 0.0 {
            // Strictly behind or exactly orthogonal.
            continue;
        }
        let orth = (vx * ay - vy * ax).abs();
        let d = c0.distance_to(c1).max(DISTANCE_FLOOR);
        let score = proj / d - ORTHO_PENALTY_WEIGHT * orth / d;
        // Strict comparison keeps the earliest candidate on ties.
        if score > best_score {
            best_score = score;
            best = Some(el.id());
        }
    }

    if let Some(id) = best {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "selector.pick",
            ?direction,
            winner = id.raw(),
            score = best_score
        );
        return Some(id);
    }

    // Nothing in the half-plane: cycle the snapshot as a ring.
    let len = candidates.len();
    let fallback_idx = if direction.fallback_is_backward() {
        (current_idx + len - 1) % len
    } else {
        (current_idx + 1) % len
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(
        message = "selector.fallback",
        ?direction,
        from = current_idx,
        to = fallback_idx
    );
    Some(candidates[fallback_idx].id())
}
