#![forbid(unsafe_code)]

//! snav public facade crate.
//!
//! Pulls the selector (`snav-core`) and the session layer
//! (`snav-session`) into one dependency with a single prelude, so
//! embedders wiring up directional navigation import from here.

pub mod prelude {
    pub use snav_core as core;
    pub use snav_session as session;

    pub use snav_core::{Action, Candidate, CandidateId, Direction, Point, select_next};
    pub use snav_session::{
        ActivationHost, DispatchError, Dispatcher, FocusSession, InputEvent, NavEvent,
        NavEventKind, NavSink, NullSink, Surface,
    };
}
