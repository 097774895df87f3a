#![forbid(unsafe_code)]

//! Session: stateful focus controller and its collaborator seams.
//!
//! The session owns exactly one piece of mutable state (the active
//! candidate slot) and talks to three injected collaborators: a
//! [`Surface`] that renders focus, an [`ActivationHost`] that performs
//! activation side effects, and a [`NavSink`] that records navigation
//! events best-effort.

pub mod dispatch;
pub mod session;
pub mod sink;
pub mod surface;

pub use dispatch::{ActivationHost, DispatchError, Dispatcher, Result};
pub use session::{FocusSession, InputEvent};
pub use sink::{NavEvent, NavEventKind, NavSink, NullSink};
pub use surface::Surface;
