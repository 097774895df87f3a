//! End-to-end focus session scenarios with mock collaborators.
//!
//! Drives a session over a 2x2 grid the way a remote-control user would
//! and checks the full event stream seen by the observability sink.

use snav_core::{Action, Candidate, CandidateId, Direction, Point};
use snav_session::{
    ActivationHost, FocusSession, InputEvent, NavEvent, NavEventKind, NavSink, Result, Surface,
};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct GridSurface {
    candidates: Rc<RefCell<Vec<Candidate>>>,
}

impl Surface for GridSurface {
    fn snapshot(&self) -> Vec<Candidate> {
        self.candidates.borrow().clone()
    }
    fn mark_active(&mut self, _id: CandidateId) {}
    fn clear_active(&mut self, _id: CandidateId) {}
}

#[derive(Default)]
struct ClickHost {
    clicked: Vec<CandidateId>,
}

impl ActivationHost for ClickHost {
    fn can_click(&self, _id: CandidateId) -> bool {
        true
    }
    fn click(&mut self, id: CandidateId) -> Result<()> {
        self.clicked.push(id);
        Ok(())
    }
    fn follow_link(&mut self, _id: CandidateId) -> Result<()> {
        Ok(())
    }
    fn submit_form(&mut self, _id: CandidateId) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Default)]
struct CapturingSink {
    events: Rc<RefCell<Vec<NavEvent>>>,
}

impl NavSink for CapturingSink {
    fn record(&self, event: &NavEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Sink whose recording "fails" internally; per contract the failure is
/// swallowed and invisible to the session.
#[derive(Clone, Copy, Default)]
struct FailingSink;

impl NavSink for FailingSink {
    fn record(&self, _event: &NavEvent) {
        // Simulates a transport error absorbed inside the sink.
    }
}

fn grid() -> Vec<Candidate> {
    vec![
        Candidate::new(CandidateId::new(1), Point::new(0.0, 0.0), "A").action(Action::Click),
        Candidate::new(CandidateId::new(2), Point::new(100.0, 0.0), "B").action(Action::Click),
        Candidate::new(CandidateId::new(3), Point::new(0.0, 100.0), "C").action(Action::Click),
        Candidate::new(CandidateId::new(4), Point::new(100.0, 100.0), "D").action(Action::Click),
    ]
}

#[test]
fn full_cycle_around_the_grid_returns_to_start() {
    let surface = GridSurface {
        candidates: Rc::new(RefCell::new(grid())),
    };
    let mut session = FocusSession::new(surface, ClickHost::default(), FailingSink);

    // First render: initial focus lands on A.
    session.handle_event(InputEvent::CandidatesChanged);
    assert_eq!(session.active(), Some(CandidateId::new(1)));

    // A -> B -> D -> C -> A.
    session.handle_event(InputEvent::Direction(Direction::Right));
    assert_eq!(session.active(), Some(CandidateId::new(2)));
    session.handle_event(InputEvent::Direction(Direction::Down));
    assert_eq!(session.active(), Some(CandidateId::new(4)));
    session.handle_event(InputEvent::Direction(Direction::Left));
    assert_eq!(session.active(), Some(CandidateId::new(3)));
    session.handle_event(InputEvent::Direction(Direction::Up));
    assert_eq!(session.active(), Some(CandidateId::new(1)));
}

#[test]
fn sink_sees_input_focus_and_activation_events() {
    let surface = GridSurface {
        candidates: Rc::new(RefCell::new(grid())),
    };
    let sink = CapturingSink::default();
    let mut session = FocusSession::new(surface, ClickHost::default(), sink.clone());

    session.handle_event(InputEvent::CandidatesChanged);
    session.handle_event(InputEvent::Direction(Direction::Right));
    session.handle_event(InputEvent::Activate);

    let events = sink.events.borrow();
    let kinds: Vec<NavEventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NavEventKind::FocusChanged, // initial focus on A
            NavEventKind::Input,        // the Right keypress
            NavEventKind::FocusChanged, // A -> B
            NavEventKind::Activated,    // Enter on B
        ]
    );

    let input = &events[1];
    assert_eq!(input.direction, Some(Direction::Right));
    assert_eq!(input.index, Some(0));
    assert_eq!(input.label.as_deref(), Some("A"));

    let focused = &events[2];
    assert_eq!(focused.index, Some(1));
    assert_eq!(focused.label.as_deref(), Some("B"));

    let activated = &events[3];
    assert_eq!(activated.index, Some(1));
    assert_eq!(activated.label.as_deref(), Some("B"));
}

#[test]
fn event_labels_are_truncated_to_fifty_graphemes() {
    let long_label = "menu entry ".repeat(20);
    let surface = GridSurface {
        candidates: Rc::new(RefCell::new(vec![Candidate::new(
            CandidateId::new(1),
            Point::new(0.0, 0.0),
            long_label,
        )])),
    };
    let sink = CapturingSink::default();
    let mut session = FocusSession::new(surface, ClickHost::default(), sink.clone());

    session.handle_event(InputEvent::CandidatesChanged);

    let events = sink.events.borrow();
    let label = events[0].label.as_deref().expect("focus event has label");
    assert_eq!(label.chars().count(), 50);
}

#[test]
fn mutation_storm_never_leaves_a_stale_active() {
    let candidates = Rc::new(RefCell::new(grid()));
    let surface = GridSurface {
        candidates: Rc::clone(&candidates),
    };
    let mut session = FocusSession::new(surface, ClickHost::default(), FailingSink);
    session.handle_event(InputEvent::CandidatesChanged);

    // Remove whatever is active, notify, repeat until the view is empty.
    for _ in 0..4 {
        let active = session.active().expect("active until the set empties");
        candidates.borrow_mut().retain(|c| c.id() != active);
        session.handle_event(InputEvent::CandidatesChanged);
        let remaining = candidates.borrow().len();
        if remaining == 0 {
            assert_eq!(session.active(), None);
        } else {
            let healed = session.active().expect("non-empty set keeps focus");
            assert!(candidates.borrow().iter().any(|c| c.id() == healed));
        }
    }
}

#[test]
fn directional_input_keeps_navigating_after_activation() {
    let surface = GridSurface {
        candidates: Rc::new(RefCell::new(grid())),
    };
    let mut session = FocusSession::new(surface, ClickHost::default(), FailingSink);
    session.handle_event(InputEvent::CandidatesChanged);
    session.handle_event(InputEvent::Activate);
    session.handle_event(InputEvent::Direction(Direction::Down));
    assert_eq!(session.active(), Some(CandidateId::new(3)));
    assert_eq!(
        session.dispatcher_mut().host_mut().clicked.as_slice(),
        &[CandidateId::new(1)]
    );
}
