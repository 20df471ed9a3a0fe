use super::*;

fn project(id: u32, title: &str, desc: &str) -> Project {
    Project {
        id,
        title: title.to_owned(),
        summary: None,
        desc: desc.to_owned(),
        tech: vec!["Rust".to_owned()],
        details: "details".to_owned(),
        img: None,
        demo: None,
        repo: None,
    }
}

fn started_ticket(outcome: OpenOutcome) -> Ticket {
    match outcome {
        OpenOutcome::Started { ticket, .. } => ticket,
        OpenOutcome::Replaced => panic!("expected a started transition"),
    }
}

// =============================================================
// ModalMachine
// =============================================================

#[test]
fn machine_starts_closed() {
    let machine = ModalMachine::default();
    assert_eq!(machine.phase(), ModalPhase::Closed);
    assert!(!machine.is_visible());
}

#[test]
fn full_open_close_cycle() {
    let mut machine = ModalMachine::default();
    let open = machine.request_open();
    assert!(matches!(open, OpenOutcome::Started { from_closed: true, .. }));
    assert_eq!(machine.phase(), ModalPhase::Opening);
    assert!(machine.finish_open(started_ticket(open)));
    assert_eq!(machine.phase(), ModalPhase::Open);

    let close = machine.request_close().unwrap();
    assert_eq!(machine.phase(), ModalPhase::Closing);
    assert!(machine.finish_close(close));
    assert_eq!(machine.phase(), ModalPhase::Closed);
}

#[test]
fn close_while_closed_is_a_noop() {
    let mut machine = ModalMachine::default();
    assert!(machine.request_close().is_none());
    assert_eq!(machine.phase(), ModalPhase::Closed);
}

#[test]
fn open_while_open_only_replaces_content() {
    let mut machine = ModalMachine::default();
    let ticket = started_ticket(machine.request_open());
    machine.finish_open(ticket);
    assert_eq!(machine.request_open(), OpenOutcome::Replaced);
    assert_eq!(machine.phase(), ModalPhase::Open);
}

#[test]
fn stale_close_timer_does_not_hide_reopened_dialog() {
    let mut machine = ModalMachine::default();
    let open = started_ticket(machine.request_open());
    machine.finish_open(open);

    let close = machine.request_close().unwrap();
    let reopen = machine.request_open();
    assert!(matches!(reopen, OpenOutcome::Started { from_closed: false, .. }));

    // The close timer from before the reopen fires late.
    assert!(!machine.finish_close(close));
    assert_eq!(machine.phase(), ModalPhase::Opening);
    assert!(machine.finish_open(started_ticket(reopen)));
    assert_eq!(machine.phase(), ModalPhase::Open);
}

#[test]
fn stale_open_timer_does_not_reopen_closing_dialog() {
    let mut machine = ModalMachine::default();
    let open = started_ticket(machine.request_open());
    let close = machine.request_close().unwrap();
    assert!(!machine.finish_open(open));
    assert_eq!(machine.phase(), ModalPhase::Closing);
    assert!(machine.finish_close(close));
}

// =============================================================
// ModalCore
// =============================================================

#[test]
fn trigger_with_known_id_opens_that_project() {
    let mut core = ModalCore::new(vec![project(1, "One", "first"), project(2, "Two", "second")]);
    match core.trigger(Some("2")) {
        TriggerOutcome::Show { view, open } => {
            assert_eq!(view.title, "Two");
            assert_eq!(view.description, "second");
            assert!(matches!(open, OpenOutcome::Started { .. }));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(core.machine().phase(), ModalPhase::Opening);
}

#[test]
fn trigger_with_unknown_id_changes_nothing() {
    let mut core = ModalCore::new(vec![project(1, "One", "first")]);
    assert_eq!(core.trigger(Some("9")), TriggerOutcome::NotFound(9));
    assert_eq!(core.machine().phase(), ModalPhase::Closed);
}

#[test]
fn trigger_without_id_changes_nothing() {
    let mut core = ModalCore::new(vec![project(1, "One", "first")]);
    assert_eq!(core.trigger(None), TriggerOutcome::InvalidId);
    assert_eq!(core.trigger(Some("project-1")), TriggerOutcome::InvalidId);
    assert_eq!(core.machine().phase(), ModalPhase::Closed);
}

#[test]
fn repeated_trigger_renders_identical_content() {
    let mut core = ModalCore::new(vec![project(3, "Three", "third")]);
    let first = core.trigger(Some("3"));
    let second = core.trigger(Some("3"));
    let (TriggerOutcome::Show { view: a, .. }, TriggerOutcome::Show { view: b, open }) = (first, second) else {
        panic!("both triggers should show the project");
    };
    assert_eq!(a, b);
    assert_eq!(open, OpenOutcome::Replaced);
}

#[test]
fn attach_projects_replaces_lookup_list() {
    let mut core = ModalCore::default();
    assert_eq!(core.trigger(Some("1")), TriggerOutcome::NotFound(1));
    core.attach_projects(vec![project(1, "One", "first")]);
    assert_eq!(core.projects().len(), 1);
    assert!(matches!(core.trigger(Some("1")), TriggerOutcome::Show { .. }));
}
