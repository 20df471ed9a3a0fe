//! Project-details dialog state.
//!
//! The dialog moves `Closed -> Opening -> Open` on a successful trigger and
//! `Open -> Closing -> Closed` on close. The `Opening`/`Closing` legs finish
//! on a timer, so every transition hands out a [`Ticket`] stamped with a
//! generation number. A timer completing with a stale ticket is ignored,
//! which keeps a quick close-then-reopen from hiding the new dialog.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::model::{Project, find_project};
use crate::util::text::parse_leading_id;
use crate::views::ProjectDetailView;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Proof that a delayed completion belongs to the current transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Result of asking the dialog to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new opening transition began. `from_closed` is false when it
    /// interrupted a close, in which case the saved focus target is kept.
    Started { ticket: Ticket, from_closed: bool },
    /// Already opening/open; only the content changes.
    Replaced,
}

#[derive(Clone, Debug, Default)]
pub struct ModalMachine {
    phase: ModalPhase,
    generation: u64,
}

impl ModalMachine {
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether Escape/backdrop clicks should close the dialog.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    pub fn request_open(&mut self) -> OpenOutcome {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => OpenOutcome::Replaced,
            ModalPhase::Closed | ModalPhase::Closing => {
                let from_closed = self.phase == ModalPhase::Closed;
                self.phase = ModalPhase::Opening;
                OpenOutcome::Started { ticket: self.next_ticket(), from_closed }
            }
        }
    }

    /// Complete an opening transition. Returns `false` for stale tickets.
    pub fn finish_open(&mut self, ticket: Ticket) -> bool {
        if self.phase != ModalPhase::Opening || !self.is_current(ticket) {
            return false;
        }
        self.phase = ModalPhase::Open;
        true
    }

    /// Begin closing; `None` if the dialog is not visible.
    pub fn request_close(&mut self) -> Option<Ticket> {
        if !self.is_visible() {
            return None;
        }
        self.phase = ModalPhase::Closing;
        Some(self.next_ticket())
    }

    /// Complete a closing transition. Returns `false` for stale tickets.
    pub fn finish_close(&mut self, ticket: Ticket) -> bool {
        if self.phase != ModalPhase::Closing || !self.is_current(ticket) {
            return false;
        }
        self.phase = ModalPhase::Closed;
        true
    }

    fn next_ticket(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// Outcome of a "show details" activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The project was found; render `view` and run `open`.
    Show { view: ProjectDetailView, open: OpenOutcome },
    /// The id parsed but no loaded project has it. Nothing changes.
    NotFound(u32),
    /// The trigger carried no usable id. Nothing changes.
    InvalidId,
}

/// Project list plus dialog machine.
#[derive(Clone, Debug, Default)]
pub struct ModalCore {
    projects: Vec<Project>,
    machine: ModalMachine,
}

impl ModalCore {
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects, machine: ModalMachine::default() }
    }

    /// Replace the project list after a (re-)render.
    pub fn attach_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn machine(&self) -> &ModalMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut ModalMachine {
        &mut self.machine
    }

    /// Resolve a trigger's raw `data-id` and, on a match, start opening.
    pub fn trigger(&mut self, raw_id: Option<&str>) -> TriggerOutcome {
        let Some(id) = raw_id.and_then(parse_leading_id) else {
            log::warn!("project trigger without a usable data-id: {raw_id:?}");
            return TriggerOutcome::InvalidId;
        };
        let Some(project) = find_project(&self.projects, id) else {
            log::warn!("no loaded project with id {id}; ignoring trigger");
            return TriggerOutcome::NotFound(id);
        };
        let view = ProjectDetailView::from(project);
        TriggerOutcome::Show { view, open: self.machine.request_open() }
    }
}
