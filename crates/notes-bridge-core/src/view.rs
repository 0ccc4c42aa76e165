//! Start/editor view state.

use crate::platform::{Surface, ViewSurfaces};

/// Which top-level surface is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Start,
    Editor,
}

impl ViewState {
    pub fn surface(self) -> Surface {
        match self {
            ViewState::Start => Surface::Start,
            ViewState::Editor => Surface::Editor,
        }
    }

    fn other(self) -> Self {
        match self {
            ViewState::Start => ViewState::Editor,
            ViewState::Editor => ViewState::Start,
        }
    }
}

/// Keeps exactly one of the two surfaces visible.
///
/// Transitions are idempotent and never fail; re-entering the current
/// state re-applies the same visibility.
pub struct ViewStateController<S> {
    surfaces: S,
    state: ViewState,
}

impl<S: ViewSurfaces> ViewStateController<S> {
    pub fn new(surfaces: S) -> Self {
        Self {
            surfaces,
            state: ViewState::Start,
        }
    }

    /// Apply the current state to the surfaces without transitioning.
    pub fn present_initial(&self) {
        self.apply(self.state);
    }

    pub fn show_editor(&mut self) {
        self.transition(ViewState::Editor);
    }

    pub fn show_start_page(&mut self) {
        self.transition(ViewState::Start);
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    fn transition(&mut self, next: ViewState) {
        tracing::debug!(from = ?self.state, to = ?next, "view transition");
        self.apply(next);
        self.state = next;
    }

    fn apply(&self, state: ViewState) {
        self.surfaces.set_visible(state.other().surface(), false);
        self.surfaces.set_visible(state.surface(), true);
    }
}
