use std::time::Duration;

use lfv_core::{update, AppState, AppViewModel, CourseId, Msg};
use lfv_engine::EngineHandle;

use super::effects::EffectRunner;

/// Owns the page state; its methods are the only way the page changes.
pub struct PageController {
    state: AppState,
    effects: EffectRunner,
}

impl PageController {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(engine),
        }
    }

    /// Page mount: kicks off the recent-courses load.
    pub fn start(&mut self) {
        self.dispatch(Msg::Mounted);
    }

    /// Page unmount. Requests still in flight are abandoned.
    pub fn stop(&mut self) {
        self.dispatch(Msg::Unmounted);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::InputChanged(text.into()));
    }

    pub fn use_example(&mut self) {
        self.dispatch(Msg::ExampleRequested);
    }

    pub fn submit(&mut self) {
        self.dispatch(Msg::SubmitClicked);
    }

    pub fn select_recent_course(&mut self, course_id: CourseId) {
        self.dispatch(Msg::RecentCourseSelected { course_id });
    }

    /// Applies every engine completion that has already arrived.
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(msg) = self.effects.try_next() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// Blocks until one engine completion is applied or `timeout` passes.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.effects.next_within(timeout) {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Waits until no request is outstanding, up to `timeout`.
    #[cfg(test)]
    pub fn settle(&mut self, timeout: Duration) {
        use std::time::Instant;

        let deadline = Instant::now() + timeout;
        while self.state.awaited_request().is_some() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.wait_for_event(remaining) {
                break;
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Returns a fresh view if anything changed since the last render.
    pub fn take_render(&mut self) -> Option<AppViewModel> {
        let view = self.state.view();
        self.state.consume_dirty().then_some(view)
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }
}
