use std::cell::RefCell;
use std::rc::Rc;

use yew::UseStateHandle;

use irozuke_core::ViewState;

/// Pairs the rendered state handle with a live mirror, so async completions
/// and window-level listeners always mutate the latest view state rather than
/// the value captured at the previous render.
#[derive(Clone)]
pub(crate) struct ViewStore {
    state: UseStateHandle<ViewState>,
    live: Rc<RefCell<ViewState>>,
}

impl ViewStore {
    pub(crate) fn new(state: UseStateHandle<ViewState>, live: Rc<RefCell<ViewState>>) -> Self {
        Self { state, live }
    }

    pub(crate) fn get(&self) -> ViewState {
        self.live.borrow().clone()
    }

    pub(crate) fn update<R>(&self, mutate: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut next = self.live.borrow().clone();
        let result = mutate(&mut next);
        *self.live.borrow_mut() = next.clone();
        self.state.set(next);
        result
    }
}
