use std::rc::Rc;

use yew::prelude::*;

/// Index of the card under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
}

pub enum HoverAction {
    /// Pointer entered or was pressed on a card.
    Enter(usize),
    /// Pointer left or was released.
    Leave,
}

impl HoverState {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }
}

impl Reducible for HoverState {
    type Action = HoverAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let hovered = match action {
            HoverAction::Enter(index) => Some(index),
            HoverAction::Leave => None,
        };
        if hovered == self.hovered {
            self
        } else {
            Rc::new(HoverState { hovered })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_leave() {
        let state = Rc::new(HoverState::default());
        assert_eq!(state.hovered(), None);

        let state = state.reduce(HoverAction::Enter(2));
        assert!(state.is_hovered(2));
        assert!(!state.is_hovered(1));

        let state = state.reduce(HoverAction::Enter(3));
        assert_eq!(state.hovered(), Some(3));

        let state = state.reduce(HoverAction::Leave);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn repeated_action_keeps_state() {
        let state = Rc::new(HoverState::default()).reduce(HoverAction::Enter(1));
        let again = state.clone().reduce(HoverAction::Enter(1));
        assert!(Rc::ptr_eq(&state, &again));
    }
}
