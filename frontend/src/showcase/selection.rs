use std::rc::Rc;

use yew::prelude::*;

use super::catalog::{Catalog, CatalogItem};

/// Which catalog item the showcase panel is currently presenting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    catalog: Catalog<'static>,
    active_id: u32,
}

pub enum SelectionAction {
    Select(u32),
}

impl SelectionState {
    pub fn new(catalog: Catalog<'static>) -> Self {
        Self {
            active_id: catalog.first().id,
            catalog,
        }
    }

    pub fn active_id(&self) -> u32 {
        self.active_id
    }

    /// Unknown ids leave the selection untouched.
    pub fn select(&mut self, id: u32) -> bool {
        if self.catalog.contains(id) && self.active_id != id {
            self.active_id = id;
            true
        } else {
            false
        }
    }

    pub fn active_item(&self) -> &'static CatalogItem {
        self.catalog
            .find(self.active_id)
            .unwrap_or_else(|| self.catalog.first())
    }

    pub fn is_active(&self, id: u32) -> bool {
        self.active_id == id
    }

    pub fn catalog(&self) -> Catalog<'static> {
        self.catalog
    }
}

impl Reducible for SelectionState {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SelectionAction::Select(id) => {
                let mut next = (*self).clone();
                if next.select(id) {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::catalog::{services, tests::item};

    static ITEMS: [CatalogItem; 3] = [item(10), item(20), item(30)];

    fn state() -> SelectionState {
        SelectionState::new(Catalog::new(&ITEMS).expect("test catalog should build"))
    }

    #[test]
    fn starts_on_first_item() {
        assert_eq!(state().active_item(), &ITEMS[0]);
        let services = SelectionState::new(services());
        assert_eq!(services.active_item(), services.catalog().first());
    }

    #[test]
    fn select_moves_to_every_known_id() {
        let mut state = state();
        for item in ITEMS.iter() {
            state.select(item.id);
            assert_eq!(state.active_item().id, item.id);
            assert!(state.is_active(item.id));
        }
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut state = state();
        state.select(20);
        assert!(!state.select(99));
        assert_eq!(state.active_item().id, 20);
        assert!(!state.select(0));
        assert_eq!(state.active_id(), 20);
    }

    #[test]
    fn reducer_keeps_same_rc_on_no_op() {
        let state = Rc::new(state());
        let same = state.clone().reduce(SelectionAction::Select(99));
        assert!(Rc::ptr_eq(&state, &same));

        let same = state.clone().reduce(SelectionAction::Select(10));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(SelectionAction::Select(30));
        assert_eq!(moved.active_item().id, 30);
        assert_eq!(state.active_item().id, 10);
    }
}
