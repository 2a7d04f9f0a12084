use std::rc::Rc;

use yew::prelude::*;

use crate::state::view::View;

/// The whole of the deck's mutable state: which section is showing and
/// whether dark mode is on. Everything else on screen is static
/// content derived from these two fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckState {
    pub view: View,
    pub dark: bool,
}

impl DeckState {
    pub fn new(view: View, dark: bool) -> Self {
        Self { view, dark }
    }
}

/// State transitions the UI can request. Navigation carries the target
/// section, so any section is reachable from any other in one step.
pub enum DeckAction {
    Navigate(View),
    ToggleTheme,
}

impl Reducible for DeckState {
    type Action = DeckAction;

    fn reduce(self: Rc<Self>, action: DeckAction) -> Rc<Self> {
        match action {
            // Re-selecting the active section is a no-op. Returning the
            // same allocation keeps the rendered tree untouched, so the
            // section is not remounted and its entry animation does not
            // replay.
            DeckAction::Navigate(view) if view == self.view => self,
            DeckAction::Navigate(view) => Rc::new(Self { view, dark: self.dark }),
            DeckAction::ToggleTheme => Rc::new(Self {
                view: self.view,
                dark: !self.dark,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: &Rc<DeckState>, action: DeckAction) -> Rc<DeckState> {
        Rc::clone(state).reduce(action)
    }

    #[test]
    fn test_navigate_replaces_active_view() {
        let state = Rc::new(DeckState::new(View::Overview, false));
        let next = dispatch(&state, DeckAction::Navigate(View::Market));
        assert_eq!(next.view, View::Market);
    }

    #[test]
    fn test_navigate_to_active_view_returns_same_state() {
        let state = Rc::new(DeckState::new(View::Market, true));
        let next = dispatch(&state, DeckAction::Navigate(View::Market));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_any_view_is_reachable_from_any_other() {
        for from in View::ALL {
            for to in View::ALL {
                let state = Rc::new(DeckState::new(from, false));
                let next = dispatch(&state, DeckAction::Navigate(to));
                assert_eq!(next.view, to, "{from:?} -> {to:?}");
            }
        }
    }

    #[test]
    fn test_navigate_preserves_theme() {
        let state = Rc::new(DeckState::new(View::Overview, true));
        let next = dispatch(&state, DeckAction::Navigate(View::Fundraise));
        assert!(next.dark);
    }

    #[test]
    fn test_toggle_flips_dark_flag() {
        let state = Rc::new(DeckState::new(View::Overview, false));
        let dark = dispatch(&state, DeckAction::ToggleTheme);
        assert!(dark.dark);
        let light = dispatch(&dark, DeckAction::ToggleTheme);
        assert!(!light.dark);
    }

    #[test]
    fn test_toggle_preserves_active_view() {
        let state = Rc::new(DeckState::new(View::Roadmap, false));
        let next = dispatch(&state, DeckAction::ToggleTheme);
        assert_eq!(next.view, View::Roadmap);
    }
}
