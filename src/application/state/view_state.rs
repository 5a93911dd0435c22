//! The single mutable value behind the library screen.
//!
//! `ViewState` is a plain `Copy` value. Every change goes through [`reduce`],
//! which maps the current state and one [`ViewEvent`] to the next state
//! without side effects.

use crate::domain::entities::{Appearance, Category, View};

/// Everything that determines what the library screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Active category filter on the book listing.
    pub category: Category,
    /// Active top-level view.
    pub view: View,
    /// Whether the narrow-layout navigation menu is open.
    pub menu_open: bool,
    /// Entry highlighted in the navigation menu.
    pub menu_highlight: View,
    /// Index of the riddle shown in the banner.
    pub prompt_index: usize,
    /// Length of the riddle list the index wraps over.
    pub prompt_count: usize,
    /// Light or dark colour scheme.
    pub appearance: Appearance,
}

/// A discrete input to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// A category was picked on the filter bar.
    SelectCategory(Category),
    /// A view was picked from the header navigation.
    SelectView(View),
    /// A view was picked from the navigation menu; also closes the menu.
    MenuSelect(View),
    /// Open or close the navigation menu.
    ToggleMenu,
    /// Move the menu highlight up, wrapping.
    MenuUp,
    /// Move the menu highlight down, wrapping.
    MenuDown,
    /// Rotation timer fired.
    AdvancePrompt,
    /// Switch between light and dark.
    ToggleTheme,
}

impl ViewState {
    /// Initial state: all categories, book listing, menu closed, first riddle.
    #[must_use]
    pub const fn new(prompt_count: usize, appearance: Appearance) -> Self {
        Self {
            category: Category::All,
            view: View::Books,
            menu_open: false,
            menu_highlight: View::Books,
            prompt_index: 0,
            prompt_count,
            appearance,
        }
    }

    /// The category filter bar is only shown on the book listing.
    #[must_use]
    pub fn shows_category_bar(&self) -> bool {
        self.view == View::Books
    }

    /// Index following `prompt_index`, modulo the riddle count.
    #[must_use]
    pub const fn next_prompt_index(&self) -> usize {
        match (self.prompt_index + 1).checked_rem(self.prompt_count) {
            Some(index) => index,
            None => 0,
        }
    }
}

/// Applies one event to a state and returns the resulting state.
#[must_use]
pub fn reduce(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::SelectCategory(category) => ViewState { category, ..state },
        ViewEvent::SelectView(view) => ViewState {
            view,
            menu_highlight: view,
            ..state
        },
        ViewEvent::MenuSelect(view) => ViewState {
            view,
            menu_highlight: view,
            menu_open: false,
            ..state
        },
        ViewEvent::ToggleMenu => ViewState {
            menu_open: !state.menu_open,
            menu_highlight: state.view,
            ..state
        },
        ViewEvent::MenuUp if state.menu_open => ViewState {
            menu_highlight: state.menu_highlight.previous(),
            ..state
        },
        ViewEvent::MenuDown if state.menu_open => ViewState {
            menu_highlight: state.menu_highlight.next(),
            ..state
        },
        ViewEvent::MenuUp | ViewEvent::MenuDown => state,
        ViewEvent::AdvancePrompt => ViewState {
            prompt_index: state.next_prompt_index(),
            ..state
        },
        ViewEvent::ToggleTheme => ViewState {
            appearance: state.appearance.toggled(),
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Genre;
    use test_case::test_case;

    fn initial() -> ViewState {
        ViewState::new(5, Appearance::Dark)
    }

    fn advance(state: ViewState, times: usize) -> ViewState {
        (0..times).fold(state, |s, _| reduce(s, ViewEvent::AdvancePrompt))
    }

    #[test]
    fn test_initial_state() {
        let state = initial();
        assert_eq!(state.category, Category::All);
        assert_eq!(state.view, View::Books);
        assert!(!state.menu_open);
        assert_eq!(state.prompt_index, 0);
        assert!(state.shows_category_bar());
    }

    #[test]
    fn test_select_category_changes_only_category() {
        let state = initial();
        let next = reduce(state, ViewEvent::SelectCategory(Category::Genre(Genre::Play)));

        assert_eq!(next.category, Category::Genre(Genre::Play));
        assert_eq!(ViewState { category: state.category, ..next }, state);
    }

    #[test_case(View::Books, true ; "books_shows_bar")]
    #[test_case(View::Writers, false ; "writers_hides_bar")]
    #[test_case(View::Community, false ; "community_hides_bar")]
    #[test_case(View::Profile, false ; "profile_hides_bar")]
    fn test_category_bar_visibility(view: View, expected: bool) {
        let state = reduce(initial(), ViewEvent::SelectView(view));
        assert_eq!(state.view, view);
        assert_eq!(state.shows_category_bar(), expected);
    }

    #[test]
    fn test_views_transition_freely() {
        for from in View::ALL {
            for to in View::ALL {
                let state = reduce(initial(), ViewEvent::SelectView(from));
                assert_eq!(reduce(state, ViewEvent::SelectView(to)).view, to);
            }
        }
    }

    #[test]
    fn test_category_survives_view_round_trip() {
        let state = reduce(initial(), ViewEvent::SelectCategory(Category::Genre(Genre::Novel)));
        let state = reduce(state, ViewEvent::SelectView(View::Writers));
        let state = reduce(state, ViewEvent::SelectView(View::Books));
        assert_eq!(state.category, Category::Genre(Genre::Novel));
    }

    #[test]
    fn test_toggle_menu_twice_restores_flag() {
        let state = initial();
        let once = reduce(state, ViewEvent::ToggleMenu);
        assert!(once.menu_open);
        assert_eq!(reduce(once, ViewEvent::ToggleMenu).menu_open, state.menu_open);
    }

    #[test]
    fn test_menu_select_closes_menu() {
        let state = reduce(initial(), ViewEvent::ToggleMenu);
        let state = reduce(state, ViewEvent::MenuSelect(View::Community));
        assert!(!state.menu_open);
        assert_eq!(state.view, View::Community);
        assert!(!state.shows_category_bar());
    }

    #[test]
    fn test_menu_highlight_starts_at_active_view_and_wraps() {
        let state = reduce(initial(), ViewEvent::SelectView(View::Profile));
        let state = reduce(state, ViewEvent::ToggleMenu);
        assert_eq!(state.menu_highlight, View::Profile);

        let state = reduce(state, ViewEvent::MenuDown);
        assert_eq!(state.menu_highlight, View::Books);
        let state = reduce(state, ViewEvent::MenuUp);
        assert_eq!(state.menu_highlight, View::Profile);
    }

    #[test]
    fn test_menu_navigation_ignored_when_closed() {
        let state = initial();
        assert_eq!(reduce(state, ViewEvent::MenuDown), state);
        assert_eq!(reduce(state, ViewEvent::MenuUp), state);
    }

    #[test]
    fn test_prompt_cycle_returns_to_start() {
        for start in 0..5 {
            let state = ViewState {
                prompt_index: start,
                ..initial()
            };
            assert_eq!(advance(state, 5).prompt_index, start);
        }
    }

    #[test_case(1, 1 ; "one_firing")]
    #[test_case(4, 4 ; "last_index")]
    #[test_case(5, 0 ; "full_cycle")]
    #[test_case(12, 2 ; "twelve_firings")]
    fn test_prompt_index_after_firings(firings: usize, expected: usize) {
        assert_eq!(advance(initial(), firings).prompt_index, expected);
    }

    #[test]
    fn test_prompt_index_stays_zero_without_prompts() {
        let state = ViewState::new(0, Appearance::Dark);
        assert_eq!(advance(state, 3).prompt_index, 0);
    }

    #[test]
    fn test_toggle_theme() {
        let state = reduce(initial(), ViewEvent::ToggleTheme);
        assert_eq!(state.appearance, Appearance::Light);
        assert_eq!(reduce(state, ViewEvent::ToggleTheme).appearance, Appearance::Dark);
    }
}
