//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info, trace};

use crate::application::{ViewEvent, ViewState, reduce};
use crate::domain::entities::{Appearance, View};
use crate::domain::keybinding::Action;
use crate::infrastructure::{AppConfig, Catalogue, RotationTimer};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::LibraryScreen;

pub struct App {
    state: ViewState,
    catalogue: Catalogue,
    commands: CommandRegistry,
    theme: Theme,
    rotation_interval: Duration,
    narrow_width: u16,
    viewport_width: u16,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(catalogue: Catalogue, config: &AppConfig, appearance: Appearance) -> Self {
        Self {
            state: ViewState::new(catalogue.riddles().len(), appearance),
            catalogue,
            commands: CommandRegistry::with_overrides(&config.keybindings),
            theme: Theme::new(&config.theme.accent_color, appearance),
            rotation_interval: config.ui.rotation_interval(),
            narrow_width: config.ui.narrow_width,
            viewport_width: u16::MAX,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.viewport_width < self.narrow_width
    }

    /// The rotation timer lives exactly as long as this call.
    ///
    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let (rotation_tx, mut rotation_rx) = mpsc::unbounded_channel();
        let rotation = RotationTimer::start(
            self.rotation_interval,
            rotation_tx,
            ViewEvent::AdvancePrompt,
        );

        let result = self.run_event_loop(terminal, &mut rotation_rx).await;

        drop(rotation);
        match &result {
            Ok(()) => info!("Application exiting normally"),
            Err(e) => error!(error = %e, "Application exiting with error"),
        }
        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        rotation_rx: &mut mpsc::UnboundedReceiver<ViewEvent>,
    ) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        self.set_viewport_width(terminal.size()?.width);
        terminal.draw(|frame| self.render(frame))?;

        while !self.should_quit {
            tokio::select! {
                Some(event) = rotation_rx.recv() => {
                    self.dispatch(event);
                }

                maybe_event = terminal_events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if self.handle_terminal_event(&event) == EventResult::Exit {
                            self.should_quit = true;
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("Terminal event stream closed");
                        self.should_quit = true;
                    }
                },
            }

            if !self.should_quit {
                terminal.draw(|frame| self.render(frame))?;
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        if let Some(width) = EventHandler::resized_width(event) {
            self.set_viewport_width(width);
            return EventResult::Continue;
        }

        match EventHandler::as_key_press(event) {
            Some(key) => self.handle_key(key),
            None => EventResult::Continue,
        }
    }

    /// Tracks the terminal width; leaving the compact layout closes the menu.
    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
        if !self.is_compact() && self.state.menu_open {
            debug!(width, "Layout widened, closing menu");
            self.dispatch(ViewEvent::ToggleMenu);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width != self.viewport_width {
            self.set_viewport_width(area.width);
        }

        frame.render_widget(
            LibraryScreen::new(&self.catalogue, self.state, &self.commands)
                .theme(self.theme)
                .compact(self.is_compact()),
            area,
        );
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_force_quit(&key) {
            return EventResult::Exit;
        }

        match self.commands.find_action(key) {
            Some(action) => self.handle_action(action),
            None => {
                trace!(key = ?key.code, "Unbound key");
                EventResult::Continue
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> EventResult {
        let state = self.state;

        let event = match action {
            Action::Quit => return EventResult::Exit,
            Action::Cancel if state.menu_open => ViewEvent::ToggleMenu,
            Action::Cancel => return EventResult::Exit,

            Action::ShowBooks => Self::pick_view(state, View::Books),
            Action::ShowWriters => Self::pick_view(state, View::Writers),
            Action::ShowCommunity => Self::pick_view(state, View::Community),
            Action::ShowProfile => Self::pick_view(state, View::Profile),
            Action::NextView => Self::pick_view(state, state.view.next()),
            Action::PreviousView => Self::pick_view(state, state.view.previous()),

            Action::NextCategory if state.shows_category_bar() && !state.menu_open => {
                ViewEvent::SelectCategory(state.category.next())
            }
            Action::PreviousCategory if state.shows_category_bar() && !state.menu_open => {
                ViewEvent::SelectCategory(state.category.previous())
            }
            Action::NextCategory | Action::PreviousCategory => return EventResult::Continue,

            Action::ToggleMenu if self.is_compact() || state.menu_open => ViewEvent::ToggleMenu,
            Action::ToggleMenu => {
                debug!("Menu is only available in the compact layout");
                return EventResult::Continue;
            }
            Action::NavigateUp => ViewEvent::MenuUp,
            Action::NavigateDown => ViewEvent::MenuDown,
            Action::Select if state.menu_open => ViewEvent::MenuSelect(state.menu_highlight),
            Action::Select => return EventResult::Continue,

            Action::ToggleTheme => ViewEvent::ToggleTheme,
        };

        self.dispatch(event);
        EventResult::Continue
    }

    const fn pick_view(state: ViewState, view: View) -> ViewEvent {
        if state.menu_open {
            ViewEvent::MenuSelect(view)
        } else {
            ViewEvent::SelectView(view)
        }
    }

    fn dispatch(&mut self, event: ViewEvent) {
        let next = reduce(self.state, event);
        if next == self.state {
            trace!(event = ?event, "Event left view state unchanged");
        } else {
            debug!(
                event = ?event,
                view = ?next.view,
                category = %next.category,
                menu_open = next.menu_open,
                prompt_index = next.prompt_index,
                "View state updated"
            );
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Category, Genre};
    use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
    use test_case::test_case;

    const WIDE: u16 = 160;
    const NARROW: u16 = 60;

    fn app_with(config: &AppConfig, width: u16) -> App {
        let mut app = App::new(Catalogue::builtin(), config, Appearance::Dark);
        app.set_viewport_width(width);
        app
    }

    fn app(width: u16) -> App {
        app_with(&AppConfig::default(), width)
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initial_state() {
        let app = app(WIDE);
        let state = app.state();

        assert_eq!(state.view, View::Books);
        assert_eq!(state.category, Category::All);
        assert!(!state.menu_open);
        assert_eq!(state.prompt_index, 0);
        assert_eq!(state.prompt_count, 5);
    }

    #[test_case('1', View::Books ; "books")]
    #[test_case('2', View::Writers ; "writers")]
    #[test_case('3', View::Community ; "community")]
    #[test_case('4', View::Profile ; "profile")]
    fn test_digit_selects_view(key: char, expected: View) {
        let mut app = app(WIDE);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char(key));
        assert_eq!(app.state().view, expected);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = app(WIDE);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().view, View::Writers);
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.state().view, View::Profile);
    }

    #[test]
    fn test_category_keys_only_act_on_books() {
        let mut app = app(WIDE);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().category, Category::Genre(Genre::Novel));
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.state().category, Category::Genre(Genre::Poetry));

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().category, Category::Genre(Genre::Poetry));
    }

    #[test]
    fn test_menu_unavailable_in_wide_layout() {
        let mut app = app(WIDE);
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.state().menu_open);
    }

    #[test]
    fn test_menu_pick_selects_and_closes() {
        let mut app = app(NARROW);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.state().menu_open);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let state = app.state();
        assert_eq!(state.view, View::Community);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_digit_from_open_menu_closes_it() {
        let mut app = app(NARROW);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('4'));

        assert_eq!(app.state().view, View::Profile);
        assert!(!app.state().menu_open);
    }

    #[test]
    fn test_escape_closes_menu_before_quitting() {
        let mut app = app(NARROW);
        press(&mut app, KeyCode::Char('m'));

        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Continue);
        assert!(!app.state().menu_open);
        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Exit);
    }

    #[test]
    fn test_widening_closes_menu() {
        let mut app = app(NARROW);
        press(&mut app, KeyCode::Char('m'));
        app.set_viewport_width(WIDE);

        assert!(!app.is_compact());
        assert!(!app.state().menu_open);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(WIDE);
        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Exit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app(WIDE);
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('2'), KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(
            app.handle_terminal_event(&Event::Key(release)),
            EventResult::Continue
        );
        assert_eq!(app.state().view, View::Books);
    }

    #[test]
    fn test_resize_event_updates_layout() {
        let mut app = app(WIDE);
        app.handle_terminal_event(&Event::Resize(NARROW, 30));
        assert!(app.is_compact());
    }

    #[test]
    fn test_configured_binding_overrides_default() {
        let mut config = AppConfig::default();
        config
            .keybindings
            .insert("x".to_string(), Action::ToggleTheme);
        config.keybindings.insert("q".to_string(), Action::NextView);
        let mut app = app_with(&config, WIDE);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state().appearance, Appearance::Light);

        assert_eq!(press(&mut app, KeyCode::Char('q')), EventResult::Continue);
        assert_eq!(app.state().view, View::Writers);
    }

    #[test]
    fn test_rotation_message_advances_prompt() {
        let mut app = app(WIDE);
        for _ in 0..7 {
            app.dispatch(ViewEvent::AdvancePrompt);
        }
        assert_eq!(app.state().prompt_index, 2);
    }
}
