//! The single catalogue screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::application::{ViewState, visible_books};
use crate::domain::entities::View;
use crate::domain::keybinding::{Action, Keybind};
use crate::infrastructure::Catalogue;
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    BookGrid, BookGridStyle, CategoryBar, CategoryBarStyle, CommunityPanel, FooterBar,
    FooterBarStyle, HeaderBar, HeaderBarStyle, NavMenu, ProfilePanel, PromptBanner, WriterList,
    WriterListStyle,
};

pub const APP_TITLE: &str = "हिंदी साहित्य पुस्तकालय";
pub const COPYRIGHT: &str = "© 2025 हिंदी साहित्य पुस्तकालय";

const HEADER_HEIGHT: u16 = 1;
const BANNER_HEIGHT: u16 = 3;
const CATEGORY_BAR_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 3;
const MENU_WIDTH: u16 = 24;

/// Renders one `ViewState` against the catalogue.
pub struct LibraryScreen<'a> {
    catalogue: &'a Catalogue,
    state: ViewState,
    registry: &'a CommandRegistry,
    theme: Theme,
    compact: bool,
}

impl<'a> LibraryScreen<'a> {
    #[must_use]
    pub fn new(catalogue: &'a Catalogue, state: ViewState, registry: &'a CommandRegistry) -> Self {
        Self {
            catalogue,
            state,
            registry,
            theme: Theme::default().with_appearance(state.appearance),
            compact: false,
        }
    }

    /// Accent source; the appearance always follows the view state.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme.with_appearance(self.state.appearance);
        self
    }

    #[must_use]
    pub const fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        match self.state.view {
            View::Books => {
                let books = visible_books(self.catalogue.books(), self.state.category);
                BookGrid::new(&books)
                    .style(BookGridStyle::from_theme(&self.theme))
                    .render(area, buf);
            }
            View::Writers => {
                WriterList::new(self.catalogue.writers())
                    .style(WriterListStyle::from_theme(&self.theme))
                    .render(area, buf);
            }
            View::Community => {
                CommunityPanel::new(self.catalogue.discussion_topic(), self.theme)
                    .render(area, buf);
            }
            View::Profile => ProfilePanel::new(self.theme).render(area, buf),
        }
    }

    fn render_menu(&self, below: Rect, buf: &mut Buffer) {
        let width = MENU_WIDTH.min(below.width);
        let menu_area = Rect::new(
            below.right().saturating_sub(width),
            below.y,
            width,
            NavMenu::height().min(below.height),
        );
        NavMenu::new(self.state.view, self.state.menu_highlight, self.theme)
            .render(menu_area, buf);
    }
}

impl HasCommands for LibraryScreen<'_> {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let menu_visible = self.compact && self.state.menu_open;

        let mut wanted: Vec<(Action, &'static str)> = Vec::new();
        if menu_visible {
            wanted.push((Action::Select, "Open"));
            wanted.push((Action::Cancel, "Close"));
        } else {
            if !self.compact {
                wanted.push((Action::NextView, "Next view"));
            }
            if self.state.shows_category_bar() {
                wanted.push((Action::NextCategory, "Genre"));
            }
            if self.compact {
                wanted.push((Action::ToggleMenu, "Menu"));
            }
        }
        wanted.push((Action::ToggleTheme, "Theme"));
        wanted.push((Action::Quit, "Quit"));

        wanted
            .into_iter()
            .filter_map(|(action, label)| registry.keybind(action, label))
            .collect()
    }
}

impl Widget for LibraryScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base_style);

        let bar_height = if self.state.shows_category_bar() {
            CATEGORY_BAR_HEIGHT
        } else {
            0
        };
        let [header_area, banner_area, bar_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(bar_height),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        HeaderBar::new(APP_TITLE, self.state.view)
            .compact(self.compact)
            .menu_open(self.state.menu_open)
            .appearance(self.state.appearance)
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header_area, buf);

        let riddle = self
            .catalogue
            .riddle(self.state.prompt_index)
            .unwrap_or_default();
        PromptBanner::from_theme(riddle, &self.theme).render(banner_area, buf);

        if bar_height > 0 {
            let [bar_row, _spacer] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(bar_area);
            CategoryBar::new(self.catalogue.categories(), self.state.category)
                .style(CategoryBarStyle::from_theme(&self.theme))
                .render(bar_row, buf);
        }

        let [_, content_inner, _] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(content_area);
        self.render_content(content_inner, buf);

        let hints = self.get_commands(self.registry);
        FooterBar::new(&hints)
            .copyright(Some(COPYRIGHT))
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer_area, buf);

        if self.compact && self.state.menu_open {
            let below_header = Rect::new(
                area.x,
                header_area.bottom(),
                area.width,
                area.bottom().saturating_sub(header_area.bottom()),
            );
            self.render_menu(below_header, buf);
        }
    }
}
