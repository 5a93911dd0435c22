mod book_grid;
mod category_bar;
mod community_panel;
mod footer_bar;
mod header_bar;
mod nav_menu;
mod profile_panel;
mod prompt_banner;
mod writer_list;

pub use book_grid::{BOOK_CARD_HEIGHT, BookGrid, BookGridStyle};
pub use category_bar::{CategoryBar, CategoryBarStyle};
pub use community_panel::CommunityPanel;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use nav_menu::NavMenu;
pub use profile_panel::ProfilePanel;
pub use prompt_banner::PromptBanner;
pub use writer_list::{WRITER_CARD_HEIGHT, WriterList, WriterListStyle};
