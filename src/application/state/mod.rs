//! View state and the reducer that drives it.

mod view_state;

pub use view_state::{ViewEvent, ViewState, reduce};
