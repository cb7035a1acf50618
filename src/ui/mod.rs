/// Presentation widgets. Each reads the current filtered view from
/// [`crate::state::AppState`] and renders it; only the sidebar and top bar
/// mutate state, and only in response to user input.

pub mod panels;
pub mod plot;
pub mod table;
pub mod value_boxes;
