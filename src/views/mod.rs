pub mod search_panel;

pub use search_panel::{render_search_panel, SearchPanelProps};
