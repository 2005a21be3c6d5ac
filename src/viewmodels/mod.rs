pub mod search_viewmodel;

pub use search_viewmodel::SearchViewModel;
