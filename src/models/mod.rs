pub mod coordinates;
pub mod search;
pub mod notice;

pub use coordinates::Coordinates;
pub use search::{SearchRequest, SearchError, SearchOutcome};
pub use notice::Notice;
