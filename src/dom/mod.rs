// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod template;
pub mod events;
pub mod incremental;

pub use element::*;
pub use template::*;
pub use events::*;
pub use incremental::*;
