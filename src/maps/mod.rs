// Módulo de mapas: ciclo de vida del viewport + backend Leaflet

pub mod traits;
pub mod viewport;
pub mod leaflet;

pub use traits::{MapBackend, MapError};
pub use viewport::MapViewport;
pub use leaflet::LeafletBackend;
