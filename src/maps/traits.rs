use crate::config::TileConfig;
use crate::models::Coordinates;

/// Librería de mapas subyacente (Leaflet en web, fakes en tests)
pub trait MapBackend {
    /// Instancia viva del mapa
    type Handle;

    /// Crear el mapa dentro del mount point y fijar centro/zoom
    fn create_map(&self, mount_point_id: &str, center: Coordinates, zoom: f64) -> Result<Self::Handle, MapError>;

    /// Agregar la capa de teselas al mapa
    fn add_tile_layer(&self, map: &Self::Handle, tiles: &TileConfig) -> Result<(), MapError>;

    /// Destruir el mapa (libera listeners y DOM)
    fn destroy_map(&self, map: Self::Handle);
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// La librería de mapas no está cargada en la página
    LibraryMissing,
    /// Error lanzado por la librería (p.ej. contenedor inexistente)
    Backend(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::LibraryMissing => write!(f, "Map library is not loaded"),
            MapError::Backend(msg) => write!(f, "Map error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
