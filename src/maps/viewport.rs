// ============================================================================
// MAP VIEWPORT - Dueño único de la instancia del mapa
// ============================================================================
// Como máximo un mapa vivo. initialize() es idempotente; solo teardown()
// permite crear otro.
// ============================================================================

use crate::config::TileConfig;
use crate::models::Coordinates;
use super::{MapBackend, MapError};

pub struct MapViewport<B: MapBackend> {
    backend: B,
    tiles: TileConfig,
    map: Option<B::Handle>,
    mount_point_id: Option<String>,
}

impl<B: MapBackend> MapViewport<B> {
    pub fn new(backend: B, tiles: TileConfig) -> Self {
        Self {
            backend,
            tiles,
            map: None,
            mount_point_id: None,
        }
    }

    /// Crear el mapa si todavía no existe
    pub fn initialize(&mut self, mount_point_id: &str, center: Coordinates, zoom: f64) -> Result<(), MapError> {
        if self.map.is_some() {
            log::debug!("🗺️ [MAP] Ya inicializado en #{}, nada que hacer", self.mount_point_id.as_deref().unwrap_or("?"));
            return Ok(());
        }

        log::info!(
            "🗺️ [MAP] Inicializando en #{} ({}, {}) zoom {}",
            mount_point_id, center.latitude, center.longitude, zoom
        );
        let map = self.backend.create_map(mount_point_id, center, zoom)?;

        if let Err(e) = self.backend.add_tile_layer(&map, &self.tiles) {
            // No dejar un mapa a medias
            self.backend.destroy_map(map);
            log::error!("❌ [MAP] Error agregando capa de teselas: {}", e);
            return Err(e);
        }

        self.map = Some(map);
        self.mount_point_id = Some(mount_point_id.to_string());
        log::info!("✅ [MAP] Mapa listo");
        Ok(())
    }

    /// Destruir el mapa y limpiar el handle
    pub fn teardown(&mut self) {
        if let Some(map) = self.map.take() {
            self.backend.destroy_map(map);
            log::info!("🧹 [MAP] Mapa destruido (#{})", self.mount_point_id.as_deref().unwrap_or("?"));
        }
        self.mount_point_id = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.map.is_some()
    }
}

impl<B: MapBackend> Drop for MapViewport<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}
