use std::cell::Cell;
use crate::config::{MarkerIconConfig, TileConfig};
use crate::models::Coordinates;
use crate::utils::leaflet_ffi::{self, LeafletMap};
use super::{MapBackend, MapError};

/// Backend de mapas para web usando Leaflet
pub struct LeafletBackend {
    icons: MarkerIconConfig,
    icons_configured: Cell<bool>,
}

impl LeafletBackend {
    pub fn new(icons: MarkerIconConfig) -> Self {
        Self {
            icons,
            icons_configured: Cell::new(false),
        }
    }

    fn ensure_default_icons(&self) {
        if self.icons_configured.get() {
            return;
        }
        match leaflet_ffi::configure_default_icons(&self.icons) {
            Ok(()) => self.icons_configured.set(true),
            Err(e) => log::warn!("⚠️ [MAP] No se pudieron configurar los iconos: {}", leaflet_ffi::js_error_message(&e)),
        }
    }
}

impl MapBackend for LeafletBackend {
    type Handle = LeafletMap;

    fn create_map(&self, mount_point_id: &str, center: Coordinates, zoom: f64) -> Result<LeafletMap, MapError> {
        if !leaflet_ffi::is_leaflet_loaded() {
            return Err(MapError::LibraryMissing);
        }
        self.ensure_default_icons();

        let map = leaflet_ffi::create_map(mount_point_id)
            .map_err(|e| MapError::Backend(leaflet_ffi::js_error_message(&e)))?;
        let center = js_sys::Array::of2(&center.latitude.into(), &center.longitude.into());
        if let Err(e) = map.set_view(&center, zoom) {
            // El contenedor ya quedó tomado por L.map: liberarlo
            map.remove();
            return Err(MapError::Backend(leaflet_ffi::js_error_message(&e)));
        }
        Ok(map)
    }

    fn add_tile_layer(&self, map: &LeafletMap, tiles: &TileConfig) -> Result<(), MapError> {
        let options = leaflet_ffi::tile_layer_options(&tiles.attribution)
            .map_err(|e| MapError::Backend(leaflet_ffi::js_error_message(&e)))?;
        let layer = leaflet_ffi::tile_layer(&tiles.url_template, &options)
            .map_err(|e| MapError::Backend(leaflet_ffi::js_error_message(&e)))?;
        layer
            .add_to(map)
            .map_err(|e| MapError::Backend(leaflet_ffi::js_error_message(&e)))?;
        Ok(())
    }

    fn destroy_map(&self, map: LeafletMap) {
        map.remove();
    }
}
