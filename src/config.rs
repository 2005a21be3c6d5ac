// ============================================================================
// CONFIG - Configuración de la app (compilada desde variables de entorno)
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::Coordinates;
use crate::utils::constants::{DEFAULT_BACKEND_URL, ROUTE_SEARCH_PATH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    pub app_root_id: String,
    pub map_config: MapConfig,
    pub tile_config: TileConfig,
    pub marker_icons: MarkerIconConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            enable_logging: true,
            app_root_id: "app".to_string(),
            map_config: MapConfig::default(),
            tile_config: TileConfig::default(),
            marker_icons: MarkerIconConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub mount_point_id: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Visakhapatnam (VSKP)
        Self {
            mount_point_id: "map".to_string(),
            default_center_lat: 17.6868,
            default_center_lng: 83.2185,
            default_zoom: 13.0,
        }
    }
}

impl MapConfig {
    pub fn default_center(&self) -> Coordinates {
        Coordinates {
            latitude: self.default_center_lat,
            longitude: self.default_center_lng,
        }
    }
}

/// Capa de imágenes (teselas) del mapa. La atribución es obligatoria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileConfig {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerIconConfig {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        Self {
            icon_url: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-icon.png".to_string(),
            icon_retina_url: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-icon-2x.png".to_string(),
            shadow_url: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-shadow.png".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            app_root_id: option_env!("APP_ROOT_ID")
                .map(str::to_string)
                .unwrap_or(defaults.app_root_id),
            map_config: MapConfig {
                mount_point_id: option_env!("MAP_MOUNT_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.mount_point_id),
                default_center_lat: parse_finite_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    defaults.map_config.default_center_lat,
                ),
                default_center_lng: parse_finite_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    defaults.map_config.default_center_lng,
                ),
                default_zoom: parse_finite_or(
                    option_env!("DEFAULT_MAP_ZOOM"),
                    defaults.map_config.default_zoom,
                ),
            },
            tile_config: TileConfig {
                url_template: option_env!("TILE_URL_TEMPLATE")
                    .map(str::to_string)
                    .unwrap_or(defaults.tile_config.url_template),
                attribution: option_env!("TILE_ATTRIBUTION")
                    .map(str::to_string)
                    .unwrap_or(defaults.tile_config.attribution),
            },
            marker_icons: MarkerIconConfig {
                icon_url: option_env!("MARKER_ICON_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.marker_icons.icon_url),
                icon_retina_url: option_env!("MARKER_ICON_RETINA_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.marker_icons.icon_retina_url),
                shadow_url: option_env!("MARKER_SHADOW_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.marker_icons.shadow_url),
            },
        }
    }

    /// URL completa del endpoint de búsqueda de rutas
    pub fn search_url(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), ROUTE_SEARCH_PATH)
    }

    /// Nivel de log según ENABLE_LOGGING
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(fallback)
}

// "NaN" e "inf" parsean como f64 pero Leaflet los rechaza (Invalid LatLng)
fn parse_finite_or(raw: Option<&str>, fallback: f64) -> f64 {
    let value = parse_or(raw, fallback);
    if value.is_finite() { value } else { fallback }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
