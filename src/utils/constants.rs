/// URL base del backend por defecto (desarrollo)
/// Se sobreescribe en tiempo de compilación con BACKEND_URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Endpoint de búsqueda de rutas
pub const ROUTE_SEARCH_PATH: &str = "/passenger/routes/search";

/// Textos del botón de búsqueda
pub const SEARCH_BUTTON_IDLE: &str = "Nearest Bus";
pub const SEARCH_BUTTON_BUSY: &str = "Searching...";
