// ============================================================================
// SEARCH MODELS - Request, resultado y errores de la búsqueda de rutas
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body del POST /passenger/routes/search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub from: String,
    pub to: String,
}

/// Error de búsqueda
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Falta "From" o "To" (vacío o solo espacios)
    MissingLocations,
    /// Ya hay una búsqueda en curso
    Busy,
    /// La sesión de UI ya fue desmontada
    Detached,
    /// Fallo de red o de construcción del request
    Network(String),
    /// Respuesta con status no-2xx
    Http { status: u16 },
    /// Body de la respuesta no es JSON válido
    MalformedResponse(String),
}

impl SearchError {
    /// Los errores que se muestran al usuario con alert()
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, SearchError::Busy | SearchError::Detached)
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::MissingLocations => write!(f, "Please enter both From and To locations."),
            SearchError::Busy => write!(f, "A search is already in progress"),
            SearchError::Detached => write!(f, "Search UI is no longer mounted"),
            SearchError::Network(msg) => write!(f, "Network error: {}", msg),
            SearchError::Http { .. } => write!(f, "Search failed"),
            SearchError::MalformedResponse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

/// Resultado normalizado de una búsqueda (payload opaco o error)
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Success(Value),
    Failure(SearchError),
}

impl SearchOutcome {
    /// Normaliza status + body crudo del servidor
    pub fn from_response(status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            return SearchOutcome::Failure(SearchError::Http { status });
        }
        match serde_json::from_str::<Value>(body) {
            Ok(payload) => SearchOutcome::Success(payload),
            Err(e) => SearchOutcome::Failure(SearchError::MalformedResponse(e.to_string())),
        }
    }
}
