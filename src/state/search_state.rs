// ============================================================================
// SEARCH STATE - Estado de la búsqueda (campos, in-flight, resultado)
// ============================================================================
// Idle -> Searching -> Settled. Solo se sale de Searching con el ticket
// emitido por begin_search(), y una sola vez por ticket.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use serde_json::Value;
use uuid::Uuid;
use crate::models::{SearchError, SearchOutcome};

/// Identidad de una sesión de UI montada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fase derivada del estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Settled,
}

/// Qué cambió (para actualizaciones incrementales)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChange {
    Fields,
    InFlight,
    Settled,
}

/// Permiso para una búsqueda en curso, ligado a la sesión que la emitió
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub session: SessionId,
    pub from: String,
    pub to: String,
}

type ChangeCallback = Rc<dyn Fn(SearchChange)>;

/// Estado de búsqueda compartido (clones comparten los mismos datos)
#[derive(Clone)]
pub struct SearchState {
    pub from_location: Rc<RefCell<String>>,
    pub to_location: Rc<RefCell<String>>,
    pub result: Rc<RefCell<Option<Value>>>,
    pub last_error: Rc<RefCell<Option<SearchError>>>,
    pub in_flight: Rc<RefCell<bool>>,
    session: Rc<RefCell<Option<SessionId>>>,
    change_subscribers: Rc<RefCell<Vec<ChangeCallback>>>,
}

impl SearchState {
    /// Crear estado para una nueva sesión de UI
    pub fn new() -> Self {
        Self {
            from_location: Rc::new(RefCell::new(String::new())),
            to_location: Rc::new(RefCell::new(String::new())),
            result: Rc::new(RefCell::new(None)),
            last_error: Rc::new(RefCell::new(None)),
            in_flight: Rc::new(RefCell::new(false)),
            session: Rc::new(RefCell::new(Some(SessionId::new()))),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_from_location(&self, value: String) {
        *self.from_location.borrow_mut() = value;
        self.notify(SearchChange::Fields);
    }

    pub fn get_from_location(&self) -> String {
        self.from_location.borrow().clone()
    }

    pub fn set_to_location(&self, value: String) {
        *self.to_location.borrow_mut() = value;
        self.notify(SearchChange::Fields);
    }

    pub fn get_to_location(&self) -> String {
        self.to_location.borrow().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        *self.in_flight.borrow()
    }

    pub fn get_result(&self) -> Option<Value> {
        self.result.borrow().clone()
    }

    pub fn get_last_error(&self) -> Option<SearchError> {
        self.last_error.borrow().clone()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        *self.session.borrow()
    }

    pub fn is_mounted(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn phase(&self) -> SearchPhase {
        if self.is_in_flight() {
            SearchPhase::Searching
        } else if self.result.borrow().is_some() || self.last_error.borrow().is_some() {
            SearchPhase::Settled
        } else {
            SearchPhase::Idle
        }
    }

    /// Idle/Settled -> Searching. Valida los campos y marca in-flight.
    /// El ticket lleva los campos tal cual se escribieron.
    pub fn begin_search(&self) -> Result<SearchTicket, SearchError> {
        let session = self.session_id().ok_or(SearchError::Detached)?;
        if self.is_in_flight() {
            return Err(SearchError::Busy);
        }

        let from = self.get_from_location();
        let to = self.get_to_location();
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(SearchError::MissingLocations);
        }

        *self.in_flight.borrow_mut() = true;
        self.notify(SearchChange::InFlight);
        Ok(SearchTicket { session, from, to })
    }

    /// Searching -> Settled. Devuelve false si el resultado se descartó
    /// (sesión desmontada, ticket ajeno o ya resuelto).
    pub fn complete_search(&self, ticket: &SearchTicket, outcome: SearchOutcome) -> bool {
        if self.session_id() != Some(ticket.session) {
            log::warn!("⚠️ [SEARCH] Resultado descartado: la sesión {} ya no está montada", ticket.session);
            return false;
        }
        if !self.is_in_flight() {
            log::warn!("⚠️ [SEARCH] Resultado descartado: no hay búsqueda en curso");
            return false;
        }

        *self.in_flight.borrow_mut() = false;
        match outcome {
            SearchOutcome::Success(payload) => {
                *self.result.borrow_mut() = Some(payload);
                *self.last_error.borrow_mut() = None;
            }
            SearchOutcome::Failure(error) => {
                *self.result.borrow_mut() = None;
                *self.last_error.borrow_mut() = Some(error);
            }
        }
        self.notify(SearchChange::Settled);
        true
    }

    /// Desmontar: invalida la sesión y suelta los subscribers
    pub fn teardown(&self) {
        if let Some(session) = self.session.borrow_mut().take() {
            log::info!("👋 [SEARCH] Sesión {} desmontada", session);
        }
        self.change_subscribers.borrow_mut().clear();
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(SearchChange) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self, change: SearchChange) {
        // Clonar antes de llamar: un callback puede volver a tocar el estado
        let subscribers: Vec<ChangeCallback> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(change);
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
