// ============================================================================
// APP - Montaje/desmontaje de la UI y del mapa
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::dom::incremental::{update_results, update_search_button};
use crate::maps::{LeafletBackend, MapViewport};
use crate::services::AlertNotifier;
use crate::state::{SearchChange, SearchState};
use crate::viewmodels::SearchViewModel;
use crate::views::{render_search_panel, SearchPanelProps};

/// Aplicación principal
pub struct App {
    state: SearchState,
    root: Element,
    viewport: MapViewport<LeafletBackend>,
    mounted: bool,
}

impl App {
    /// Crear nueva aplicación (sin montar)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(&CONFIG.app_root_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", CONFIG.app_root_id)))?;

        let backend = LeafletBackend::new(CONFIG.marker_icons.clone());
        Ok(Self {
            state: SearchState::new(),
            root,
            viewport: MapViewport::new(backend, CONFIG.tile_config.clone()),
            mounted: false,
        })
    }

    /// Renderizar la UI y crear el mapa (una vez por montaje)
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.mounted {
            log::debug!("🎬 [APP] Ya montada");
            return Ok(());
        }
        if !self.state.is_mounted() {
            // Sesión nueva tras un desmontaje
            self.state = SearchState::new();
        }

        clear_children(&self.root);
        let view = render_search_panel(
            &self.state,
            &CONFIG.map_config.mount_point_id,
            search_trigger(self.state.clone()),
        )?;
        append_child(&self.root, &view)?;

        self.state.subscribe_to_changes(|change| {
            // Los inputs ya reflejan su propio valor
            if change == SearchChange::Fields {
                return;
            }
            Timeout::new(0, crate::refresh_app).forget();
        });

        // El mount point existe solo después de insertar la vista
        let map = &CONFIG.map_config;
        if let Err(e) = self.viewport.initialize(&map.mount_point_id, map.default_center(), map.default_zoom) {
            log::error!("❌ [APP] No se pudo crear el mapa: {}", e);
        }

        self.mounted = true;
        log::info!(
            "✅ [APP] Montada (sesión {:?}, mapa {})",
            self.state.session_id(),
            if self.viewport.is_initialized() { "listo" } else { "no disponible" }
        );
        Ok(())
    }

    /// Destruir mapa, invalidar la sesión y vaciar el root
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.viewport.teardown();
        self.state.teardown();
        clear_children(&self.root);
        self.mounted = false;
        log::info!("👋 [APP] Desmontada");
    }

    /// Actualización incremental del DOM (botón + resultados)
    pub fn update_incremental(&self) -> Result<(), JsValue> {
        if !self.mounted {
            return Ok(());
        }
        log::debug!("🔄 [UPDATE] Fase {:?}", self.state.phase());
        let props = SearchPanelProps::from_state(&self.state);
        update_search_button(&props)?;
        update_results(&props)?;
        Ok(())
    }
}

/// Closure del botón: lanza la búsqueda sin bloquear la UI
fn search_trigger(state: SearchState) -> Rc<dyn Fn()> {
    Rc::new(move || {
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            SearchViewModel::new().search(&state, &AlertNotifier).await;
        });
    })
}
