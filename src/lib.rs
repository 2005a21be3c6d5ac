// ============================================================================
// NEAREST BUS - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: orquestan la búsqueda
// - Services: SOLO comunicación HTTP y avisos
// - State: Rc<RefCell> + subscribers
// - Maps: ciclo de vida del mapa (Leaflet)
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod maps;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App (un solo hilo en WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚌 Nearest Bus - Rust Puro + WASM");

    mount_app()
}

/// Montar la app (crea la instancia la primera vez). Llamable desde JavaScript.
#[wasm_bindgen]
pub fn mount_app() -> Result<(), JsValue> {
    APP.with(|app_cell| {
        let mut slot = app_cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(App::new()?);
        }
        match slot.as_mut() {
            Some(app) => app.mount(),
            None => Err(JsValue::from_str("App no inicializada")),
        }
    })
}

/// Desmontar la app: destruye el mapa y descarta búsquedas en curso.
#[wasm_bindgen]
pub fn unmount_app() {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow_mut().as_mut() {
            app.unmount();
        } else {
            log::warn!("⚠️ [APP] unmount_app sin app montada");
        }
    });
}

/// Refrescar botón y resultados tras un cambio de estado
pub fn refresh_app() {
    APP.with(|app_cell| {
        // try_borrow: mount/unmount pueden estar en curso
        match app_cell.try_borrow() {
            Ok(slot) => {
                if let Some(app) = slot.as_ref() {
                    if let Err(e) = app.update_incremental() {
                        log::error!("❌ [UPDATE] Error en actualización incremental: {:?}", e);
                    }
                }
            }
            Err(_) => log::warn!("⚠️ [UPDATE] App ocupada, actualización omitida"),
        }
    });
}
