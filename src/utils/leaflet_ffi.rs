// ============================================================================
// LEAFLET FFI - Bindings a Leaflet (window.L)
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::config::MarkerIconConfig;

#[wasm_bindgen]
extern "C" {
    /// Instancia de L.Map
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn create_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView, catch)]
    pub fn set_view(this: &LeafletMap, center: &js_sys::Array, zoom: f64) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap) -> LeafletMap;

    /// Capa L.TileLayer
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer, catch)]
    pub fn tile_layer(url_template: &str, options: &Object) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo, catch)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(js_namespace = ["L", "Icon", "Default"], js_name = mergeOptions)]
    fn merge_default_icon_options(options: &Object);
}

/// Verificar que window.L existe
pub fn is_leaflet_loaded() -> bool {
    Reflect::get(&js_sys::global(), &JsValue::from_str("L"))
        .map(|leaflet| !leaflet.is_undefined())
        .unwrap_or(false)
}

/// Opciones {attribution} para L.tileLayer
pub fn tile_layer_options(attribution: &str) -> Result<Object, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("attribution"), &JsValue::from_str(attribution))?;
    Ok(options)
}

/// Reemplaza las URLs de los iconos por defecto de los marcadores.
/// Leaflet las resuelve desde su CSS, lo que falla cuando se empaqueta.
pub fn configure_default_icons(icons: &MarkerIconConfig) -> Result<(), JsValue> {
    let leaflet = Reflect::get(&js_sys::global(), &JsValue::from_str("L"))?;
    let icon = Reflect::get(&leaflet, &JsValue::from_str("Icon"))?;
    let default_icon = Reflect::get(&icon, &JsValue::from_str("Default"))?;
    let prototype: Object = Reflect::get(&default_icon, &JsValue::from_str("prototype"))?.unchecked_into();
    Reflect::delete_property(&prototype, &JsValue::from_str("_getIconUrl"))?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("iconRetinaUrl"), &JsValue::from_str(&icons.icon_retina_url))?;
    Reflect::set(&options, &JsValue::from_str("iconUrl"), &JsValue::from_str(&icons.icon_url))?;
    Reflect::set(&options, &JsValue::from_str("shadowUrl"), &JsValue::from_str(&icons.shadow_url))?;
    merge_default_icon_options(&options);
    Ok(())
}

/// Mensaje legible de un error JS
pub fn js_error_message(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
