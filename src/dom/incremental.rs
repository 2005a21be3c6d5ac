// ============================================================================
// INCREMENTAL DOM UPDATES - Solo toca lo que cambió
// ============================================================================
// Nunca re-renderiza el contenedor del mapa ni los inputs (perderían el
// mapa de Leaflet y el cursor respectivamente).
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{append_child, clear_children, get_element_by_id, set_text_content};
use crate::views::search_panel::{render_results, set_button_disabled, SearchPanelProps, RESULTS_SLOT_ID, SEARCH_BUTTON_ID};

/// Actualizar texto y disabled del botón de búsqueda
pub fn update_search_button(props: &SearchPanelProps) -> Result<(), JsValue> {
    let button = get_element_by_id(SEARCH_BUTTON_ID)
        .ok_or_else(|| JsValue::from_str("Search button not found, needs full render"))?;
    set_text_content(&button, props.button_label);
    set_button_disabled(&button, props.button_disabled);
    Ok(())
}

/// Reemplazar el bloque de resultados
pub fn update_results(props: &SearchPanelProps) -> Result<(), JsValue> {
    let slot = get_element_by_id(RESULTS_SLOT_ID)
        .ok_or_else(|| JsValue::from_str("Results slot not found, needs full render"))?;
    clear_children(&slot);
    if let Some(results) = render_results(props)? {
        append_child(&slot, &results)?;
    }
    Ok(())
}
