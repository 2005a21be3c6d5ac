// ============================================================================
// SEARCH PANEL VIEW - Inputs, botón, contenedor del mapa y resultados
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{on_click, on_input, ElementTemplate};
use crate::state::{SearchPhase, SearchState};
use crate::utils::constants::{SEARCH_BUTTON_BUSY, SEARCH_BUTTON_IDLE};

pub const FROM_INPUT_ID: &str = "from-input";
pub const TO_INPUT_ID: &str = "to-input";
pub const SEARCH_BUTTON_ID: &str = "search-button";
pub const RESULTS_SLOT_ID: &str = "results-slot";

/// Todo lo que la vista necesita saber del estado
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPanelProps {
    pub from_location: String,
    pub to_location: String,
    pub button_label: &'static str,
    pub button_disabled: bool,
    pub result_dump: Option<String>,
}

impl SearchPanelProps {
    pub fn from_state(state: &SearchState) -> Self {
        let in_flight = state.phase() == SearchPhase::Searching;
        let result_dump = state
            .result
            .borrow()
            .as_ref()
            .and_then(|payload| serde_json::to_string_pretty(payload).ok());

        Self {
            from_location: state.get_from_location(),
            to_location: state.get_to_location(),
            button_label: if in_flight { SEARCH_BUTTON_BUSY } else { SEARCH_BUTTON_IDLE },
            button_disabled: in_flight,
            result_dump,
        }
    }
}

/// Renderizar la app completa. `on_search` se llama con cada click del botón.
pub fn render_search_panel(
    state: &SearchState,
    map_mount_id: &str,
    on_search: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let props = SearchPanelProps::from_state(state);

    let from_input = render_location_input(FROM_INPUT_ID, "Search From", &props.from_location, {
        let state = state.clone();
        move |value| state.set_from_location(value)
    })?;
    let to_input = render_location_input(TO_INPUT_ID, "To", &props.to_location, {
        let state = state.clone();
        move |value| state.set_to_location(value)
    })?;

    let button = ElementTemplate::tag("button")
        .with_id(SEARCH_BUTTON_ID)
        .with_class("search-button")
        .with_text(props.button_label)
        .render()?;
    set_button_disabled(&button, props.button_disabled);
    on_click(&button, move |_| on_search())?;

    let search_container = ElementTemplate::tag("div")
        .with_class("search-container")
        .with_children([from_input, to_input, button])
        .render()?;

    let map_container = ElementTemplate::tag("div")
        .with_id(map_mount_id)
        .with_class("map-container")
        .render()?;

    let results_slot = ElementTemplate::tag("div")
        .with_id(RESULTS_SLOT_ID)
        .with_children(render_results(&props)?)
        .render()?;

    ElementTemplate::tag("div")
        .with_class("app")
        .with_children([search_container, map_container, results_slot])
        .render()
}

/// Bloque de resultados, solo si hay payload
pub fn render_results(props: &SearchPanelProps) -> Result<Option<Element>, JsValue> {
    let Some(dump) = &props.result_dump else {
        return Ok(None);
    };

    let heading = ElementTemplate::tag("h3").with_text("Search Results:").render()?;
    let body = ElementTemplate::tag("pre").with_text(dump).render()?;
    let results = ElementTemplate::tag("div")
        .with_class("results")
        .with_children([heading, body])
        .render()?;
    Ok(Some(results))
}

pub fn set_button_disabled(button: &Element, disabled: bool) {
    if let Some(button) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(disabled);
    }
}

fn location_input_template<'a>(id: &'a str, placeholder: &'a str) -> ElementTemplate<'a> {
    ElementTemplate::tag("input")
        .with_id(id)
        .with_class("input-field")
        .with_attr("type", "text")
        .with_attr("placeholder", placeholder)
}

fn render_location_input<F>(id: &str, placeholder: &str, value: &str, on_change: F) -> Result<Element, JsValue>
where
    F: Fn(String) + 'static,
{
    let input = location_input_template(id, placeholder).render()?;
    if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }

    on_input(&input, move |event| {
        let value = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value());
        if let Some(value) = value {
            on_change(value);
        }
    })?;
    Ok(input)
}
