//! Browser event wiring for the search and dropdown widgets.
//!
//! Listeners are attached once to the document and look up their elements
//! on every event, so templates can be inserted or replaced after binding
//! without rebinding.

use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, Node};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::{Dropdown, SearchBox, WidgetConfig};

/// Attach the widget listeners to `document`.
///
/// The listeners live for the rest of the page.
pub fn bind_widgets(
    document: &Document,
    config: &WidgetConfig,
    search: SearchBox,
) -> Result<(), JsValue> {
    bind_clicks(document, config, search.clone())?;
    bind_search_keys(document, config, search)?;
    bind_close_key(document, config)?;

    tracing::debug!("widget listeners attached");
    Ok(())
}

fn bind_clicks(
    document: &Document,
    config: &WidgetConfig,
    search: SearchBox,
) -> Result<(), JsValue> {
    let doc = document.clone();
    let config = config.clone();

    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event_element(&event) else {
            return;
        };

        if matches_closest(&target, &config.search_button_selector) {
            search.submit(&search_value(&doc, &config));
        }

        dropdown(&doc, &config).handle_page_click(
            matches_closest(&target, &config.toggle_selector),
            inside_dropdown(&doc, &config, &target),
        );
    }) as Box<dyn FnMut(_)>);

    document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

fn bind_search_keys(
    document: &Document,
    config: &WidgetConfig,
    search: SearchBox,
) -> Result<(), JsValue> {
    let config = config.clone();

    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        if input.id() != config.search_input_id {
            return;
        }

        search.handle_key(&event.key(), &input.value());
    }) as Box<dyn FnMut(_)>);

    document.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

fn bind_close_key(document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    let doc = document.clone();
    let config = config.clone();

    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            dropdown(&doc, &config).handle_key(&event.key());
        }
    }) as Box<dyn FnMut(_)>);

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

fn dropdown(document: &Document, config: &WidgetConfig) -> Dropdown<Element> {
    let menu = document.get_element_by_id(&config.menu_id);
    let toggle = document
        .query_selector(&config.toggle_selector)
        .ok()
        .flatten();

    Dropdown::new(config, menu, toggle)
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn matches_closest(target: &Element, selector: &str) -> bool {
    matches!(target.closest(selector), Ok(Some(_)))
}

/// `None` when the page has no dropdown container.
fn inside_dropdown(document: &Document, config: &WidgetConfig, target: &Element) -> Option<bool> {
    let node: &Node = target.as_ref();
    let container = document.query_selector(&config.dropdown_selector).ok()??;

    Some(container.contains(Some(node)))
}

fn search_value(document: &Document, config: &WidgetConfig) -> String {
    document
        .get_element_by_id(&config.search_input_id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}
