use crate::constants::{
    HIDE_CLASS, PROGRESS_BAR_SELECTOR, PROGRESS_EVENT, TOTAL_PROGRESS_KEY, UPDATE_BAR_SELECTOR,
};
use crate::dom;
use array_core::ProgressDisplay;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn total_progress(ev: &web::Event) -> Option<f32> {
    let detail = ev.dyn_ref::<web::CustomEvent>()?.detail();
    Reflect::get(&detail, &JsValue::from_str(TOTAL_PROGRESS_KEY))
        .ok()?
        .as_f64()
        .map(|v| v as f32)
}

pub fn apply(viewer: &web::Element, display: ProgressDisplay) {
    if let Ok(Some(el)) = viewer.query_selector(UPDATE_BAR_SELECTOR) {
        if let Some(bar) = el.dyn_ref::<web::HtmlElement>() {
            let _ = bar.style().set_property("width", &display.css_width());
        }
    }
    if let Ok(Some(el)) = viewer.query_selector(PROGRESS_BAR_SELECTOR) {
        let classes = el.class_list();
        let _ = if display.hidden {
            classes.add_1(HIDE_CLASS)
        } else {
            classes.remove_1(HIDE_CLASS)
        };
    }
}

/// Mirrors the viewer's loading progress onto its slotted progress bar.
pub fn wire(viewer: &web::Element) {
    let viewer_for_progress = viewer.clone();
    dom::add_event_listener(viewer.as_ref(), PROGRESS_EVENT, move |ev| {
        if let Some(fraction) = total_progress(&ev) {
            apply(&viewer_for_progress, ProgressDisplay::from_fraction(fraction));
        }
    });
}
