use crate::constants::INPUT_EVENT;
use crate::dom;
use crate::three::ThreeScene;
use array_core::{ArrayConfig, ArrayContext};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Live state after a successful setup; shared by the input listeners.
pub struct ViewerState {
    pub scene: ThreeScene,
    pub ctx: ArrayContext<JsValue>,
    pub width_input: web::HtmlInputElement,
    pub height_input: web::HtmlInputElement,
}

impl ViewerState {
    pub fn current_config(&self) -> ArrayConfig {
        ArrayConfig::from_inputs(&self.width_input.value(), &self.height_input.value())
    }

    /// Rebuilds the array from the current field values. Errors are logged,
    /// never thrown back into the page.
    pub fn recompute(&mut self) {
        let config = self.current_config();
        let started = Instant::now();
        match self.ctx.recompute(&mut self.scene, &config) {
            Ok(layout) => log::info!(
                "[viewer] {} x {} mm -> {} clone(s) at scale {:.4} ({:?})",
                config.width_mm(),
                config.height_mm(),
                layout.plan.count,
                layout.plan.scale,
                started.elapsed()
            ),
            Err(e) => log::error!("[viewer] rebuild failed: {}", e),
        }
    }
}

pub fn wire_inputs(state: &Rc<RefCell<ViewerState>>) {
    let (width, height) = {
        let s = state.borrow();
        (s.width_input.clone(), s.height_input.clone())
    };
    for input in [width, height] {
        let state = state.clone();
        dom::add_listener(input.as_ref(), INPUT_EVENT, move || {
            state.borrow_mut().recompute();
        });
    }
}
