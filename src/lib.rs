#![cfg(target_arch = "wasm32")]
use array_core::ArrayContext;
use js_sys::Reflect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod progress;
mod three;
mod viewer;

use constants::{
    HEIGHT_INPUT_ID, LOAD_EVENT, TEMPLATE_NAME_ATTR, VIEWER_SELECTOR, WIDTH_INPUT_ID,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("model-array-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let viewer = document
        .query_selector(VIEWER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing <{}>", VIEWER_SELECTOR))?;
    let width_input = dom::input_by_id(&document, WIDTH_INPUT_ID)?;
    let height_input = dom::input_by_id(&document, HEIGHT_INPUT_ID)?;

    progress::wire(&viewer);

    // The model may already be up if the module loaded late.
    let loaded = Reflect::get(viewer.as_ref(), &JsValue::from_str("loaded"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if !loaded {
        dom::next_event(viewer.as_ref(), LOAD_EVENT).await?;
    }

    let mut scene = three::ThreeScene::from_viewer(&viewer)?;
    let template_name = viewer.get_attribute(TEMPLATE_NAME_ATTR);
    let ctx = match ArrayContext::initialize(&mut scene, template_name.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            // Fatal for this page load; the viewer keeps showing an empty stage.
            log::error!("[setup] {}", e);
            return Ok(());
        }
    };
    log::info!(
        "[setup] template {:.4} x {:.4}",
        ctx.template.width,
        ctx.template.height
    );

    let state = Rc::new(RefCell::new(viewer::ViewerState {
        scene,
        ctx,
        width_input,
        height_input,
    }));
    state.borrow_mut().recompute();
    viewer::wire_inputs(&state);
    Ok(())
}
