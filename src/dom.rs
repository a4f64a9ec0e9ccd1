use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn input_by_id(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an <input>: {:?}", element_id, e))
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_event_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Resolves with the next `event` dispatched on `target`. The listener is
/// registered with `once`, so the notification is consumed exactly once.
pub async fn next_event(target: &web::EventTarget, event: &str) -> anyhow::Result<web::Event> {
    let mut registered = Ok(());
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        registered = target.add_event_listener_with_callback_and_add_event_listener_options(
            event, &resolve, &opts,
        );
    });
    registered.map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    value
        .dyn_into::<web::Event>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
