use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Listen for `event` on the document, removing the listener after its first call.
pub fn add_document_once_listener(
    document: &web::Document,
    event: &str,
    handler: impl FnOnce() + 'static,
) {
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(handler);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    );
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_class(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if on {
            _ = cl.add_1(class);
        } else {
            _ = cl.remove_1(class);
        }
    }
}

/// Set the inline `display` style of an element.
pub fn set_display(document: &web::Document, element_id: &str, display: &str) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property("display", display);
    }
}
