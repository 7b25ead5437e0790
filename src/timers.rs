use crate::core::IntervalTimer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A running `setInterval`. The closure must outlive the interval.
pub struct IntervalHandle {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

/// `window.setInterval` / `window.clearInterval`.
#[derive(Default)]
pub struct WindowInterval;

impl IntervalTimer for WindowInterval {
    type Handle = IntervalHandle;

    fn set_interval(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> Option<IntervalHandle> {
        let window = web::window()?;
        let tick = Closure::wrap(tick);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms as i32,
        ) {
            Ok(id) => Some(IntervalHandle { id, _tick: tick }),
            Err(e) => {
                log::error!("[timers] setInterval error: {:?}", e);
                None
            }
        }
    }

    fn clear_interval(&mut self, handle: IntervalHandle) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(handle.id);
        }
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let callback = Closure::once_into_js(f);
        if let Err(e) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        {
            log::error!("[timers] setTimeout error: {:?}", e);
        }
    }
}
