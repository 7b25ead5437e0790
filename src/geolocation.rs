use crate::core::{Coordinate, GeolocationOptions, LocateError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn position_options(options: &GeolocationOptions) -> web::PositionOptions {
    let opts = web::PositionOptions::new();
    opts.set_enable_high_accuracy(options.enable_high_accuracy);
    opts.set_timeout(options.timeout_ms);
    opts.set_maximum_age(options.maximum_age_ms);
    opts
}

fn locate_error(value: JsValue) -> LocateError {
    match value.dyn_into::<web::GeolocationPositionError>() {
        Ok(err) => LocateError::from_code(err.code(), err.message()),
        Err(other) => LocateError::Platform {
            code: 0,
            message: format!("{:?}", other),
        },
    }
}

/// One-shot position request, bridging the success/error callbacks to a future.
pub async fn current_position(options: &GeolocationOptions) -> Result<Coordinate, LocateError> {
    let geolocation = web::window()
        .ok_or(LocateError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| LocateError::Unsupported)?;
    let opts = position_options(options);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) =
            geolocation.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &opts)
        {
            _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    let value = JsFuture::from(promise).await.map_err(locate_error)?;
    let position: web::GeolocationPosition = value.dyn_into().map_err(locate_error)?;
    let coords = position.coords();
    Ok(Coordinate::new(coords.latitude(), coords.longitude()))
}
