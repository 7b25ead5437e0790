use crate::core::{PetApiResponse, PetError};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Ask the API for a random image URL.
pub async fn fetch_image_url(api_url: &str) -> Result<String, PetError> {
    let resp = Request::get(api_url)
        .send()
        .await
        .map_err(|e| PetError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(PetError::HttpStatus(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| PetError::Network(e.to_string()))?;
    let payload = PetApiResponse::from_json(&body)?;
    payload.image_url().map(str::to_owned)
}

/// Load `url` into a detached image so the visible one only swaps once decoded.
pub async fn preload(url: &str) -> Result<(), PetError> {
    let image = web::HtmlImageElement::new().map_err(|e| PetError::ImageLoad(format!("{:?}", e)))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);
    let loaded = JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);
    loaded
        .map(|_| ())
        .map_err(|_: JsValue| PetError::ImageLoad(url.to_string()))
}

/// Full fetch: API call, validation and preload.
pub async fn load_pet(api_url: &str) -> Result<String, PetError> {
    let url = fetch_image_url(api_url).await?;
    preload(&url).await?;
    Ok(url)
}
