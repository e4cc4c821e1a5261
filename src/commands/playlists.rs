//! Playlist Commands
//!
//! `window.fetch` transport for the playlist loader.

use async_trait::async_trait;
use playlist_core::{FetchError, HttpReply, PlaylistTransport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Sends loader requests through the browser's fetch API
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl PlaylistTransport for FetchTransport {
    async fn post_json(&self, path: &str, body: &str) -> Result<HttpReply, FetchError> {
        let window = web_sys::window().ok_or_else(|| FetchError::network("no window available"))?;

        let headers = Headers::new().map_err(network_error)?;
        headers.set("Content-Type", "application/json").map_err(network_error)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(path, &init).map_err(network_error)?;

        // fetch only rejects when no response arrived; HTTP errors resolve normally
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?
            .dyn_into()
            .map_err(network_error)?;

        let status = response.status();
        if !response.ok() {
            return Ok(HttpReply::new(status, ""));
        }

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        Ok(HttpReply::new(status, text.as_string().unwrap_or_default()))
    }
}

fn network_error(err: JsValue) -> FetchError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    FetchError::network(message)
}
