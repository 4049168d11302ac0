use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::BrowserError;

fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::Missing("window"))
}

fn document() -> Result<web_sys::Document, BrowserError> {
    window()?.document().ok_or(BrowserError::Missing("document"))
}

pub fn root_element(id: &str) -> Result<web_sys::Element, BrowserError> {
    document()?
        .get_element_by_id(id)
        .ok_or(BrowserError::Missing("root element"))
}

pub async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>, BrowserError> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

pub async fn copy_to_clipboard(text: String) -> Result<(), BrowserError> {
    let clipboard = window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(&text)).await?;
    Ok(())
}

/// Saves `text` as a file through a temporary object URL.
pub fn download_text(text: &str, file_name: &str, mime: &str) -> Result<(), BrowserError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document()?
        .create_element("a")?
        .dyn_into()
        .map_err(|_| BrowserError::Missing("anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Runs `f` once after `ms` milliseconds.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> Result<(), BrowserError> {
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        ms as i32,
    )?;
    Ok(())
}

pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
