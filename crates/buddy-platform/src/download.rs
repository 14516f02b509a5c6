//! Save bytes to the user's disk through a temporary object URL and a
//! synthetic `<a download>` click.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use buddy_types::{BuddyError, Result};

/// File name offered for the reward sticker
pub const STICKER_FILENAME: &str = "sticker.png";

fn js_error(e: JsValue) -> BuddyError {
    BuddyError::Browser(format!("{:?}", e))
}

/// Offer `bytes` as a file download named `filename`.
pub fn save_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BuddyError::Browser("no document to attach a download to".to_string()))?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| BuddyError::Browser("created element is not an anchor".to_string()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url).map_err(js_error)?;

    log::info!("Offered {} ({} bytes) for download", filename, bytes.len());
    Ok(())
}
