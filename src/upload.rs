use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Decodes a file into a base64 data URL for the preview slots. Suspends
/// until the reader settles; the decode is not cancellable.
pub(crate) async fn read_file_data_url(file: File) -> Result<String, String> {
    let reader =
        web_sys::FileReader::new().map_err(|_| "failed to read file".to_string())?;
    let reader = Rc::new(reader);
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reader_onload = reader.clone();
        let reject_onload = reject.clone();
        let onload = Closure::once(move |_event: web_sys::Event| match reader_onload.result() {
            Ok(value) => {
                let _ = resolve.call1(&JsValue::NULL, &value);
            }
            Err(_) => {
                let _ = reject_onload.call1(&JsValue::NULL, &JsValue::from_str("read_failed"));
            }
        });
        let onerror = Closure::once(move |_event: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read_failed"));
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    });
    reader
        .read_as_data_url(&file)
        .map_err(|_| "failed to read file".to_string())?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| "failed to read file".to_string())?;
    value
        .as_string()
        .ok_or_else(|| "failed to read file".to_string())
}
