use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Downloads `url` as `filename` through a transient anchor, without
/// navigating away.
pub(crate) fn trigger(url: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "failed to create link".to_string())?
        .dyn_into()
        .map_err(|_| "failed to create link".to_string())?;
    anchor.set_href(url);
    anchor.set_download(filename);
    let _ = anchor.set_attribute("style", "display:none;");
    let body = document
        .body()
        .ok_or_else(|| "document unavailable".to_string())?;
    body.append_child(&anchor)
        .map_err(|_| "failed to create link".to_string())?;
    anchor.click();
    anchor.remove();
    Ok(())
}
