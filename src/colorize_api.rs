use gloo::net::http::Request;
use web_sys::{File, FormData};

use irozuke_core::{colorize_outcome, ColorizeResponse, ColorizedPair};
use irozuke_core::{COLORIZE_ENDPOINT, ERR_NETWORK, UPLOAD_FIELD};

/// One multipart POST to the colorization endpoint. No retry, no timeout;
/// the future settles when the transport does. The error string is the text
/// shown to the user: the generic network message for transport problems
/// (including non-2xx and undecodable bodies), the server's own text for
/// application-level rejections.
pub(crate) async fn submit(file: File) -> Result<ColorizedPair, String> {
    let form = FormData::new().map_err(|_| ERR_NETWORK.to_string())?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(|_| ERR_NETWORK.to_string())?;
    let response = Request::post(COLORIZE_ENDPOINT)
        .body(form)
        .map_err(|_| ERR_NETWORK.to_string())?
        .send()
        .await
        .map_err(|_| ERR_NETWORK.to_string())?;
    if !response.ok() {
        gloo::console::warn!("colorize endpoint returned", response.status());
        return Err(ERR_NETWORK.to_string());
    }
    let body: ColorizeResponse = response
        .json()
        .await
        .map_err(|_| ERR_NETWORK.to_string())?;
    colorize_outcome(body)
}
