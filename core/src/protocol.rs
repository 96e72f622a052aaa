use serde::Deserialize;

use crate::state::ERR_COLORIZE_FALLBACK;

pub const COLORIZE_ENDPOINT: &str = "/colorize";
pub const UPLOAD_FIELD: &str = "image";

/// Body of the colorization endpoint's JSON reply. Both shapes share one
/// struct: `{success: true, originalImageUrl, colorizedImageUrl}` on
/// completion, `{success: false, error?}` on rejection.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorizeResponse {
    pub success: bool,
    #[serde(default)]
    pub original_image_url: Option<String>,
    #[serde(default)]
    pub colorized_image_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorizedPair {
    pub original_url: String,
    pub colorized_url: String,
}

/// Maps a decoded response onto either the image pair or the user-facing
/// error text. A success flag without both URLs counts as a server failure.
pub fn colorize_outcome(response: ColorizeResponse) -> Result<ColorizedPair, String> {
    if !response.success {
        return Err(response
            .error
            .unwrap_or_else(|| ERR_COLORIZE_FALLBACK.to_string()));
    }
    match (response.original_image_url, response.colorized_image_url) {
        (Some(original_url), Some(colorized_url)) => Ok(ColorizedPair {
            original_url,
            colorized_url,
        }),
        _ => Err(ERR_COLORIZE_FALLBACK.to_string()),
    }
}
