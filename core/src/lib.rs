pub mod protocol;
pub mod state;

pub use protocol::{colorize_outcome, ColorizeResponse, ColorizedPair, COLORIZE_ENDPOINT, UPLOAD_FIELD};
pub use state::{
    download_file_name, slider_ratio, validate_candidate, ComparisonMode, Panel, SelectError,
    SelectedFile, ViewState, DEFAULT_SLIDER_POSITION, ERR_COLORIZE_FALLBACK, ERR_NETWORK,
    ERR_NO_SELECTION, MAX_UPLOAD_BYTES,
};
