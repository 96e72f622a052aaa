use std::fmt;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_SLIDER_POSITION: f64 = 0.5;

pub const ERR_NO_SELECTION: &str = "Please select an image first.";
pub const ERR_NETWORK: &str = "Network error: Could not connect to the server";
pub const ERR_COLORIZE_FALLBACK: &str = "An error occurred during colorization";

/// The three mutually exclusive top-level regions of the page. Exactly one is
/// visible at a time; rendering projects the active variant and nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Upload,
    Processing,
    Results,
}

/// Layout used to compare the original against the colorized result.
/// Independent of [`Panel`]; survives result views until toggled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComparisonMode {
    #[default]
    SideBySide,
    Slider,
}

impl ComparisonMode {
    pub fn container_class(self) -> &'static str {
        match self {
            ComparisonMode::SideBySide => "image-comparison side-by-side",
            ComparisonMode::Slider => "image-comparison slider",
        }
    }
}

/// Metadata of the file the user picked, plus the decoded preview once the
/// asynchronous data-URL decode completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub data_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError {
    NotAnImage,
    TooLarge,
}

impl SelectError {
    pub fn message(self) -> &'static str {
        match self {
            SelectError::NotAnImage => "Please select a valid image file (JPG, PNG, WEBP).",
            SelectError::TooLarge => "File size exceeds 10MB. Please select a smaller image.",
        }
    }
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SelectError {}

pub fn validate_candidate(mime: &str, size: u64) -> Result<(), SelectError> {
    if !mime.starts_with("image/") {
        return Err(SelectError::NotAnImage);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(SelectError::TooLarge);
    }
    Ok(())
}

/// Horizontal reveal ratio for the comparison slider, clamped to `[0, 1]`.
pub fn slider_ratio(pointer_x: f64, container_left: f64, container_width: f64) -> f64 {
    ((pointer_x - container_left) / container_width).clamp(0.0, 1.0)
}

/// Filename for the downloaded result: a fixed prefix plus the selected file
/// name, or the trailing segment of the result URL when no name is known.
pub fn download_file_name(selected_name: Option<&str>, colorized_url: &str) -> String {
    let base = match selected_name {
        Some(name) if !name.is_empty() => name,
        _ => colorized_url.rsplit('/').next().unwrap_or(colorized_url),
    };
    format!("colorized_{base}")
}

/// The whole user-visible state of the page. The DOM is a pure projection of
/// this struct; every gesture and callback goes through one of the transition
/// methods below.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub panel: Panel,
    pub comparison: ComparisonMode,
    pub slider_position: f64,
    pub dragging: bool,
    pub selected: Option<SelectedFile>,
    pub error: Option<String>,
    pub original_src: Option<String>,
    pub colorized_src: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            panel: Panel::Upload,
            comparison: ComparisonMode::SideBySide,
            slider_position: DEFAULT_SLIDER_POSITION,
            dragging: false,
            selected: None,
            error: None,
            original_src: None,
            colorized_src: None,
        }
    }

    /// Back to a usable Upload state. Total: clears the selection, both
    /// preview slots, the error and the slider position. The comparison mode
    /// is a user preference and survives.
    pub fn reset(&mut self) {
        let comparison = self.comparison;
        *self = Self::new();
        self.comparison = comparison;
    }

    /// Selection is ignored while a submission is in flight.
    pub fn can_select(&self) -> bool {
        self.panel != Panel::Processing
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    /// Validates a candidate file and, on acceptance, replaces the current
    /// selection (last write wins) and clears any prior error. A rejection
    /// surfaces its message inline and leaves the previous selection intact.
    pub fn select_file(&mut self, name: &str, mime: &str, size: u64) -> Result<(), SelectError> {
        if let Err(rejection) = validate_candidate(mime, size) {
            self.error = Some(rejection.message().to_string());
            return Err(rejection);
        }
        self.selected = Some(SelectedFile {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
            data_url: None,
        });
        self.error = None;
        Ok(())
    }

    /// Attaches the decoded preview to the selection it was decoded for.
    /// A decode that finishes after its file was replaced is dropped.
    pub fn attach_preview(&mut self, name: &str, data_url: &str) {
        let Some(selected) = self.selected.as_mut() else {
            return;
        };
        if selected.name != name {
            return;
        }
        selected.data_url = Some(data_url.to_string());
        self.original_src = Some(data_url.to_string());
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    /// Upload -> Processing, guarded on a file being selected. Returns
    /// whether the submission may proceed.
    pub fn begin_submission(&mut self) -> bool {
        if self.selected.is_none() {
            self.error = Some(ERR_NO_SELECTION.to_string());
            return false;
        }
        self.panel = Panel::Processing;
        true
    }

    /// Processing -> Results. The original slot is re-set from the response
    /// as well, in case the preview was cleared in the meantime.
    pub fn complete_success(&mut self, original_url: &str, colorized_url: &str) {
        self.original_src = Some(original_url.to_string());
        self.colorized_src = Some(colorized_url.to_string());
        self.error = None;
        self.panel = Panel::Results;
    }

    /// Any failure path lands back on Upload with the message inline.
    pub fn fail_submission(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.panel = Panel::Upload;
    }

    /// Idempotent: re-activating the active mode changes nothing.
    pub fn set_comparison(&mut self, mode: ComparisonMode) {
        self.comparison = mode;
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Applies a pointer sample to the slider. No movement is processed while
    /// idle; returns whether the position was updated.
    pub fn drag_to(&mut self, pointer_x: f64, container_left: f64, container_width: f64) -> bool {
        if !self.dragging || container_width <= 0.0 {
            return false;
        }
        self.slider_position = slider_ratio(pointer_x, container_left, container_width);
        true
    }

    /// Unconditional, wherever the pointer ended up.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
