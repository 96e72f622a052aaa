const DARK_MODE_KEY: &str = "irozuke.dark_mode";

pub(crate) fn load_dark_mode() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return false;
    };
    matches!(storage.get_item(DARK_MODE_KEY), Ok(Some(value)) if value == "true")
}

pub(crate) fn save_dark_mode(enabled: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };
    let _ = storage.set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" });
}
