use irozuke_core::{
    colorize_outcome, download_file_name, slider_ratio, ColorizeResponse, ComparisonMode, Panel,
    SelectError, ViewState, DEFAULT_SLIDER_POSITION, ERR_COLORIZE_FALLBACK, ERR_NO_SELECTION,
    MAX_UPLOAD_BYTES,
};

fn state_with_selection() -> ViewState {
    let mut state = ViewState::new();
    state
        .select_file("cat.jpg", "image/jpeg", 120_000)
        .expect("valid selection");
    state
}

#[test]
fn non_image_mime_is_rejected() {
    let mut state = ViewState::new();
    let result = state.select_file("notes.pdf", "application/pdf", 1_000);
    assert_eq!(result, Err(SelectError::NotAnImage));
    assert_eq!(state.error.as_deref(), Some(SelectError::NotAnImage.message()));
    assert!(!state.can_submit());
}

#[test]
fn oversized_file_is_rejected_even_with_image_mime() {
    let mut state = ViewState::new();
    let result = state.select_file("huge.png", "image/png", MAX_UPLOAD_BYTES + 1);
    assert_eq!(result, Err(SelectError::TooLarge));
    assert_eq!(state.error.as_deref(), Some(SelectError::TooLarge.message()));
    assert!(!state.can_submit());
}

#[test]
fn file_at_size_limit_is_accepted() {
    let mut state = ViewState::new();
    assert!(state.select_file("ok.png", "image/png", MAX_UPLOAD_BYTES).is_ok());
    assert!(state.can_submit());
}

#[test]
fn valid_selection_enables_submit_and_clears_prior_error() {
    let mut state = ViewState::new();
    let _ = state.select_file("notes.pdf", "application/pdf", 1_000);
    assert!(state.error.is_some());

    state
        .select_file("cat.jpg", "image/jpeg", 120_000)
        .expect("valid selection");
    assert!(state.can_submit());
    assert_eq!(state.error, None);

    state.attach_preview("cat.jpg", "data:image/jpeg;base64,AAAA");
    assert_eq!(state.original_src.as_deref(), Some("data:image/jpeg;base64,AAAA"));
    assert_eq!(
        state.selected.as_ref().and_then(|file| file.data_url.as_deref()),
        Some("data:image/jpeg;base64,AAAA")
    );
}

#[test]
fn rejection_keeps_previous_selection() {
    let mut state = state_with_selection();
    let _ = state.select_file("huge.tiff", "image/tiff", MAX_UPLOAD_BYTES + 1);
    assert!(state.can_submit());
    assert_eq!(state.selected.as_ref().map(|file| file.name.as_str()), Some("cat.jpg"));
}

#[test]
fn stale_preview_decode_is_dropped() {
    let mut state = state_with_selection();
    state
        .select_file("dog.png", "image/png", 90_000)
        .expect("valid selection");
    state.attach_preview("cat.jpg", "data:image/jpeg;base64,AAAA");
    assert_eq!(state.original_src, None);

    state.attach_preview("dog.png", "data:image/png;base64,BBBB");
    assert_eq!(state.original_src.as_deref(), Some("data:image/png;base64,BBBB"));
}

#[test]
fn selection_is_ignored_while_processing() {
    let mut state = state_with_selection();
    assert!(state.begin_submission());
    assert_eq!(state.panel, Panel::Processing);
    assert!(!state.can_select());
}

#[test]
fn submission_without_selection_fails_with_message() {
    let mut state = ViewState::new();
    assert!(!state.begin_submission());
    assert_eq!(state.panel, Panel::Upload);
    assert_eq!(state.error.as_deref(), Some(ERR_NO_SELECTION));
}

#[test]
fn successful_response_shows_results_with_both_urls() {
    let mut state = state_with_selection();
    assert!(state.begin_submission());
    state.complete_success("/o.png", "/c.png");
    assert_eq!(state.panel, Panel::Results);
    assert_eq!(state.original_src.as_deref(), Some("/o.png"));
    assert_eq!(state.colorized_src.as_deref(), Some("/c.png"));
    assert_eq!(state.error, None);
}

#[test]
fn failed_response_returns_to_upload_with_server_text() {
    let mut state = state_with_selection();
    assert!(state.begin_submission());
    state.fail_submission("bad format");
    assert_eq!(state.panel, Panel::Upload);
    assert_eq!(state.error.as_deref(), Some("bad format"));
}

#[test]
fn comparison_toggle_round_trip_is_identity() {
    let untouched = state_with_selection();
    let mut state = untouched.clone();
    state.set_comparison(ComparisonMode::Slider);
    state.set_comparison(ComparisonMode::SideBySide);
    assert_eq!(state, untouched);
}

#[test]
fn reactivating_active_mode_is_a_no_op() {
    let mut state = ViewState::new();
    let before = state.clone();
    state.set_comparison(ComparisonMode::SideBySide);
    assert_eq!(state, before);
}

#[test]
fn slider_ratio_clamps_outside_container() {
    assert_eq!(slider_ratio(-250.0, 100.0, 400.0), 0.0);
    assert_eq!(slider_ratio(900.0, 100.0, 400.0), 1.0);
    assert_eq!(slider_ratio(200.0, 100.0, 400.0), 0.25);
}

#[test]
fn slider_ignores_movement_while_idle() {
    let mut state = ViewState::new();
    assert!(!state.drag_to(300.0, 100.0, 400.0));
    assert_eq!(state.slider_position, DEFAULT_SLIDER_POSITION);
}

#[test]
fn slider_drag_lifecycle() {
    let mut state = ViewState::new();
    state.begin_drag();
    assert!(state.drag_to(300.0, 100.0, 400.0));
    assert_eq!(state.slider_position, 0.5);
    assert!(state.drag_to(5000.0, 100.0, 400.0));
    assert_eq!(state.slider_position, 1.0);

    state.end_drag();
    assert!(!state.drag_to(100.0, 100.0, 400.0));
    assert_eq!(state.slider_position, 1.0);
}

#[test]
fn drag_with_degenerate_container_is_ignored() {
    let mut state = ViewState::new();
    state.begin_drag();
    assert!(!state.drag_to(300.0, 100.0, 0.0));
    assert_eq!(state.slider_position, DEFAULT_SLIDER_POSITION);
}

#[test]
fn reset_is_total_and_idempotent() {
    let mut state = state_with_selection();
    state.attach_preview("cat.jpg", "data:image/jpeg;base64,AAAA");
    assert!(state.begin_submission());
    state.complete_success("/o.png", "/c.png");
    state.set_comparison(ComparisonMode::Slider);
    state.begin_drag();
    let _ = state.drag_to(900.0, 100.0, 400.0);

    state.reset();
    assert_eq!(state.panel, Panel::Upload);
    assert!(!state.can_submit());
    assert_eq!(state.selected, None);
    assert_eq!(state.error, None);
    assert_eq!(state.original_src, None);
    assert_eq!(state.colorized_src, None);
    assert_eq!(state.slider_position, DEFAULT_SLIDER_POSITION);
    assert!(!state.dragging);
    // Preference, not transient state.
    assert_eq!(state.comparison, ComparisonMode::Slider);

    let after_first = state.clone();
    state.reset();
    assert_eq!(state, after_first);
}

#[test]
fn download_name_uses_selected_file_name() {
    let name = download_file_name(Some("cat.jpg"), "https://host/x/result123.png");
    assert_eq!(name, "colorized_cat.jpg");
}

#[test]
fn download_name_falls_back_to_url_segment() {
    let name = download_file_name(None, "https://host/x/result123.png");
    assert_eq!(name, "colorized_result123.png");
    let name = download_file_name(Some(""), "/c.png");
    assert_eq!(name, "colorized_c.png");
}

#[test]
fn success_body_maps_to_image_pair() {
    let body: ColorizeResponse = serde_json::from_str(
        r#"{"success":true,"originalImageUrl":"/o.png","colorizedImageUrl":"/c.png"}"#,
    )
    .expect("decode");
    let pair = colorize_outcome(body).expect("pair");
    assert_eq!(pair.original_url, "/o.png");
    assert_eq!(pair.colorized_url, "/c.png");
}

#[test]
fn failure_body_maps_to_server_text() {
    let body: ColorizeResponse =
        serde_json::from_str(r#"{"success":false,"error":"bad format"}"#).expect("decode");
    assert_eq!(colorize_outcome(body), Err("bad format".to_string()));
}

#[test]
fn failure_body_without_text_uses_fallback() {
    let body: ColorizeResponse = serde_json::from_str(r#"{"success":false}"#).expect("decode");
    assert_eq!(colorize_outcome(body), Err(ERR_COLORIZE_FALLBACK.to_string()));
}

#[test]
fn success_body_missing_urls_counts_as_failure() {
    let body: ColorizeResponse = serde_json::from_str(r#"{"success":true}"#).expect("decode");
    assert_eq!(colorize_outcome(body), Err(ERR_COLORIZE_FALLBACK.to_string()));
}
