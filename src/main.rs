use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Element, Event, File, HtmlInputElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use irozuke_core::{download_file_name, ComparisonMode, Panel, ViewState, ERR_NO_SELECTION};

mod colorize_api;
mod download;
mod persisted;
mod upload;
mod view_store;

use view_store::ViewStore;

/// One selection path for both the picker dialog and the drop gesture.
/// Validation and the selection swap are synchronous; the preview decode
/// lands later through the store.
fn handle_selected_file(store: &ViewStore, pending_file: &Rc<RefCell<Option<File>>>, file: File) {
    if !store.get().can_select() {
        return;
    }
    let name = file.name();
    let mime = file.type_();
    let size = file.size() as u64;
    if store
        .update(|view| view.select_file(&name, &mime, size))
        .is_err()
    {
        return;
    }
    *pending_file.borrow_mut() = Some(file.clone());
    let store = store.clone();
    spawn_local(async move {
        match upload::read_file_data_url(file).await {
            Ok(data_url) => store.update(|view| view.attach_preview(&name, &data_url)),
            Err(message) => {
                gloo::console::warn!("preview decode failed", message.clone());
                store.update(|view| view.set_error(&message));
            }
        }
    });
}

fn drag_slider_to(store: &ViewStore, container_ref: &NodeRef, client_x: f64) {
    if !store.get().dragging {
        return;
    }
    let Some(container) = container_ref.cast::<Element>() else {
        return;
    };
    let rect = container.get_bounding_client_rect();
    store.update(|view| {
        view.drag_to(client_x, rect.left(), rect.width());
    });
}

fn release_drag(store: &ViewStore) {
    if store.get().dragging {
        store.update(|view| view.end_drag());
    }
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(ViewState::new);
    let view_live = use_mut_ref(ViewState::new);
    let store = ViewStore::new(view.clone(), view_live);

    let dark_mode = use_state(persisted::load_dark_mode);
    let drag_over = use_state(|| false);
    let pending_file: Rc<RefCell<Option<File>>> = use_mut_ref(|| None);
    let file_input_ref = use_node_ref();
    let slider_container_ref = use_node_ref();

    let dark_mode_value = *dark_mode;
    let drag_over_value = *drag_over;
    let state = (*view).clone();

    {
        use_effect_with(dark_mode_value, move |dark| {
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                let class_list = body.class_list();
                let _ = if *dark {
                    class_list.add_1("dark")
                } else {
                    class_list.remove_1("dark")
                };
            }
            || ()
        });
    }

    // Slider gestures end anywhere on the page, so the move/release listeners
    // live on the window, capture phase, non-passive (teacher-style drag wiring).
    {
        let store = store.clone();
        let container_ref = slider_container_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let move_store = store.clone();
            let move_container = container_ref.clone();
            let move_listener = EventListener::new_with_options(
                &window,
                "mousemove",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: false,
                },
                move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        drag_slider_to(&move_store, &move_container, event.client_x() as f64);
                    }
                },
            );
            let touch_store = store.clone();
            let touch_container = container_ref.clone();
            let touch_move_listener = EventListener::new_with_options(
                &window,
                "touchmove",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: false,
                },
                move |event: &Event| {
                    if let Some(event) = event.dyn_ref::<TouchEvent>() {
                        if let Some(touch) = event.touches().get(0) {
                            drag_slider_to(&touch_store, &touch_container, touch.client_x() as f64);
                        }
                    }
                },
            );
            let up_store = store.clone();
            let up_listener = EventListener::new_with_options(
                &window,
                "mouseup",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: false,
                },
                move |_: &Event| release_drag(&up_store),
            );
            let touch_end_store = store.clone();
            let touch_end_listener = EventListener::new_with_options(
                &window,
                "touchend",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: false,
                },
                move |_: &Event| release_drag(&touch_end_store),
            );
            let touch_cancel_store = store.clone();
            let touch_cancel_listener = EventListener::new_with_options(
                &window,
                "touchcancel",
                EventListenerOptions {
                    phase: EventListenerPhase::Capture,
                    passive: false,
                },
                move |_: &Event| release_drag(&touch_cancel_store),
            );
            || {
                drop(move_listener);
                drop(touch_move_listener);
                drop(up_listener);
                drop(touch_end_listener);
                drop(touch_cancel_listener);
            }
        });
    }

    let on_theme_toggle = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: Event| {
            let next = !*dark_mode;
            dark_mode.set(next);
            persisted::save_dark_mode(next);
        })
    };

    let on_select_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let store = store.clone();
        let pending_file = pending_file.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            handle_selected_file(&store, &pending_file, file);
        })
    };

    let on_drag_enter = {
        let drag_over = drag_over.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            drag_over.set(true);
        })
    };
    let on_drag_over = {
        let drag_over = drag_over.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            drag_over.set(true);
        })
    };
    let on_drag_leave = {
        let drag_over = drag_over.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            drag_over.set(false);
        })
    };
    let on_drop = {
        let store = store.clone();
        let pending_file = pending_file.clone();
        let drag_over = drag_over.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            drag_over.set(false);
            let Some(transfer) = event.data_transfer() else {
                return;
            };
            let Some(files) = transfer.files() else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            handle_selected_file(&store, &pending_file, file);
        })
    };

    let on_colorize = {
        let store = store.clone();
        let pending_file = pending_file.clone();
        Callback::from(move |_: MouseEvent| {
            let file = pending_file.borrow().clone();
            let Some(file) = file else {
                store.update(|view| view.set_error(ERR_NO_SELECTION));
                return;
            };
            if !store.update(|view| view.begin_submission()) {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                match colorize_api::submit(file).await {
                    Ok(pair) => store.update(|view| {
                        view.complete_success(&pair.original_url, &pair.colorized_url);
                    }),
                    Err(message) => {
                        gloo::console::warn!("colorize failed", message.clone());
                        store.update(|view| view.fail_submission(&message));
                    }
                }
            });
        })
    };

    let on_side_by_side = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.update(|view| view.set_comparison(ComparisonMode::SideBySide));
        })
    };
    let on_slider_mode = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.update(|view| view.set_comparison(ComparisonMode::Slider));
        })
    };

    let on_handle_mouse_down = {
        let store = store.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            store.update(|view| view.begin_drag());
        })
    };
    let on_handle_touch_start = {
        let store = store.clone();
        Callback::from(move |event: TouchEvent| {
            event.prevent_default();
            store.update(|view| view.begin_drag());
        })
    };

    let on_download = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let state = store.get();
            let Some(url) = state.colorized_src else {
                return;
            };
            let filename =
                download_file_name(state.selected.as_ref().map(|file| file.name.as_str()), &url);
            if let Err(message) = download::trigger(&url, &filename) {
                gloo::console::warn!("download failed", message);
            }
        })
    };

    let on_try_another = {
        let store = store.clone();
        let pending_file = pending_file.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            pending_file.borrow_mut().take();
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            store.update(|view| view.reset());
        })
    };

    let selected_name = state
        .selected
        .as_ref()
        .map(|file| file.name.clone())
        .unwrap_or_default();
    let original_src = state.original_src.clone().unwrap_or_default();
    let colorized_src = state.colorized_src.clone().unwrap_or_default();

    let upload_section = html! {
        <section id="upload-section" class="panel upload">
            <div
                id="drop-area"
                class={classes!("drop-area", drag_over_value.then_some("drag-over"))}
                ondragenter={on_drag_enter}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
            >
                <p>{ "Drag & drop a black-and-white photo here" }</p>
                <input
                    id="image-input"
                    ref={file_input_ref.clone()}
                    type="file"
                    accept="image/*"
                    class="hidden-input"
                    onchange={on_file_change}
                />
                <button class="control-button" type="button" onclick={on_select_click}>
                    { "Select image" }
                </button>
                <span id="selected-file-name">{ selected_name }</span>
            </div>
            { if let Some(message) = state.error.clone() {
                html! { <div id="error-message" class="error">{ message }</div> }
            } else {
                html! {}
            }}
            <button
                id="colorize-btn"
                class="control-button primary"
                type="button"
                onclick={on_colorize}
                disabled={!state.can_submit()}
            >
                { "Colorize" }
            </button>
        </section>
    };

    let processing_section = html! {
        <section id="processing-section" class="panel processing">
            <div class="spinner"></div>
            <p>{ "Colorizing your image..." }</p>
        </section>
    };

    let side_by_side_active = state.comparison == ComparisonMode::SideBySide;
    let comparison_body = if side_by_side_active {
        html! {
            <div id="side-by-side-view" class="side-by-side-view">
                <figure>
                    <img id="original-image" src={original_src.clone()} alt="Original" />
                    <figcaption>{ "Original" }</figcaption>
                </figure>
                <figure>
                    <img id="colorized-image" src={colorized_src.clone()} alt="Colorized" />
                    <figcaption>{ "Colorized" }</figcaption>
                </figure>
            </div>
        }
    } else {
        let reveal_style = format!("width: {:.2}%;", state.slider_position * 100.0);
        let handle_style = format!("left: {:.2}%;", state.slider_position * 100.0);
        html! {
            <div id="slider-view" class="slider-view" ref={slider_container_ref.clone()}>
                <img class="slider-colorized" src={colorized_src.clone()} alt="Colorized" />
                <div class="slider-resize" style={reveal_style}>
                    <img class="slider-original" src={original_src.clone()} alt="Original" />
                </div>
                <div
                    class="slider-handle"
                    style={handle_style}
                    onmousedown={on_handle_mouse_down}
                    ontouchstart={on_handle_touch_start}
                ></div>
            </div>
        }
    };

    let results_section = html! {
        <section id="results-section" class="panel results">
            <div class="view-toggle">
                <button
                    id="side-by-side-btn"
                    class={classes!("view-button", side_by_side_active.then_some("active"))}
                    type="button"
                    onclick={on_side_by_side}
                >
                    { "Side by side" }
                </button>
                <button
                    id="slider-btn"
                    class={classes!("view-button", (!side_by_side_active).then_some("active"))}
                    type="button"
                    onclick={on_slider_mode}
                >
                    { "Slider" }
                </button>
            </div>
            <div id="comparison-container" class={state.comparison.container_class()}>
                { comparison_body }
            </div>
            <div class="actions">
                <button id="download-btn" class="control-button" type="button" onclick={on_download}>
                    { "Download" }
                </button>
                <button id="try-another-btn" class="control-button" type="button" onclick={on_try_another}>
                    { "Try another" }
                </button>
            </div>
        </section>
    };

    let content = match state.panel {
        Panel::Upload => upload_section,
        Panel::Processing => processing_section,
        Panel::Results => results_section,
    };

    html! {
        <main class="app">
            <header class="app-header">
                <h1>{ "irozuke" }</h1>
                <label class="theme-toggle" for="dark-mode-toggle">
                    { "Dark mode" }
                    <input
                        id="dark-mode-toggle"
                        type="checkbox"
                        checked={dark_mode_value}
                        onchange={on_theme_toggle}
                    />
                </label>
            </header>
            {content}
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
