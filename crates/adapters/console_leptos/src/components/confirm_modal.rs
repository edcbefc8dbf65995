//! The page's single confirmation dialog.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use chainwatch_domain::modal::ClickTarget;

use crate::hooks::use_hooks;

/// Backdrop plus dialog. Mount exactly once, near the root.
///
/// A page-wide click listener hides the dialog when the click lands on the
/// backdrop itself; clicks inside the dialog never dismiss it.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let hooks = use_hooks();
    let backdrop = NodeRef::<Div>::new();
    let dialog = NodeRef::<Div>::new();

    let listener = {
        let hooks = hooks.clone();
        window_event_listener(ev::click, move |event| {
            let target = classify(event.target(), backdrop, dialog);
            hooks.on_click(target);
        })
    };
    on_cleanup(move || listener.remove());

    let visible = {
        let hooks = hooks.clone();
        move || hooks.is_modal_visible()
    };
    let confirm = {
        let hooks = hooks.clone();
        move |_| hooks.confirm()
    };
    let cancel = move |_| hooks.hide();

    view! {
        <div
            class="modal"
            node_ref=backdrop
            style:display=move || if visible() { "block" } else { "none" }
        >
            <div class="modal-content" node_ref=dialog>
                <p>"Are you sure? This cannot be undone."</p>
                <div class="modal-actions">
                    <button class="btn-danger" on:click=confirm>"Confirm"</button>
                    <button class="btn-secondary" on:click=cancel>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}

fn classify(
    target: Option<web_sys::EventTarget>,
    backdrop: NodeRef<Div>,
    dialog: NodeRef<Div>,
) -> ClickTarget {
    let Some(target) = target else {
        return ClickTarget::Elsewhere;
    };
    let is_backdrop = backdrop
        .get_untracked()
        .is_some_and(|el| AsRef::<JsValue>::as_ref(&el) == AsRef::<JsValue>::as_ref(&target));
    let inside_dialog = dialog
        .get_untracked()
        .is_some_and(|el| el.contains(target.dyn_ref::<web_sys::Node>()));
    ClickTarget::locate(is_backdrop, inside_dialog)
}
