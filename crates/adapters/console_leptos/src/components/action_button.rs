//! Button bound to one backend command.

use leptos::prelude::*;

use chainwatch_domain::command::Command;

use crate::hooks::use_hooks;

/// Dispatches `command` on click, or asks for confirmation first when the
/// command changes what the user is looking at.
#[component]
pub fn ActionButton(
    /// Button text.
    #[prop(into)]
    label: String,
    /// What the button sends.
    command: Command,
) -> impl IntoView {
    let hooks = use_hooks();
    let class = if command.is_gated() { "btn-danger" } else { "btn-primary" };
    let on_click = move |_| {
        if command.is_gated() {
            hooks.show(command.clone());
        } else {
            hooks.dispatch(command.clone());
        }
    };

    view! {
        <button type="button" class=class on:click=on_click>{label}</button>
    }
}
