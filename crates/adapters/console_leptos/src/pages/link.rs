use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use chainwatch_domain::command::{Command, CommandRequest};

use crate::components::ActionButton;

/// Detail page of one tracked link, with a gated reset that returns to the
/// overview once the backend accepted it.
#[component]
pub fn Link() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    view! {
        <div>
            <h1>"Link " {id}</h1>
            {move || {
                CommandRequest::new("resetDB")
                    .map(|request| Command::navigate(request.with_param(id()), "/"))
                    .ok()
                    .map(|command| view! {
                        <ActionButton label="Reset this link" command/>
                    })
            }}
            <p>
                <A href="/">"← Back to Home"</A>
            </p>
        </div>
    }
}
