use leptos::prelude::*;

use crate::api;
use crate::components::ConfigForm;

/// Configuration page: one editable table per configuration document.
#[component]
pub fn Configure() -> impl IntoView {
    let tables = LocalResource::new(|| api::fetch_tables());

    view! {
        <div>
            <h1>"Configure"</h1>
            <Suspense fallback=move || view! { <p>"Loading configuration…"</p> }>
                {move || {
                    tables.read().as_deref().map(|result| match result {
                        Ok(list) if list.is_empty() => view! {
                            <p>"No configuration tables."</p>
                        }.into_any(),
                        Ok(list) => list
                            .iter()
                            .map(|table| view! { <ConfigForm table=table.clone()/> })
                            .collect::<Vec<_>>()
                            .into_any(),
                        Err(err) => view! {
                            <p class="error">
                                {"Failed to load configuration: "} {err.to_string()}
                            </p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
