//! Editable configuration table with dirty tracking.

use leptos::ev;
use leptos::prelude::*;

use chainwatch_domain::config::{ConfigField, FieldKind, RenderedTable};

use crate::hooks::use_hooks;

/// One configuration document rendered as a form.
///
/// Submit stays disabled until a field receives input; Reset restores the
/// render-time values and disables it again.
#[component]
pub fn ConfigForm(
    /// The table as rendered by the server.
    table: RenderedTable,
) -> impl IntoView {
    let hooks = use_hooks();
    let submit_id = hooks.compose(&table);
    let name = table.name.clone();

    let rows = table
        .fields
        .into_iter()
        .map(|field| view! { <FieldRow table=name.clone() field/> })
        .collect::<Vec<_>>();

    let disabled = {
        let (hooks, name) = (hooks.clone(), name.clone());
        move || !hooks.is_submit_enabled(&name)
    };
    let on_reset = {
        let (hooks, name) = (hooks.clone(), name.clone());
        move |_| hooks.reset(&name)
    };
    let on_submit = {
        let name = name.clone();
        move |_| hooks.submit(&name)
    };

    view! {
        <section class="config-table">
            <h2>{name}</h2>
            <table>
                <thead>
                    <tr>
                        <th>"Setting"</th>
                        <th>"Value"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <div class="form-actions">
                <button type="button" class="btn-secondary" on:click=on_reset>"Reset"</button>
                <button type="button" id=submit_id disabled=disabled on:click=on_submit>
                    "Submit"
                </button>
            </div>
        </section>
    }
}

#[component]
fn FieldRow(table: String, field: ConfigField) -> impl IntoView {
    let hooks = use_hooks();
    let input_type = match field.kind {
        FieldKind::Number => "number",
        FieldKind::Text => "text",
    };
    let ConfigField { name, comment, .. } = field;
    let input_id = format!("{table}-{name}");

    let value = {
        let (hooks, table, name) = (hooks.clone(), table.clone(), name.clone());
        move || hooks.current(&table, &name)
    };
    let changed = {
        let (hooks, table, name) = (hooks.clone(), table.clone(), name.clone());
        move || hooks.is_changed(&table, &name)
    };
    let on_input = {
        let name = name.clone();
        move |event: ev::Event| hooks.field_changed(&table, &name, event_target_value(&event))
    };

    view! {
        <tr>
            <td><label for=input_id.clone()>{name}</label></td>
            <td>
                <input
                    id=input_id
                    type=input_type
                    class:changed=changed
                    prop:value=value
                    on:input=on_input
                />
            </td>
            <td class="hint">{comment.unwrap_or_default()}</td>
        </tr>
    }
}
