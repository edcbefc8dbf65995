use leptos::prelude::*;

use chainwatch_domain::command::{Command, CommandRequest};

use crate::components::ActionButton;

#[component]
pub fn Home() -> impl IntoView {
    let update_qr = CommandRequest::new("updateQR").map(Command::direct);
    let reset_db = CommandRequest::new("resetDB").map(Command::reload);

    view! {
        <div>
            <h1>"Home"</h1>
            <p>"Welcome to the ChainWatch console"</p>
            <div class="actions">
                {update_qr.ok().map(|command| view! {
                    <ActionButton label="Regenerate QR codes" command/>
                })}
                {reset_db.ok().map(|command| view! {
                    <ActionButton label="Reset database" command/>
                })}
            </div>
        </div>
    }
}
