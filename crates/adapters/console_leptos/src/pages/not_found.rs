use leptos::prelude::*;

/// 404 page displayed when no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"Nothing on the console lives at this address."</p>
            <p>
                <a href="/">"Go back to home"</a>
            </p>
        </div>
    }
}
