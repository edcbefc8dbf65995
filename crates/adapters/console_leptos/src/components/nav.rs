use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><a href="/">"Home"</a></li>
                <li><a href="/configure">"Configure"</a></li>
            </ul>
        </nav>
    }
}
