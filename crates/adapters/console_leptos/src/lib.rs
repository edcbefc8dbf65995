use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod browser;
mod components;
pub mod hooks;
mod pages;

use components::{ConfirmModal, Nav};
use hooks::ConsoleHooks;
use pages::{Configure, Home, Link, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(ConsoleHooks::new());

    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("links/:id") view=Link/>
                    <Route path=path!("configure") view=Configure/>
                </Routes>
            </main>
            <ConfirmModal/>
        </Router>
    }
}
