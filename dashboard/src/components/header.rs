//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Tabs Component"</h1>
                <p class="subtitle">"Rust WASM + web-sys"</p>
            </div>
        </header>
    }
}
