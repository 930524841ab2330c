//! ==============================================================================
//! lib.rs - Tabs Component Demo Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm page that mounts a TabsComponent into a real document.
//!     leptos owns the page shell; the component owns everything inside
//!     the host div it is handed.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - tab list loaded from embedded json
//!     - component renders through WebDom (web-sys)
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod components;
mod demo;

use components::{Header, TabsHost};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Tabs Component Demo" />
        <Header />
        <div class="container">
            <TabsHost />
        </div>
    }
}
