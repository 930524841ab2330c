//! Host element for the tabs component
//!
//! Leptos renders an empty div; once it exists the component is built
//! against it and takes over its children.

use leptos::html::Div;
use leptos::prelude::*;
use tabs_component::{TabsComponent, TabsOptions, WebDom};
use web_sys::Element;

use crate::demo;

#[component]
pub fn TabsHost() -> impl IntoView {
    let host = NodeRef::<Div>::new();
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let Some(div) = host.get() else {
            return;
        };
        if let Err(e) = mount_tabs(div.into()) {
            log::error!("failed to render tabs: {}", e);
            set_error.set(Some(e));
        }
    });

    view! {
        <div class="tabs-host" node_ref=host></div>
        {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
    }
}

fn mount_tabs(target: Element) -> Result<(), String> {
    let dom = WebDom::new().map_err(|e| e.to_string())?;
    let tabs = demo::demo_tabs().map_err(|e| e.to_string())?;

    let mut component = TabsComponent::new(dom, TabsOptions::with_target(target));
    component.extend_tabs(tabs);
    component.render().map_err(|e| e.to_string())?;

    log::info!("mounted {} tab(s)", component.tabs().len());
    Ok(())
}
