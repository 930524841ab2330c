//! ==============================================================================
//! lib.rs - tabs component
//! ==============================================================================
//!
//! purpose:
//!     a small stateful widget that renders a navigation strip of tab titles
//!     and a content area with every tab body, built from an in-memory list
//!     of tab records.
//!
//! relationships:
//!     - uses: tabs-shared (TabRecord, markup constants)
//!     - used by: dashboard (mounts a TabsComponent<WebDom> into the page)
//!
//! hosts:
//!     the component only talks to its environment through the Dom trait.
//!     - MemoryDom: in-memory element tree, used natively and in tests
//!     - WebDom:    real elements through web-sys, used in the browser
//!
//! ==============================================================================

mod component;
mod dom;
mod error;
mod memory;
mod web;

pub use component::{TabsComponent, TabsOptions};
pub use dom::{Dom, ElementSpec};
pub use error::DomError;
pub use memory::{MemoryDom, MemoryElement};
pub use web::WebDom;

pub use tabs_shared::{markup, TabRecord};

pub type Result<T> = std::result::Result<T, DomError>;
