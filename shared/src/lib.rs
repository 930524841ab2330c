//! ==============================================================================
//! lib.rs - shared types for the tabs component
//! ==============================================================================
//!
//! purpose:
//!     defines the tab record and the markup contract used by the component
//!     and the dashboard. keeping them here means the element names a
//!     stylesheet depends on live in exactly one place.
//!
//! relationships:
//!     - used by: component (TabRecord, markup constants)
//!     - used by: dashboard (parse_tabs for the demo tab list)
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

// ==============================================================================
// tab record
// ==============================================================================

/// a single tab: the title shown in the navigation strip and the body text
/// shown in the content area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRecord {
    /// text of the navigation item
    pub title: String,
    /// text of the body element
    pub content: String,
}

impl TabRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// parse a json array of `{"title": ..., "content": ...}` objects
///
/// order of the array is kept, it becomes the render order.
pub fn parse_tabs(json: &str) -> Result<Vec<TabRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

// ==============================================================================
// markup contract
// ==============================================================================

/// tags and identifiers of the rendered tree
///
/// ```text
/// <div>
///   <nav id="tabs"><ul><li>title</li>...</ul></nav>
///   <main id="content"><p>content</p>...</main>
/// </div>
/// ```
pub mod markup {
    pub const ROOT_TAG: &str = "div";

    pub const NAV_TAG: &str = "nav";
    pub const NAV_ID: &str = "tabs";
    pub const LIST_TAG: &str = "ul";
    pub const ITEM_TAG: &str = "li";

    pub const CONTENT_TAG: &str = "main";
    pub const CONTENT_ID: &str = "content";
    pub const BODY_TAG: &str = "p";
}

// ==============================================================================
// tests
// ==============================================================================
