//! ==============================================================================
//! demo.rs - tab list shown by the dashboard
//! ==============================================================================

use tabs_shared::{parse_tabs, TabRecord};

const DEMO_TABS: &str = r#"[
    {"title": "Overview", "content": "A navigation strip of titles and a content area with every tab body."},
    {"title": "Build", "content": "build() creates a fresh tree and never touches the page."},
    {"title": "Render", "content": "render() clears the host element and mounts the new tree as its only child."}
]"#;

pub fn demo_tabs() -> Result<Vec<TabRecord>, serde_json::Error> {
    parse_tabs(DEMO_TABS)
}
