//! ==============================================================================
//! component.rs - tabs component
//! ==============================================================================
//!
//! state:
//!     - target:  mount point handed in by the caller (optional)
//!     - tabs:    ordered tab records, append only
//!     - element: subtree from the most recent render
//!
//! flow:
//!     new(options) -> add_tab(..)* -> render()
//!                                       |- build()    fresh subtree, no side effects
//!                                       |- clear      target children removed
//!                                       `- append     subtree becomes sole child
//!
//! ==============================================================================

use tabs_shared::markup::{
    BODY_TAG, CONTENT_ID, CONTENT_TAG, ITEM_TAG, LIST_TAG, NAV_ID, NAV_TAG, ROOT_TAG,
};
use tabs_shared::TabRecord;

use crate::dom::{Dom, ElementSpec};
use crate::Result;

// ==============================================================================
// options
// ==============================================================================

/// construction options
///
/// `TabsOptions::default()` has no target.
#[derive(Debug, Clone)]
pub struct TabsOptions<N> {
    /// element that will host the rendered tree
    pub target: Option<N>,
}

impl<N> TabsOptions<N> {
    pub fn with_target(target: N) -> Self {
        Self {
            target: Some(target),
        }
    }
}

impl<N> Default for TabsOptions<N> {
    fn default() -> Self {
        Self { target: None }
    }
}

// ==============================================================================
// component
// ==============================================================================

pub struct TabsComponent<D: Dom> {
    dom: D,
    target: Option<D::Node>,
    element: Option<D::Node>,
    tabs: Vec<TabRecord>,
}

impl<D: Dom> TabsComponent<D> {
    /// store the options; no elements are created or looked up here
    pub fn new(dom: D, options: TabsOptions<D::Node>) -> Self {
        Self {
            dom,
            target: options.target,
            element: None,
            tabs: Vec::new(),
        }
    }

    pub fn target(&self) -> Option<&D::Node> {
        self.target.as_ref()
    }

    /// subtree mounted by the last `render`, `None` before that or when the
    /// last render had nothing to show
    pub fn element(&self) -> Option<&D::Node> {
        self.element.as_ref()
    }

    pub fn tabs(&self) -> &[TabRecord] {
        &self.tabs
    }

    pub fn add_tab(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.tabs.push(TabRecord::new(title, content));
    }

    pub fn extend_tabs<I>(&mut self, tabs: I)
    where
        I: IntoIterator<Item = TabRecord>,
    {
        self.tabs.extend(tabs);
    }

    /// build a fresh, unmounted tree for the current tabs
    ///
    /// Returns `Ok(None)` when there are no tabs. Neither `element` nor the
    /// target is touched.
    pub fn build(&self) -> Result<Option<D::Node>> {
        if self.tabs.is_empty() {
            return Ok(None);
        }

        let dom = &self.dom;
        let root = dom.create_element(ElementSpec::new(ROOT_TAG))?;

        let nav = dom.create_element(ElementSpec::new(NAV_TAG).with_id(NAV_ID))?;
        let list = dom.create_element(ElementSpec::new(LIST_TAG))?;
        for tab in &self.tabs {
            let item = dom.create_element(ElementSpec::new(ITEM_TAG).with_text(&tab.title))?;
            dom.append_child(&list, &item)?;
        }
        dom.append_child(&nav, &list)?;

        let content = dom.create_element(ElementSpec::new(CONTENT_TAG).with_id(CONTENT_ID))?;
        for tab in &self.tabs {
            let body = dom.create_element(ElementSpec::new(BODY_TAG).with_text(&tab.content))?;
            dom.append_child(&content, &body)?;
        }

        dom.append_child(&root, &nav)?;
        dom.append_child(&root, &content)?;

        log::debug!("built tabs tree with {} tab(s)", self.tabs.len());
        Ok(Some(root))
    }

    /// rebuild the tree and mount it as the only child of the target
    ///
    /// With no tabs the target is left empty and `element` is reset. Without
    /// a target the tree is still built and kept in `element`.
    pub fn render(&mut self) -> Result<()> {
        let built = self.build()?;

        match &self.target {
            Some(target) => {
                self.dom.clear_children(target)?;
                if let Some(root) = &built {
                    self.dom.append_child(target, root)?;
                }
            }
            None => log::debug!("render without target, nothing mounted"),
        }

        self.element = built;
        Ok(())
    }
}

impl<D: Dom + Default> Default for TabsComponent<D> {
    fn default() -> Self {
        Self::new(D::default(), TabsOptions::default())
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDom, MemoryElement};

    fn component_with_target() -> (TabsComponent<MemoryDom>, MemoryElement) {
        let target = MemoryElement::new("div");
        let c = TabsComponent::new(MemoryDom, TabsOptions::with_target(target.clone()));
        (c, target)
    }

    fn texts(parent: &MemoryElement) -> Vec<String> {
        parent.children().iter().map(|c| c.text_content()).collect()
    }

    fn prefilled_target() -> MemoryElement {
        let target = MemoryElement::new("div");
        target.append(&MemoryElement::new("p")).unwrap();
        target.append(&MemoryElement::new("ul")).unwrap();
        target
    }

    // ===========================================================================
    // construction
    // ===========================================================================

    #[test]
    fn test_default_construction() {
        let c: TabsComponent<MemoryDom> = TabsComponent::default();
        assert!(c.target().is_none());
        assert!(c.element().is_none());
        assert!(c.tabs().is_empty());
    }

    #[test]
    fn test_new_stores_target() {
        let (c, target) = component_with_target();
        assert_eq!(c.target(), Some(&target));
        assert!(c.element().is_none());
    }

    #[test]
    fn test_new_does_not_touch_target() {
        let target = prefilled_target();
        let _c = TabsComponent::new(MemoryDom, TabsOptions::with_target(target.clone()));
        assert_eq!(target.child_count(), 2);
    }

    // ===========================================================================
    // add_tab
    // ===========================================================================

    #[test]
    fn test_add_tab_appends_in_order() {
        let mut c: TabsComponent<MemoryDom> = TabsComponent::default();
        c.add_tab("foo", "bar");
        assert_eq!(c.tabs().len(), 1);
        assert_eq!(c.tabs()[0].title, "foo");
        assert_eq!(c.tabs()[0].content, "bar");

        c.add_tab("xxx", "yyy");
        c.add_tab("abc", "bleh");
        assert_eq!(
            c.tabs(),
            &[
                TabRecord::new("foo", "bar"),
                TabRecord::new("xxx", "yyy"),
                TabRecord::new("abc", "bleh"),
            ]
        );
    }

    #[test]
    fn test_add_tab_leaves_element_alone() {
        let (mut c, target) = component_with_target();
        c.add_tab("foo", "bar");
        c.render().unwrap();
        let mounted = c.element().cloned();

        c.add_tab("xxx", "yyy");
        assert_eq!(c.element().cloned(), mounted);
        assert_eq!(target.first_child(), mounted);
    }

    #[test]
    fn test_extend_tabs_matches_add_tab() {
        let mut a: TabsComponent<MemoryDom> = TabsComponent::default();
        a.add_tab("foo", "bar");
        a.add_tab("xxx", "yyy");

        let mut b: TabsComponent<MemoryDom> = TabsComponent::default();
        b.extend_tabs(vec![TabRecord::new("foo", "bar"), TabRecord::new("xxx", "yyy")]);

        assert_eq!(a.tabs(), b.tabs());
        let (a, b) = (a.build().unwrap().unwrap(), b.build().unwrap().unwrap());
        assert!(a.same_structure(&b));
    }

    // ===========================================================================
    // build
    // ===========================================================================

    #[test]
    fn test_build_empty_returns_none() {
        let c: TabsComponent<MemoryDom> = TabsComponent::default();
        assert!(c.build().unwrap().is_none());
    }

    #[test]
    fn test_build_does_not_modify_element_or_target() {
        let target = prefilled_target();
        let mut c = TabsComponent::new(MemoryDom, TabsOptions::with_target(target.clone()));
        c.add_tab("t", "c");
        c.build().unwrap();
        assert!(c.element().is_none());
        assert_eq!(target.child_count(), 2);
    }

    #[test]
    fn test_build_navigation_list() {
        let (mut c, _) = component_with_target();
        c.add_tab("foo", "bar");

        let root = c.build().unwrap().unwrap();
        assert_eq!(root.tag(), "div");
        let nav = root.query_selector("nav").unwrap();
        assert_eq!(nav.id().as_deref(), Some("tabs"));
        let list = nav.query_selector("ul").unwrap();
        assert_eq!(list.child_count(), 1);
        assert!(list.children().iter().all(|item| item.tag() == "li"));

        c.add_tab("xxx", "yyy");
        c.add_tab("abc", "bleh");

        let root = c.build().unwrap().unwrap();
        let list = root.query_selector("nav").unwrap().query_selector("ul").unwrap();
        assert_eq!(list.child_count(), 3);
        assert_eq!(texts(&list), vec!["foo", "xxx", "abc"]);
    }

    #[test]
    fn test_build_content_bodies() {
        let (mut c, _) = component_with_target();
        c.add_tab("foo", "bar");

        let root = c.build().unwrap().unwrap();
        let main = root.query_selector("main").unwrap();
        assert_eq!(main.id().as_deref(), Some("content"));
        assert_eq!(main.child_count(), 1);

        c.add_tab("xxx", "yyy");
        c.add_tab("abc", "bleh");

        let root = c.build().unwrap().unwrap();
        let main = root.query_selector("#content").unwrap();
        assert!(main.children().iter().all(|body| body.tag() == "p"));
        assert_eq!(texts(&main), vec!["bar", "yyy", "bleh"]);
    }

    #[test]
    fn test_build_nav_and_main_are_siblings() {
        let mut c: TabsComponent<MemoryDom> = TabsComponent::default();
        c.add_tab("foo", "bar");
        let root = c.build().unwrap().unwrap();
        let tags: Vec<String> = root.children().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["nav", "main"]);
    }

    #[test]
    fn test_build_returns_distinct_trees() {
        let mut c: TabsComponent<MemoryDom> = TabsComponent::default();
        c.add_tab("foo", "bar");
        let first = c.build().unwrap().unwrap();
        let second = c.build().unwrap().unwrap();
        assert_ne!(first, second);
        assert!(first.same_structure(&second));
    }

    #[test]
    fn test_build_keeps_markup_as_text() {
        let mut c: TabsComponent<MemoryDom> = TabsComponent::default();
        c.add_tab("<b>x</b>", "a & b");
        let root = c.build().unwrap().unwrap();
        let item = root.query_selector("li").unwrap();
        assert_eq!(item.text_content(), "<b>x</b>");
        assert_eq!(item.child_count(), 0);
        assert!(root.inner_html().contains("<li>&lt;b&gt;x&lt;/b&gt;</li>"));
        assert!(root.inner_html().contains("<p>a &amp; b</p>"));
    }

    // ===========================================================================
    // render
    // ===========================================================================

    #[test]
    fn test_render_empty_clears_target() {
        let target = prefilled_target();
        let mut c = TabsComponent::new(MemoryDom, TabsOptions::with_target(target.clone()));
        c.render().unwrap();
        assert!(c.element().is_none());
        assert_eq!(target.inner_html(), "");
    }

    #[test]
    fn test_render_mounts_built_tree() {
        let target = prefilled_target();
        let mut c = TabsComponent::new(MemoryDom, TabsOptions::with_target(target.clone()));
        c.add_tab("foo", "bar");
        c.add_tab("xxx", "yyy");
        c.add_tab("abc", "bleh");

        c.render().unwrap();

        let element = c.element().cloned().unwrap();
        assert_eq!(target.child_count(), 1);
        assert_eq!(target.first_child(), Some(element.clone()));
        assert!(element.same_structure(&c.build().unwrap().unwrap()));
        assert_eq!(
            target.inner_html(),
            "<div><nav id=\"tabs\"><ul><li>foo</li><li>xxx</li><li>abc</li></ul></nav>\
             <main id=\"content\"><p>bar</p><p>yyy</p><p>bleh</p></main></div>"
        );
    }

    #[test]
    fn test_render_twice_replaces_tree() {
        let (mut c, target) = component_with_target();
        c.add_tab("foo", "bar");

        c.render().unwrap();
        let first = c.element().cloned().unwrap();
        c.render().unwrap();
        let second = c.element().cloned().unwrap();

        assert_ne!(first, second);
        assert!(first.same_structure(&second));
        assert_eq!(target.children(), vec![second]);
        assert_eq!(first.parent(), None);
    }

    #[test]
    fn test_render_after_emptying_resets_element() {
        let (mut c, target) = component_with_target();
        c.render().unwrap();
        assert!(c.element().is_none());

        c.add_tab("foo", "bar");
        c.render().unwrap();
        assert!(c.element().is_some());
        assert_eq!(target.child_count(), 1);
    }

    #[test]
    fn test_render_without_target() {
        let mut c: TabsComponent<MemoryDom> = TabsComponent::default();
        c.render().unwrap();
        assert!(c.element().is_none());

        c.add_tab("foo", "bar");
        c.render().unwrap();
        let element = c.element().unwrap();
        assert_eq!(element.parent(), None);
        assert_eq!(element.query_selector("li").unwrap().text_content(), "foo");
    }

    #[test]
    fn test_render_does_not_mutate_tabs() {
        let (mut c, _) = component_with_target();
        c.add_tab("foo", "bar");
        c.render().unwrap();
        c.render().unwrap();
        assert_eq!(c.tabs(), &[TabRecord::new("foo", "bar")]);
    }

    #[test]
    fn test_separate_components_are_independent() {
        let (mut a, target_a) = component_with_target();
        let (mut b, target_b) = component_with_target();
        a.add_tab("foo", "bar");
        b.add_tab("xxx", "yyy");
        b.add_tab("abc", "bleh");

        a.render().unwrap();
        b.render().unwrap();

        assert_eq!(target_a.text_content(), "foobar");
        assert_eq!(target_b.text_content(), "xxxabcyyybleh");
    }
}
