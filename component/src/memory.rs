//! In-memory element tree
//!
//! A small reference-counted tree with the handful of DOM behaviors the
//! component relies on. Used natively and by the tests; the browser build
//! goes through [`crate::WebDom`] instead.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::dom::{Dom, ElementSpec};
use crate::error::DomError;
use crate::Result;

struct ElementData {
    tag: String,
    id: Option<String>,
    text: Option<String>,
    parent: Weak<RefCell<ElementData>>,
    children: Vec<MemoryElement>,
}

/// handle to an in-memory element
///
/// Clones share the same element. Equality is identity, like comparing two
/// DOM node references; use [`MemoryElement::same_structure`] to compare
/// shape and text.
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self::from_spec(ElementSpec::new(tag))
    }

    fn from_spec(spec: ElementSpec<'_>) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: spec.tag.to_ascii_lowercase(),
            id: spec.id.map(str::to_string),
            text: spec.text.map(str::to_string),
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn first_child(&self) -> Option<MemoryElement> {
        self.0.borrow().children.first().cloned()
    }

    pub fn parent(&self) -> Option<MemoryElement> {
        self.0.borrow().parent.upgrade().map(MemoryElement)
    }

    /// own text followed by the text of every descendant, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        let data = self.0.borrow();
        if let Some(text) = &data.text {
            out.push_str(text);
        }
        for child in &data.children {
            child.collect_text(out);
        }
    }

    /// first descendant matching `selector`, in document order
    ///
    /// Supports a bare tag name (`"nav"`) or an id (`"#content"`).
    pub fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        let data = self.0.borrow();
        for child in &data.children {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.query_selector(selector) {
                return Some(found);
            }
        }
        None
    }

    fn matches(&self, selector: &str) -> bool {
        let data = self.0.borrow();
        match selector.strip_prefix('#') {
            Some(id) => data.id.as_deref() == Some(id),
            None => data.tag.eq_ignore_ascii_case(selector),
        }
    }

    /// append `child` as the last child, moving it out of its current parent
    pub fn append(&self, child: &MemoryElement) -> Result<()> {
        if self.is_inclusive_descendant_of(child) {
            return Err(DomError::Hierarchy {
                parent: self.tag(),
                child: child.tag(),
            });
        }

        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        Ok(())
    }

    /// remove every child; removed children become parentless
    pub fn clear(&self) {
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in children {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    fn detach(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn is_inclusive_descendant_of(&self, ancestor: &MemoryElement) -> bool {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node == *ancestor {
                return true;
            }
            current = node.parent();
        }
        false
    }

    pub fn inner_html(&self) -> String {
        let data = self.0.borrow();
        let mut out = String::new();
        if let Some(text) = &data.text {
            out.push_str(&escape(text));
        }
        for child in &data.children {
            out.push_str(&child.outer_html());
        }
        out
    }

    pub fn outer_html(&self) -> String {
        let (tag, id) = {
            let data = self.0.borrow();
            (data.tag.clone(), data.id.clone())
        };
        let id_attr = id
            .map(|id| format!(" id=\"{}\"", escape(&id)))
            .unwrap_or_default();
        format!("<{tag}{id_attr}>{}</{tag}>", self.inner_html())
    }

    /// same tags, ids and text throughout, regardless of identity
    pub fn same_structure(&self, other: &MemoryElement) -> bool {
        self.outer_html() == other.outer_html()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryElement {}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemoryElement")
            .field(&self.outer_html())
            .finish()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// host backed by [`MemoryElement`] trees
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryDom;

impl Dom for MemoryDom {
    type Node = MemoryElement;

    fn create_element(&self, spec: ElementSpec<'_>) -> Result<MemoryElement> {
        Ok(MemoryElement::from_spec(spec))
    }

    fn append_child(&self, parent: &MemoryElement, child: &MemoryElement) -> Result<()> {
        parent.append(child)
    }

    fn clear_children(&self, parent: &MemoryElement) -> Result<()> {
        parent.clear();
        Ok(())
    }
}
