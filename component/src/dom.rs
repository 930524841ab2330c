//! Host capability used by the component
//!
//! The component never reaches for a global document. Everything it needs from
//! its environment goes through [`Dom`]: make an element, append a child,
//! clear a node's children.

use crate::Result;

/// description of an element to create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec<'a> {
    pub tag: &'a str,
    pub id: Option<&'a str>,
    /// plain text, never parsed as markup
    pub text: Option<&'a str>,
}

impl<'a> ElementSpec<'a> {
    pub fn new(tag: &'a str) -> Self {
        Self {
            tag,
            id: None,
            text: None,
        }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_text(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }
}

pub trait Dom {
    /// handle to an element owned by the host
    type Node: Clone;

    fn create_element(&self, spec: ElementSpec<'_>) -> Result<Self::Node>;

    /// append `child` as the last child of `parent`, detaching it from any
    /// previous parent
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<()>;

    fn clear_children(&self, parent: &Self::Node) -> Result<()>;
}
