//! Structural contract with the page under test.
//!
//! The verifier never talks to a browser. It reads an element tree through
//! [`DomElement`], which a live-DOM adapter can implement, or through the
//! owned [`ElementSnapshot`] a harness captures once the page has settled.

pub mod selector;
pub mod transform;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use selector::{Selector, select_all, select_first};
pub use transform::parse_translation;

/// Read-only view of one element of a rendered page.
pub trait DomElement: Sized {
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Element children in document order.
    fn child_elements(&self) -> Vec<&Self>;

    /// Concatenated text of the element and all of its descendants.
    fn text_content(&self) -> String;

    fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|token| token == class))
    }

    fn is_tag(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    /// All descendant elements in document (pre-)order, excluding `self`.
    fn descendants(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        let mut stack: Vec<&Self> = self.child_elements().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.child_elements().into_iter().rev());
        }
        out
    }
}

/// Owned copy of an element subtree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub tag: String,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    /// Text directly inside this element, rendered before its children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}

impl ElementSnapshot {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(name.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id.into())
    }

    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class.into())
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ElementSnapshot) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = ElementSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    /// D3-style tick group: `<g class="tick" transform=...><text>label</text></g>`.
    #[must_use]
    pub fn tick(transform: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new("g")
            .with_class("tick")
            .with_attr("transform", transform.into())
            .with_child(Self::new("line"))
            .with_child(Self::new("text").with_text(label))
    }

    #[must_use]
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::new("circle")
            .with_attr("cx", cx)
            .with_attr("cy", cy)
            .with_attr("r", r)
    }

    #[must_use]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new("rect")
            .with_attr("x", x)
            .with_attr("y", y)
            .with_attr("width", width)
            .with_attr("height", height)
    }
}

impl DomElement for ElementSnapshot {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn child_elements(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }

    fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }
}
