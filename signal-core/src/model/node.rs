use serde::{Deserialize, Serialize};

use super::GroupClass;

/// One node in a content tree: either a text segment or a container element.
///
/// Marker nodes produced by the annotation pass are ordinary elements whose
/// `marker` tag is set; the tag is the sole thing distinguishing them, so a
/// reset pass can strip them without any other bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    Text(String),
    Element(Element),
}

/// A container node with ordered children and no text payload of its own
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<GroupClass>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element {
            tag: tag.into(),
            marker: None,
            children,
        })
    }

    /// A marker node wrapping exactly one matched text segment
    pub fn marker(class: GroupClass, text: impl Into<String>) -> Self {
        Node::Element(Element {
            tag: "span".to_string(),
            marker: Some(class),
            children: vec![Node::Text(text.into())],
        })
    }

    /// Concatenated text of this node and all descendants, in document order
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.plain_text(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            marker: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            marker: None,
            children,
        }
    }

    pub fn is_marker(&self) -> bool {
        self.marker.is_some()
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => out.push_str(&el.plain_text()),
            }
        }
        out
    }

    /// Whitespace-delimited word count of the element's text content.
    ///
    /// Container elements separate words (two paragraphs never run
    /// together), while marker spans are inline and do not, so the count of
    /// an annotated tree equals the count of its un-annotated original.
    pub fn word_count(&self) -> usize {
        let mut text = String::new();
        self.push_spaced_text(&mut text);
        text.split_whitespace().count()
    }

    fn push_spaced_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) if el.is_marker() => out.push_str(&el.plain_text()),
                Node::Element(el) => {
                    out.push('\n');
                    el.push_spaced_text(out);
                    out.push('\n');
                }
            }
        }
    }
}
