//! Markup Context
//!
//! Namespace-qualified tag name handling and the element-under-caret
//! context the host hands to the completion and resolution entry points.

use crate::selector::CssSelector;
use serde::{Deserialize, Serialize};

/// Split a `:namespace:name` qualified tag name into (namespace, local name).
/// Names without the leading `:` have no namespace; a malformed `:name` is
/// treated as having no namespace rather than rejected.
pub fn split_ns_name(element_name: &str) -> (Option<&str>, &str) {
    if !element_name.starts_with(':') {
        return (None, element_name);
    }
    match element_name[1..].find(':') {
        Some(idx) => (
            Some(&element_name[1..=idx]),
            &element_name[idx + 2..],
        ),
        None => (None, element_name),
    }
}

/// Local part of a possibly namespace-qualified tag name.
pub fn local_name(element_name: &str) -> &str {
    split_ns_name(element_name).1
}

/// What kind of markup element the caret is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagKind {
    Html,
    Xml,
    Other,
}

/// The element the host is completing or resolving. Built by the host from
/// its own tag node; everything the policies need is captured up front so
/// the queries stay pure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagContext {
    pub tag_name: String,
    pub kind: TagKind,
    pub in_angular_template: bool,
    /// The tag resolves through a declared XML namespace; the host's own
    /// resolution machinery takes precedence then.
    pub defined_by_namespace: bool,
    /// Attributes present on the tag, as (name, value) pairs.
    pub attrs: Vec<(String, String)>,
}

impl TagContext {
    pub fn new(tag_name: impl Into<String>, kind: TagKind) -> Self {
        TagContext {
            tag_name: tag_name.into(),
            kind,
            in_angular_template: false,
            defined_by_namespace: false,
            attrs: Vec::new(),
        }
    }

    /// An HTML tag inside an Angular template, the common case.
    pub fn angular_template(tag_name: impl Into<String>) -> Self {
        TagContext {
            in_angular_template: true,
            ..Self::new(tag_name, TagKind::Html)
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_namespace_definition(mut self) -> Self {
        self.defined_by_namespace = true;
        self
    }

    /// Only HTML tags inside Angular templates take part in directive
    /// completion and resolution.
    pub fn is_templating_aware(&self) -> bool {
        self.kind == TagKind::Html && self.in_angular_template
    }

    pub fn local_name(&self) -> &str {
        local_name(&self.tag_name)
    }

    /// The element-position selector this tag presents to directive
    /// matching: local element name plus attribute names and values.
    pub fn element_selector(&self) -> CssSelector {
        let mut selector = CssSelector::new();
        selector.set_element(self.local_name());
        for (name, value) in &self.attrs {
            selector.add_attribute(local_name(name), value);
        }
        selector
    }
}
