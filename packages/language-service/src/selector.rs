//! CSS Selector Parsing and Matching
//!
//! Directive selectors as written in `@Directive({selector: ...})`:
//! parsing into structured form and structural matching of element
//! selectors against registered directive selectors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Regex for tokenizing CSS selectors
static SELECTOR_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\:not\()|(([\.\#]?)[-\w]+)|(?:\[([-.\w*\\$]+)(?:=(?:"([^"]*)"|'([^']*)'|([^\]]*)))?\])|(\))|(\s*,\s*)"#).unwrap()
});

/// Capture groups of [`SELECTOR_REGEXP`]
#[derive(Debug, Clone, Copy)]
enum SelectorRegexp {
    Not = 1,
    Tag = 2,
    Prefix = 3,
    Attribute = 4,
    AttributeValueDouble = 5,
    AttributeValueSingle = 6,
    AttributeValueUnquoted = 7,
    NotEnd = 8,
    Separator = 9,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Nesting :not in a selector is not allowed")]
    NestedNot,
    #[error("Multiple selectors in :not are not supported")]
    MultipleSelectorsInNot,
    #[error("Error in attribute selector \"{0}\". Unescaped \"$\" is not supported. Please escape with \"\\$\".")]
    UnescapedAttribute(String),
}

/// One parsed selector part (a `,`-separated selector list parses into
/// several of these).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssSelector {
    pub element: Option<String>,
    pub class_names: Vec<String>,
    /// Attribute constraints as (name, value) pairs; an empty value means
    /// "attribute present, any value".
    pub attrs: Vec<(String, String)>,
    pub not_selectors: Vec<CssSelector>,
}

impl CssSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a selector string into its `,`-separated parts.
    pub fn parse(selector: &str) -> Result<Vec<CssSelector>, SelectorError> {
        let mut results = Vec::new();
        let mut current = CssSelector::new();
        let mut in_not = false;

        for cap in SELECTOR_REGEXP.captures_iter(selector) {
            if cap.get(SelectorRegexp::Not as usize).is_some() {
                if in_not {
                    return Err(SelectorError::NestedNot);
                }
                in_not = true;
                current.not_selectors.push(CssSelector::new());
            }

            if let Some(tag) = cap.get(SelectorRegexp::Tag as usize) {
                let tag = tag.as_str();
                let prefix = cap
                    .get(SelectorRegexp::Prefix as usize)
                    .map(|m| m.as_str())
                    .unwrap_or("");
                let target = if in_not {
                    current.not_selectors.last_mut().unwrap()
                } else {
                    &mut current
                };
                match prefix {
                    "#" => target.add_attribute("id", &tag[1..]),
                    "." => target.add_class_name(&tag[1..]),
                    _ => target.set_element(tag),
                }
            }

            if let Some(attr) = cap.get(SelectorRegexp::Attribute as usize) {
                let value = cap
                    .get(SelectorRegexp::AttributeValueDouble as usize)
                    .or_else(|| cap.get(SelectorRegexp::AttributeValueSingle as usize))
                    .or_else(|| cap.get(SelectorRegexp::AttributeValueUnquoted as usize))
                    .map(|m| m.as_str())
                    .unwrap_or("");
                let name = Self::unescape_attribute(attr.as_str())?;
                let target = if in_not {
                    current.not_selectors.last_mut().unwrap()
                } else {
                    &mut current
                };
                target.add_attribute(&name, value);
            }

            if cap.get(SelectorRegexp::NotEnd as usize).is_some() {
                in_not = false;
            }

            if cap.get(SelectorRegexp::Separator as usize).is_some() {
                if in_not {
                    return Err(SelectorError::MultipleSelectorsInNot);
                }
                Self::push_part(&mut results, current);
                current = CssSelector::new();
            }
        }

        Self::push_part(&mut results, current);
        Ok(results)
    }

    fn push_part(results: &mut Vec<CssSelector>, mut part: CssSelector) {
        // A bare `:not(...)` implies the universal element
        if !part.not_selectors.is_empty()
            && part.element.is_none()
            && part.class_names.is_empty()
            && part.attrs.is_empty()
        {
            part.element = Some("*".to_string());
        }
        results.push(part);
    }

    fn unescape_attribute(attr: &str) -> Result<String, SelectorError> {
        let mut result = String::new();
        let mut escaping = false;
        for ch in attr.chars() {
            if ch == '\\' {
                escaping = true;
                continue;
            }
            if ch == '$' && !escaping {
                return Err(SelectorError::UnescapedAttribute(attr.to_string()));
            }
            escaping = false;
            result.push(ch);
        }
        Ok(result)
    }

    fn escape_attribute(attr: &str) -> String {
        attr.replace('$', "\\$")
    }

    /// True when the part names a concrete element (not `*`).
    pub fn has_element_selector(&self) -> bool {
        matches!(self.element.as_deref(), Some(el) if el != "*")
    }

    /// True when the part is a plain element selector with no further
    /// constraints, e.g. `my-component` but not `input[matInput]`.
    pub fn is_element_selector(&self) -> bool {
        self.has_element_selector()
            && self.class_names.is_empty()
            && self.attrs.is_empty()
            && self.not_selectors.is_empty()
    }

    pub fn set_element(&mut self, element: &str) {
        self.element = Some(element.to_string());
    }

    pub fn add_attribute(&mut self, name: &str, value: &str) {
        self.attrs.push((name.to_string(), value.to_lowercase()));
    }

    pub fn add_class_name(&mut self, name: &str) {
        self.class_names.push(name.to_lowercase());
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Display for CssSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(element) = &self.element {
            write!(f, "{}", element)?;
        }
        for class_name in &self.class_names {
            write!(f, ".{}", class_name)?;
        }
        for (name, value) in &self.attrs {
            let name = Self::escape_attribute(name);
            if value.is_empty() {
                write!(f, "[{}]", name)?;
            } else {
                write!(f, "[{}={}]", name, value)?;
            }
        }
        for not_selector in &self.not_selectors {
            write!(f, ":not({})", not_selector)?;
        }
        Ok(())
    }
}

/// Matches element selectors against a set of registered directive
/// selectors, indexed by element name, class name, and attribute.
pub struct SelectorMatcher<T> {
    element_map: HashMap<String, Vec<SelectorContext<T>>>,
    class_map: HashMap<String, Vec<SelectorContext<T>>>,
    attr_map: HashMap<String, HashMap<String, Vec<SelectorContext<T>>>>,
    counter: usize,
}

#[derive(Clone)]
struct SelectorContext<T> {
    selector: CssSelector,
    payload: T,
    id: usize,
}

impl<T: Clone> SelectorMatcher<T> {
    pub fn new() -> Self {
        SelectorMatcher {
            element_map: HashMap::new(),
            class_map: HashMap::new(),
            attr_map: HashMap::new(),
            counter: 0,
        }
    }

    /// Register every part of a parsed selector list with the same payload.
    pub fn add_selectables(&mut self, selectors: &[CssSelector], payload: T) {
        for selector in selectors {
            self.add_selectable(selector.clone(), payload.clone());
        }
    }

    pub fn add_selectable(&mut self, selector: CssSelector, payload: T) {
        let context = SelectorContext {
            selector,
            payload,
            id: self.counter,
        };
        self.counter += 1;

        if let Some(element) = &context.selector.element {
            self.element_map
                .entry(element.clone())
                .or_default()
                .push(context.clone());
        }
        for class_name in &context.selector.class_names {
            self.class_map
                .entry(class_name.clone())
                .or_default()
                .push(context.clone());
        }
        for (name, value) in &context.selector.attrs {
            self.attr_map
                .entry(name.clone())
                .or_default()
                .entry(value.clone())
                .or_default()
                .push(context.clone());
        }
    }

    /// Invoke `callback` once per registered selector structurally matched
    /// by `element_selector`. Returns whether anything matched. Callback
    /// order follows registration order within each index bucket; a selector
    /// reachable through several buckets is reported once.
    pub fn match_selector<F>(&self, element_selector: &CssSelector, mut callback: F) -> bool
    where
        F: FnMut(&CssSelector, &T),
    {
        let mut matched = false;
        let mut seen: HashSet<usize> = HashSet::new();

        let mut candidates: SmallVec<[&SelectorContext<T>; 8]> = SmallVec::new();
        if let Some(element) = &element_selector.element {
            if let Some(contexts) = self.element_map.get(element) {
                candidates.extend(contexts.iter());
            }
        }
        if let Some(contexts) = self.element_map.get("*") {
            candidates.extend(contexts.iter());
        }
        for class_name in &element_selector.class_names {
            if let Some(contexts) = self.class_map.get(class_name) {
                candidates.extend(contexts.iter());
            }
        }
        for (name, value) in &element_selector.attrs {
            if let Some(by_value) = self.attr_map.get(name) {
                if let Some(contexts) = by_value.get(value) {
                    candidates.extend(contexts.iter());
                }
                // Selectors constraining only the attribute name are indexed
                // under the empty value
                if !value.is_empty() {
                    if let Some(contexts) = by_value.get("") {
                        candidates.extend(contexts.iter());
                    }
                }
            }
        }

        for context in candidates {
            if seen.insert(context.id) && Self::is_match(element_selector, &context.selector) {
                callback(&context.selector, &context.payload);
                matched = true;
            }
        }
        matched
    }

    /// Whether `pattern` structurally matches the element described by
    /// `selector`. Element names compare case-sensitively, attribute values
    /// case-insensitively; an empty pattern value matches any value.
    fn is_match(selector: &CssSelector, pattern: &CssSelector) -> bool {
        if let (Some(sel_elem), Some(pat_elem)) = (&selector.element, &pattern.element) {
            if sel_elem != pat_elem && pat_elem != "*" {
                return false;
            }
        }
        for pat_class in &pattern.class_names {
            if !selector.class_names.contains(pat_class) {
                return false;
            }
        }
        for (pat_name, pat_value) in &pattern.attrs {
            let found = selector.attrs.iter().any(|(name, value)| {
                name == pat_name && (pat_value.is_empty() || value.eq_ignore_ascii_case(pat_value))
            });
            if !found {
                return false;
            }
        }
        for not_selector in &pattern.not_selectors {
            if Self::is_match(selector, not_selector) {
                return false;
            }
        }
        true
    }
}

impl<T: Clone> Default for SelectorMatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
