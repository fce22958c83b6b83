//! Declaration Index
//!
//! Project-wide lookup of directives usable in element position: all
//! element-selector directives grouped by name, and the applicable-set
//! query for a concrete tag. The index is built elsewhere (or here, for
//! the in-memory variant) and only read by the policies.

use crate::entities::{DeclarationKind, DeclarationSource, ElementDeclaration};
use crate::html::TagContext;
use crate::selector::{CssSelector, SelectorError, SelectorMatcher};
use indexmap::IndexMap;

/// Directives eligible for a concrete tag. `matched` holds the ones whose
/// selector is exactly the tag name; `candidates` the full structurally
/// eligible set, `matched` included. Order within each list is the index's
/// registration order and is stable.
#[derive(Debug, Clone, Default)]
pub struct ApplicableDirectives {
    pub candidates: Vec<ElementDeclaration>,
    pub matched: Vec<ElementDeclaration>,
}

/// Read side of the directive index. Policies borrow a `&dyn
/// DeclarationIndex`, so tests can substitute fakes.
pub trait DeclarationIndex {
    /// Every element-selector directive declaration in the project,
    /// grouped by selector element name. Group order and in-group order
    /// are stable across calls while the index is unchanged.
    fn all_element_directives(&self) -> &IndexMap<String, Vec<ElementDeclaration>>;

    /// Directives whose selector can apply to this tag in element
    /// position.
    fn applicable_directives(&self, ctx: &TagContext) -> ApplicableDirectives;
}

/// In-memory index over registered directive selectors.
#[derive(Default)]
pub struct DirectiveIndex {
    groups: IndexMap<String, Vec<ElementDeclaration>>,
    matcher: SelectorMatcher<ElementDeclaration>,
}

impl DirectiveIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directive by name and selector text. Every selector part
    /// naming a concrete element contributes a declaration; attribute-only
    /// parts are not usable in element position and are ignored. Malformed
    /// selectors are rejected here so queries never fail.
    pub fn add_directive(&mut self, directive: &str, selector: &str) -> Result<(), SelectorError> {
        let parts = CssSelector::parse(selector)?;
        for (part_index, part) in parts.into_iter().enumerate() {
            if !part.has_element_selector() {
                continue;
            }
            let Some(element) = part.element.clone() else {
                continue;
            };
            let declaration = ElementDeclaration {
                selector_name: element.clone(),
                source: DeclarationSource {
                    directive: directive.to_string(),
                    selector: selector.to_string(),
                    part: part_index,
                },
                kind: DeclarationKind::Directive,
            };
            self.groups
                .entry(element)
                .or_default()
                .push(declaration.clone());
            self.matcher.add_selectable(part, declaration);
        }
        Ok(())
    }
}

impl DeclarationIndex for DirectiveIndex {
    fn all_element_directives(&self) -> &IndexMap<String, Vec<ElementDeclaration>> {
        &self.groups
    }

    fn applicable_directives(&self, ctx: &TagContext) -> ApplicableDirectives {
        let element_selector = ctx.element_selector();
        let tag_name = ctx.local_name();
        let mut result = ApplicableDirectives::default();
        self.matcher
            .match_selector(&element_selector, |pattern, declaration| {
                result.candidates.push(declaration.clone());
                if pattern.is_element_selector() && pattern.element.as_deref() == Some(tag_name) {
                    result.matched.push(declaration.clone());
                }
            });
        result
    }
}
