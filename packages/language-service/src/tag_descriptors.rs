//! Tag Descriptors Provider
//!
//! The two template language-service policies: contributing tag-name
//! suggestions to the host's completion list, and resolving a written tag
//! name to its backing directive declaration.

use crate::entities::{is_reserved_tag, ElementDeclaration, TagDescriptor, RESERVED_TAGS};
use crate::html::TagContext;
use crate::index::DeclarationIndex;
use crate::lookup::LookupElement;
use crate::scope::{DeclarationProximity, DeclarationScope};
use std::collections::HashSet;

/// Append-only contribution of tag-name suggestions to a host-owned list.
pub trait TagNameContributor {
    fn add_tag_name_variants(&self, elements: &mut Vec<LookupElement>, ctx: &TagContext);
}

/// Resolution of a written tag name to its semantic descriptor.
pub trait TagDescriptorResolver {
    fn get_descriptor(&self, ctx: &TagContext) -> Option<TagDescriptor>;
}

/// Implements both extension points over an injected index and scope. Both
/// operations are pure reads; anything unexpected degrades to "no
/// suggestion / no descriptor" rather than an error.
pub struct TagDescriptorsProvider<'a> {
    index: &'a dyn DeclarationIndex,
    scope: &'a dyn DeclarationScope,
}

impl<'a> TagDescriptorsProvider<'a> {
    pub fn new(index: &'a dyn DeclarationIndex, scope: &'a dyn DeclarationScope) -> Self {
        TagDescriptorsProvider { index, scope }
    }

    fn add_lookup_item(
        elements: &mut Vec<LookupElement>,
        name: &str,
        declaration: ElementDeclaration,
        proximity: DeclarationProximity,
    ) {
        if proximity == DeclarationProximity::DoesNotExist {
            return;
        }
        elements.push(LookupElement::new(name, declaration, proximity));
    }
}

impl TagNameContributor for TagDescriptorsProvider<'_> {
    fn add_tag_name_variants(&self, elements: &mut Vec<LookupElement>, ctx: &TagContext) {
        if !ctx.is_templating_aware() {
            return;
        }
        let mut names: HashSet<String> =
            elements.iter().map(|element| element.name.clone()).collect();
        for name in RESERVED_TAGS {
            if names.insert(name.to_string()) {
                Self::add_lookup_item(
                    elements,
                    name,
                    ElementDeclaration::implicit(name),
                    DeclarationProximity::InScope,
                );
            }
        }
        for (name, declarations) in self.index.all_element_directives() {
            if !declarations.is_empty() && !name.is_empty() && names.insert(name.clone()) {
                let proximity = self.scope.declarations_proximity(declarations);
                Self::add_lookup_item(elements, name, declarations[0].clone(), proximity);
            }
        }
    }
}

impl TagDescriptorResolver for TagDescriptorsProvider<'_> {
    fn get_descriptor(&self, ctx: &TagContext) -> Option<TagDescriptor> {
        if !ctx.is_templating_aware() {
            return None;
        }
        // A namespace-defined tag belongs to the host's own resolution
        if ctx.defined_by_namespace {
            return None;
        }
        let tag_name = ctx.local_name();
        if is_reserved_tag(tag_name) {
            return Some(TagDescriptor::new(
                tag_name,
                ElementDeclaration::implicit(tag_name),
            ));
        }
        let applicable = self.index.applicable_directives(ctx);
        if applicable.candidates.is_empty() {
            return None;
        }
        let backing = if applicable.matched.is_empty() {
            &applicable.candidates
        } else {
            &applicable.matched
        };
        Some(TagDescriptor::new(tag_name, backing[0].clone()))
    }
}
