#![deny(clippy::all)]

//! Angular Template Language Service
//!
//! Tag-name completion and tag-descriptor resolution for Angular
//! templates. The host editor plugs [`TagDescriptorsProvider`] into its
//! tag-name and element-descriptor extension points; the provider reads a
//! project-wide [`DeclarationIndex`] and a per-file [`DeclarationScope`]
//! and never owns state of its own.

pub mod entities;
pub mod html;
pub mod index;
pub mod lookup;
pub mod scope;
pub mod selector;
pub mod tag_descriptors;

// Re-exports
pub use entities::{
    is_reserved_tag, DeclarationKind, DeclarationSource, ElementDeclaration, TagDescriptor,
    NG_CONTAINER, NG_CONTENT, NG_TEMPLATE, RESERVED_TAGS,
};
pub use html::{local_name, split_ns_name, TagContext, TagKind};
pub use index::{ApplicableDirectives, DeclarationIndex, DirectiveIndex};
pub use lookup::{sort_by_priority, LookupElement};
pub use scope::{DeclarationProximity, DeclarationScope, ModuleScope};
pub use selector::{CssSelector, SelectorError, SelectorMatcher};
pub use tag_descriptors::{TagDescriptorResolver, TagDescriptorsProvider, TagNameContributor};
