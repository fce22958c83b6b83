//! Directive Entities
//!
//! Declarations handed out by the index and the descriptor handle the host
//! uses for navigation, validation, and highlighting of a resolved tag.

use serde::{Deserialize, Serialize};

/// `<ng-container>` groups content without rendering an element.
pub const NG_CONTAINER: &str = "ng-container";
/// `<ng-content>` projects content into a component.
pub const NG_CONTENT: &str = "ng-content";
/// `<ng-template>` declares an embedded template.
pub const NG_TEMPLATE: &str = "ng-template";

/// The three reserved Angular tags, in the order they are suggested.
pub const RESERVED_TAGS: [&str; 3] = [NG_CONTAINER, NG_CONTENT, NG_TEMPLATE];

/// Reserved-tag check; tag names in markup compare case-insensitively here.
pub fn is_reserved_tag(tag_name: &str) -> bool {
    RESERVED_TAGS
        .iter()
        .any(|name| name.eq_ignore_ascii_case(tag_name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    /// One of the reserved tags, backed by a synthetic declaration.
    Builtin,
    /// A user directive or component declaration.
    Directive,
}

/// Opaque handle back into the index: which directive declared the
/// selector, the selector text as written, and which part of it named this
/// element. The host resolves it to a source location for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSource {
    pub directive: String,
    pub selector: String,
    pub part: usize,
}

/// A directive or component usable as an HTML element. Created by the
/// index (or the implicit factory for built-ins); read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDeclaration {
    pub selector_name: String,
    pub source: DeclarationSource,
    pub kind: DeclarationKind,
}

impl ElementDeclaration {
    /// Synthetic declaration backing a reserved tag. The canonical
    /// lowercase name is stored regardless of how the tag was written, so
    /// `NG-CONTENT` and `ng-content` resolve to equal declarations.
    pub fn implicit(tag_name: &str) -> Self {
        let canonical = tag_name.to_ascii_lowercase();
        ElementDeclaration {
            source: DeclarationSource {
                directive: canonical.clone(),
                selector: canonical.clone(),
                part: 0,
            },
            selector_name: canonical,
            kind: DeclarationKind::Builtin,
        }
    }
}

/// The semantic handle returned to the host for a resolved tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDescriptor {
    tag_name: String,
    declaration: ElementDeclaration,
}

impl TagDescriptor {
    pub fn new(tag_name: impl Into<String>, declaration: ElementDeclaration) -> Self {
        TagDescriptor {
            tag_name: tag_name.into(),
            declaration,
        }
    }

    /// The tag name as written (namespace prefix already stripped).
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn declaration(&self) -> &ElementDeclaration {
        &self.declaration
    }
}
