//! Lookup Elements
//!
//! Suggestion items destined for the host's completion popup. The crate
//! only fills in the data; rendering is the host's business.

use crate::entities::ElementDeclaration;
use crate::scope::DeclarationProximity;
use serde::{Deserialize, Serialize};

/// One tag-name suggestion. `priority` is binary: in-scope suggestions
/// sort above everything else. `grayed` marks exported-but-unimported
/// declarations for muted rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupElement {
    pub name: String,
    pub declaration: ElementDeclaration,
    pub proximity: DeclarationProximity,
    pub priority: u8,
    pub grayed: bool,
}

impl LookupElement {
    pub fn new(
        name: impl Into<String>,
        declaration: ElementDeclaration,
        proximity: DeclarationProximity,
    ) -> Self {
        LookupElement {
            name: name.into(),
            declaration,
            proximity,
            priority: if proximity == DeclarationProximity::InScope {
                1
            } else {
                0
            },
            grayed: proximity == DeclarationProximity::PublicModuleExport,
        }
    }
}

/// Stable sort by priority, descending, for hosts that do not sort
/// themselves. Equal-priority items keep their contribution order.
pub fn sort_by_priority(elements: &mut [LookupElement]) {
    elements.sort_by_key(|element| std::cmp::Reverse(element.priority));
}
