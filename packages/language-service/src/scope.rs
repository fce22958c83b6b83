//! Declaration Scope
//!
//! Visibility classification of directive declarations relative to the
//! file being edited.

use crate::entities::{DeclarationKind, ElementDeclaration};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How reachable a declaration is from the current file, most to least
/// visible. The variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeclarationProximity {
    /// Declared by the current module scope; usable as-is.
    InScope,
    /// Exported by some module but not imported here yet.
    PublicModuleExport,
    /// Exists in the project but cannot be used from this file. Never
    /// suggested.
    DoesNotExist,
}

/// Classifies groups of declarations for the policies. The index owns the
/// declarations; implementations only look at them.
pub trait DeclarationScope {
    /// The best (most visible) proximity over the group. Empty groups are
    /// `DoesNotExist`.
    fn declarations_proximity(&self, declarations: &[ElementDeclaration]) -> DeclarationProximity;
}

/// Scope backed by two directive-name sets: what the current module scope
/// declares or imports, and what other modules export publicly.
#[derive(Debug, Clone, Default)]
pub struct ModuleScope {
    in_scope: HashSet<String>,
    exported: HashSet<String>,
}

impl ModuleScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_in_scope(&mut self, directive: impl Into<String>) {
        self.in_scope.insert(directive.into());
    }

    pub fn add_export(&mut self, directive: impl Into<String>) {
        self.exported.insert(directive.into());
    }

    fn classify(&self, declaration: &ElementDeclaration) -> DeclarationProximity {
        if declaration.kind == DeclarationKind::Builtin {
            return DeclarationProximity::InScope;
        }
        if self.in_scope.contains(&declaration.source.directive) {
            DeclarationProximity::InScope
        } else if self.exported.contains(&declaration.source.directive) {
            DeclarationProximity::PublicModuleExport
        } else {
            DeclarationProximity::DoesNotExist
        }
    }
}

impl DeclarationScope for ModuleScope {
    fn declarations_proximity(&self, declarations: &[ElementDeclaration]) -> DeclarationProximity {
        declarations
            .iter()
            .map(|declaration| self.classify(declaration))
            .min()
            .unwrap_or(DeclarationProximity::DoesNotExist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DeclarationSource, ElementDeclaration};

    fn directive_declaration(directive: &str, name: &str) -> ElementDeclaration {
        ElementDeclaration {
            selector_name: name.to_string(),
            source: DeclarationSource {
                directive: directive.to_string(),
                selector: name.to_string(),
                part: 0,
            },
            kind: DeclarationKind::Directive,
        }
    }

    #[test]
    fn test_proximity_ordering() {
        assert!(DeclarationProximity::InScope < DeclarationProximity::PublicModuleExport);
        assert!(DeclarationProximity::PublicModuleExport < DeclarationProximity::DoesNotExist);
    }

    #[test]
    fn test_group_takes_best_proximity() {
        let mut scope = ModuleScope::new();
        scope.add_export("ExportedDirective");
        scope.add_in_scope("LocalDirective");

        let group = vec![
            directive_declaration("UnreachableDirective", "widget"),
            directive_declaration("ExportedDirective", "widget"),
            directive_declaration("LocalDirective", "widget"),
        ];
        assert_eq!(
            scope.declarations_proximity(&group),
            DeclarationProximity::InScope
        );
        assert_eq!(
            scope.declarations_proximity(&group[..2]),
            DeclarationProximity::PublicModuleExport
        );
        assert_eq!(
            scope.declarations_proximity(&group[..1]),
            DeclarationProximity::DoesNotExist
        );
    }

    #[test]
    fn test_builtins_are_always_in_scope() {
        let scope = ModuleScope::new();
        let builtin = ElementDeclaration::implicit("ng-template");
        assert_eq!(
            scope.declarations_proximity(&[builtin]),
            DeclarationProximity::InScope
        );
    }

    #[test]
    fn test_empty_group_does_not_exist() {
        let scope = ModuleScope::new();
        assert_eq!(
            scope.declarations_proximity(&[]),
            DeclarationProximity::DoesNotExist
        );
    }
}
