//! Lint for defined types nothing refers to.

use std::collections::HashSet;

use sdkgen_idl::{Idl, IdlField, IdlTypeDef, IdlTypeDefKind};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about defined types that no account, instruction or other type uses.
pub struct UnusedTypeLint;

impl Lint for UnusedTypeLint {
    fn name(&self) -> &'static str {
        "unused-type"
    }

    fn description(&self) -> &'static str {
        "Check every defined type is referenced"
    }

    fn check(&self, idl: &Idl, diagnostics: &mut Vec<Diagnostic>) {
        let used = referenced_types(idl);
        for def in &idl.types {
            if used.contains(def.name.as_str()) {
                continue;
            }
            diagnostics.push(
                Diagnostic::warning("validate", format!("type '{}' is never used", def.name))
                    .from_lint(self.name())
                    .at(format!("types.{}", def.name)),
            );
        }
    }
}

fn referenced_types(idl: &Idl) -> HashSet<&str> {
    idl.accounts
        .iter()
        .flat_map(|a| &a.fields)
        .chain(idl.instructions.iter().flat_map(|ix| &ix.args))
        .chain(idl.types.iter().flat_map(struct_fields))
        .filter_map(|field| field.ty.defined_name())
        .collect()
}

fn struct_fields(def: &IdlTypeDef) -> &[IdlField] {
    match &def.kind {
        IdlTypeDefKind::Struct { fields } => fields,
        IdlTypeDefKind::Enum { .. } => &[],
    }
}
