//! References to declarations and their lowering back to expressions.
//!
//! Evaluation stops at functions, classes, and unbound parameters: those
//! resolve to a [`Reference`] instead of a plain value. A reference records
//! how the declaration can be named again from somewhere else, which is what
//! [`Reference::to_expression`] turns into a host expression.
//!
//! Three provenance levels exist:
//!
//! - [`Reference::Opaque`]: the declaration has no usable name and can never
//!   be re-expressed.
//! - [`Reference::Local`]: the declaration is named and lives in some unit of
//!   the current program.
//! - [`Reference::Absolute`]: the declaration was reached through a
//!   non-relative import, so any unit can name it by importing the recorded
//!   module specifier.

use weft_ir::{DeclId, Name, StringInterner, SyntaxArena, UnitId};

/// A named declaration that static evaluation stopped at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reference {
    /// A declaration with no usable name. Cannot be lowered.
    Opaque { decl: DeclId },
    /// A declaration addressable by name within the current program.
    Local { decl: DeclId, name: Name },
    /// A declaration reached through a non-relative import.
    ///
    /// `module` is the import specifier and `symbol` the name imported from
    /// it, both recorded at the import hop that established the provenance.
    /// `name` stays the declaration's own identifier, which can differ from
    /// `symbol` when the module re-exports under another name.
    Absolute {
        decl: DeclId,
        name: Name,
        module: Name,
        symbol: Name,
    },
}

impl Reference {
    /// The declaration this reference points at.
    pub fn decl(&self) -> DeclId {
        match self {
            Reference::Opaque { decl }
            | Reference::Local { decl, .. }
            | Reference::Absolute { decl, .. } => *decl,
        }
    }

    /// The identifier this reference is known by, if it has one.
    pub fn name(&self) -> Option<Name> {
        match self {
            Reference::Opaque { .. } => None,
            Reference::Local { name, .. } | Reference::Absolute { name, .. } => Some(*name),
        }
    }

    /// Lower this reference into an expression usable from `dest`.
    ///
    /// Returns `None` for opaque references. Absolute references always
    /// become an external import of the recorded module, regardless of
    /// where the declaration's source lives. Local references become a
    /// direct identifier when the declaration is in `dest` (or in a unit
    /// that is `dest` under another source suffix), and otherwise an import
    /// via a relative specifier computed between the two unit paths.
    pub fn to_expression<E: ExpressionEmitter>(
        &self,
        arena: &SyntaxArena,
        interner: &StringInterner,
        dest: UnitId,
        emitter: &mut E,
    ) -> Option<E::Expr> {
        match *self {
            Reference::Opaque { .. } => None,
            Reference::Absolute { module, symbol, .. } => {
                Some(emitter.external(interner.lookup(module), symbol))
            }
            Reference::Local { decl, name } => {
                let target_unit = arena.get_decl(decl).unit;
                if target_unit == dest {
                    return Some(emitter.local(decl, name));
                }
                let dest_path = interner.lookup(arena.get_unit(dest).path);
                let decl_path = interner.lookup(arena.get_unit(target_unit).path);
                if strip_source_suffix(dest_path) == strip_source_suffix(decl_path) {
                    // Distinct units that name the same location, e.g. a
                    // declaration file next to its source file.
                    return Some(emitter.local(decl, name));
                }
                let specifier = import_specifier(dest_path, decl_path);
                Some(emitter.external(&specifier, name))
            }
        }
    }
}

/// Emits host expressions for lowered references.
///
/// The resolver computes *what* to emit (a direct identifier or an import
/// plus a use of the imported binding); the host decides what those look
/// like in its own syntax.
pub trait ExpressionEmitter {
    /// The host expression type produced.
    type Expr;

    /// Emit a direct identifier for a declaration visible in the
    /// destination unit.
    fn local(&mut self, decl: DeclId, name: Name) -> Self::Expr;

    /// Emit an import of `symbol` from `module` followed by a use of the
    /// imported binding.
    fn external(&mut self, module: &str, symbol: Name) -> Self::Expr;
}

/// Strip a source-file suffix (`.d.ts` before `.ts`) from a path.
fn strip_source_suffix(path: &str) -> &str {
    if let Some(stripped) = path.strip_suffix(".d.ts") {
        return stripped;
    }
    path.strip_suffix(".ts").unwrap_or(path)
}

/// Directory portion of a slash-separated path (`""` when there is none).
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(at) => &path[..at],
        None => "",
    }
}

/// Relative import specifier for the unit at `to`, seen from the unit at
/// `from`.
///
/// Unit paths are canonical forward-slash paths, so this never consults the
/// filesystem. The result strips the target's source suffix and gains a
/// `./` prefix when it does not already climb out of the directory.
fn import_specifier(from: &str, to: &str) -> String {
    let mut spec = relative_path(parent_dir(from), to);
    let stripped_len = strip_source_suffix(&spec).len();
    spec.truncate(stripped_len);
    if !spec.starts_with('.') {
        spec.insert_str(0, "./");
    }
    spec
}

/// Slash-separated path of `to` relative to the directory `from_dir`.
fn relative_path(from_dir: &str, to: &str) -> String {
    let from: Vec<&str> = from_dir.split('/').filter(|s| !s.is_empty()).collect();
    let to_segments: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();
    let common = from
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();
    let mut parts: Vec<&str> = Vec::new();
    for _ in common..from.len() {
        parts.push("..");
    }
    parts.extend(&to_segments[common..]);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_declaration_suffix_first() {
        assert_eq!(strip_source_suffix("lib/api.d.ts"), "lib/api");
        assert_eq!(strip_source_suffix("lib/api.ts"), "lib/api");
        assert_eq!(strip_source_suffix("lib/api.js"), "lib/api.js");
    }

    #[test]
    fn parent_dir_of_nested_and_bare_paths() {
        assert_eq!(parent_dir("src/app/main.ts"), "src/app");
        assert_eq!(parent_dir("main.ts"), "");
    }

    #[test]
    fn sibling_specifier_gains_dot_slash() {
        assert_eq!(import_specifier("src/main.ts", "src/util.ts"), "./util");
    }

    #[test]
    fn specifier_climbs_directories() {
        assert_eq!(
            import_specifier("src/app/main.ts", "src/lib/helpers.ts"),
            "../lib/helpers"
        );
        assert_eq!(
            import_specifier("src/a/b/deep.ts", "top.ts"),
            "../../../top"
        );
    }

    #[test]
    fn specifier_strips_declaration_suffix() {
        assert_eq!(
            import_specifier("src/main.ts", "src/types/api.d.ts"),
            "./types/api"
        );
    }

    #[test]
    fn specifier_descends_into_subdirectory() {
        assert_eq!(
            import_specifier("main.ts", "nested/deep/mod.ts"),
            "./nested/deep/mod"
        );
    }

    #[test]
    fn reference_name_and_decl() {
        let decl = DeclId::new(3);
        let name = Name::from_raw(7);
        let opaque = Reference::Opaque { decl };
        let local = Reference::Local { decl, name };

        assert_eq!(opaque.decl(), decl);
        assert_eq!(opaque.name(), None);
        assert_eq!(local.name(), Some(name));
    }
}
