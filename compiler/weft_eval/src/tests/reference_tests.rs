//! Lowering references back into host expressions.

use pretty_assertions::assert_eq;
use weft_ir::{DeclId, Name, StringInterner, UnitId};

use super::fixture::{Defined, Program};
use crate::{ExpressionEmitter, Reference, ResolvedValue};

/// Emitter producing readable strings for assertions.
struct SpecifierEmitter<'a> {
    interner: &'a StringInterner,
}

impl ExpressionEmitter for SpecifierEmitter<'_> {
    type Expr = String;

    fn local(&mut self, _decl: DeclId, name: Name) -> String {
        self.interner.lookup(name).to_owned()
    }

    fn external(&mut self, module: &str, symbol: Name) -> String {
        format!("import(\"{module}\").{}", self.interner.lookup(symbol))
    }
}

fn lower(p: &Program, reference: Reference, dest: UnitId) -> Option<String> {
    let mut emitter = SpecifierEmitter {
        interner: &p.interner,
    };
    reference.to_expression(&p.arena, &p.interner, dest, &mut emitter)
}

/// Resolve an identifier for `target` down to its reference.
fn resolve_reference(p: &mut Program, target: Defined) -> Reference {
    let expr = p.use_of(target);
    match p.resolve(expr).unwrap() {
        ResolvedValue::Ref(reference) => reference,
        other => panic!("expected reference, got {other:?}"),
    }
}

#[test]
fn same_unit_lowers_to_identifier() {
    let mut p = Program::new();
    let main = p.main;
    let helper = p.ambient_in(main, "helper");
    let reference = resolve_reference(&mut p, helper);

    assert_eq!(lower(&p, reference, main), Some("helper".to_owned()));
}

#[test]
fn sibling_unit_gets_relative_specifier() {
    let mut p = Program::new();
    let dest = p.unit("src/main.ts");
    let util = p.unit("src/util.ts");
    let tool = p.ambient_in(util, "tool");
    let reference = resolve_reference(&mut p, tool);

    assert_eq!(
        lower(&p, reference, dest),
        Some("import(\"./util\").tool".to_owned())
    );
}

#[test]
fn specifier_climbs_out_of_directories() {
    let mut p = Program::new();
    let dest = p.unit("src/app/deep.ts");
    let top = p.unit("top.ts");
    let entry = p.ambient_in(top, "entry");
    let reference = resolve_reference(&mut p, entry);

    assert_eq!(
        lower(&p, reference, dest),
        Some("import(\"../../top\").entry".to_owned())
    );
}

#[test]
fn declaration_suffix_is_stripped_from_specifier() {
    let mut p = Program::new();
    let dest = p.unit("src/main.ts");
    let types = p.unit("src/types/api.d.ts");
    let shape = p.ambient_in(types, "shape");
    let reference = resolve_reference(&mut p, shape);

    assert_eq!(
        lower(&p, reference, dest),
        Some("import(\"./types/api\").shape".to_owned())
    );
}

#[test]
fn declaration_file_beside_its_source_is_local() {
    let mut p = Program::new();
    let dest = p.unit("lib/api.ts");
    let declarations = p.unit("lib/api.d.ts");
    let item = p.ambient_in(declarations, "item");
    let reference = resolve_reference(&mut p, item);

    assert_eq!(lower(&p, reference, dest), Some("item".to_owned()));
}

#[test]
fn absolute_reference_ignores_source_location() {
    let mut p = Program::new();
    let pkg = p.unit("node_modules/some-pkg/index.d.ts");
    let item = p.ambient_in(pkg, "item");
    let imported = p.import("item", "some-pkg", item);
    let reference = resolve_reference(&mut p, imported);

    // Any destination names it through the package specifier, never a
    // relative path into node_modules.
    let dest = p.unit("anywhere/else.ts");
    assert_eq!(
        lower(&p, reference, dest),
        Some("import(\"some-pkg\").item".to_owned())
    );
}

#[test]
fn opaque_reference_cannot_lower() {
    let mut p = Program::new();
    let class = p.class_expr();
    let reference = match p.resolve(class).unwrap() {
        ResolvedValue::Ref(reference) => reference,
        other => panic!("expected reference, got {other:?}"),
    };

    let main = p.main;
    assert_eq!(lower(&p, reference, main), None);
}
