//! Call inlining: binding, body shapes, callees, and scoping.

use pretty_assertions::assert_eq;
use weft_ir::{BinaryOp, ExprId};

use super::fixture::{Defined, Program};
use crate::errors::ResolutionErrorKind;
use crate::{Reference, ResolvedValue};

/// `function add(x, y = 2) { return x + y; }`
fn add_function(p: &mut Program) -> Defined {
    let x = p.param("x");
    let two = p.number(2.0);
    let y = p.param_with_default("y", two);
    let use_x = p.use_of(x);
    let use_y = p.use_of(y);
    let sum = p.binary(BinaryOp::Add, use_x, use_y);
    let ret = p.ret(sum);
    p.func("add", &[x, y], &[ret])
}

#[test]
fn supplied_argument_beats_default() {
    let mut p = Program::new();
    let add = add_function(&mut p);
    let callee = p.use_of(add);
    let one = p.number(1.0);
    let call = p.call(callee, &[one]);
    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Number(3.0));

    let callee = p.use_of(add);
    let one = p.number(1.0);
    let five = p.number(5.0);
    let call = p.call(callee, &[one, five]);
    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Number(6.0));
}

#[test]
fn missing_argument_without_default_is_undefined() {
    let mut p = Program::new();
    let add = add_function(&mut p);
    let callee = p.use_of(add);
    let call = p.call(callee, &[]);

    // undefined + 2
    match p.resolve(call).unwrap() {
        ResolvedValue::Number(n) => assert!(n.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
}

#[test]
fn extra_arguments_are_ignored() {
    let mut p = Program::new();
    let add = add_function(&mut p);
    let callee = p.use_of(add);
    let one = p.number(1.0);
    let two = p.number(2.0);
    let extra = p.number(99.0);
    let call = p.call(callee, &[one, two, extra]);

    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Number(3.0));
}

#[test]
fn extra_arguments_still_evaluate() {
    let mut p = Program::new();
    let add = add_function(&mut p);
    let callee = p.use_of(add);
    let one = p.number(1.0);
    let two = p.number(2.0);
    let empty = p.object(&[]);
    let would_fail = p.property(empty, "missing");
    let call = p.call(callee, &[one, two, would_fail]);

    let err = p.resolve(call).unwrap_err();
    assert_eq!(
        err.kind,
        ResolutionErrorKind::MissingKey {
            key: "missing".to_string()
        }
    );
}

#[test]
fn dynamic_argument_wins_over_default() {
    let mut p = Program::new();
    let add = add_function(&mut p);
    let callee = p.use_of(add);
    let one = p.number(1.0);
    let unknown = p.dynamic();
    let call = p.call(callee, &[one, unknown]);

    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Dynamic);
}

#[test]
fn bare_return_reduces_to_undefined() {
    let mut p = Program::new();
    let ret = p.ret(ExprId::INVALID);
    let noop = p.func("noop", &[], &[ret]);
    let callee = p.use_of(noop);
    let call = p.call(callee, &[]);

    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Undefined);
}

#[test]
fn empty_body_is_hard_error() {
    let mut p = Program::new();
    let f = p.func("empty", &[], &[]);
    let callee = p.use_of(f);
    let call = p.call(callee, &[]);

    let err = p.resolve(call).unwrap_err();
    assert_eq!(
        err.kind,
        ResolutionErrorKind::UnsupportedBody {
            reason: "function body is empty"
        }
    );
}

#[test]
fn multi_statement_body_is_hard_error() {
    let mut p = Program::new();
    let one = p.number(1.0);
    let first = p.ret(one);
    let two = p.number(2.0);
    let second = p.ret(two);
    let f = p.func("busy", &[], &[first, second]);
    let callee = p.use_of(f);
    let call = p.call(callee, &[]);

    let err = p.resolve(call).unwrap_err();
    assert_eq!(
        err.kind,
        ResolutionErrorKind::UnsupportedBody {
            reason: "function body has more than one statement"
        }
    );
}

#[test]
fn non_return_statement_is_hard_error() {
    let mut p = Program::new();
    let stmt = p.other_stmt();
    let f = p.func("loops", &[], &[stmt]);
    let callee = p.use_of(f);
    let call = p.call(callee, &[]);

    let err = p.resolve(call).unwrap_err();
    assert_eq!(
        err.kind,
        ResolutionErrorKind::UnsupportedBody {
            reason: "body statement is not a return"
        }
    );
}

#[test]
fn bodyless_signature_is_hard_error() {
    let mut p = Program::new();
    let f = p.func_signature("declared");
    let callee = p.use_of(f);
    let call = p.call(callee, &[]);

    let err = p.resolve(call).unwrap_err();
    assert_eq!(
        err.kind,
        ResolutionErrorKind::UnsupportedBody {
            reason: "function has no body"
        }
    );
}

#[test]
fn literal_callee_is_hard_error() {
    let mut p = Program::new();
    let text = p.string("not a function");
    let call = p.call(text, &[]);

    let err = p.resolve(call).unwrap_err();
    assert_eq!(
        err.kind,
        ResolutionErrorKind::NotCallable {
            target: "string".to_string()
        }
    );
}

#[test]
fn class_callee_is_hard_error() {
    let mut p = Program::new();
    let class = p.class("Widget", &[]);
    let callee = p.use_of(class);
    let call = p.call(callee, &[]);

    let err = p.resolve(call).unwrap_err();
    assert_eq!(
        err.kind,
        ResolutionErrorKind::NotCallable {
            target: "a class".to_string()
        }
    );
}

#[test]
fn dynamic_callee_degrades() {
    let mut p = Program::new();
    let unknown = p.dynamic();
    let call = p.call(unknown, &[]);

    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Dynamic);
}

#[test]
fn calls_do_not_nest_scopes() {
    let mut p = Program::new();
    let x = p.param("x");
    let use_x = p.use_of(x);
    let ret_inner = p.ret(use_x);
    let inner = p.func("inner", &[], &[ret_inner]);
    let inner_callee = p.use_of(inner);
    let inner_call = p.call(inner_callee, &[]);
    let ret_outer = p.ret(inner_call);
    let outer = p.func("outer", &[x], &[ret_outer]);
    let callee = p.use_of(outer);
    let one = p.number(1.0);
    let call = p.call(callee, &[one]);

    // `inner` binds a fresh scope, so `x` does not pick up the outer
    // call's binding; the parameter stays a reference.
    match p.resolve(call).unwrap() {
        ResolvedValue::Ref(Reference::Local { decl, .. }) => assert_eq!(decl, x.decl),
        other => panic!("expected parameter reference, got {other:?}"),
    }
}

#[test]
fn default_initializer_sees_caller_scope() {
    let mut p = Program::new();
    let x = p.param("x");
    let use_x = p.use_of(x);
    let y = p.param_with_default("y", use_x);
    let use_y = p.use_of(y);
    let ret_inner = p.ret(use_y);
    let pick = p.func("pick", &[y], &[ret_inner]);
    let pick_callee = p.use_of(pick);
    let pick_call = p.call(pick_callee, &[]);
    let ret_outer = p.ret(pick_call);
    let wrap = p.func("wrap", &[x], &[ret_outer]);
    let callee = p.use_of(wrap);
    let five = p.number(5.0);
    let call = p.call(callee, &[five]);

    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Number(5.0));
}

#[test]
fn static_method_calls_inline() {
    let mut p = Program::new();
    let forty_two = p.number(42.0);
    let ret = p.ret(forty_two);
    let make = p.method_member("make", &[ret], true);
    let factory = p.class("Factory", &[make]);
    let target = p.use_of(factory);
    let method = p.property(target, "make");
    let call = p.call(method, &[]);

    assert_eq!(p.resolve(call).unwrap(), ResolvedValue::Number(42.0));
}
