//! Container literals and member/element access.
//!
//! Object and array literals evaluate their parts in source order with
//! different poisoning policies: a dynamic element poisons the whole array,
//! while a map keeps per-key dynamic values. Dotted and bracketed access
//! meet in one helper over maps, arrays, and class references.

use weft_ir::{DeclKind, Element, ElementRange, ExprId, ExprKind, Name, Prop, PropKey, PropRange};

use crate::coerce;
use crate::context::Context;
use crate::errors::{
    index_out_of_bounds, invalid_access, invalid_spread, missing_key, ResolutionError,
    ResolveResult,
};
use crate::interpreter::StaticInterpreter;
use crate::reference::Reference;
use crate::resolver::SymbolResolver;
use crate::value::{OrderedMap, ResolvedValue};

impl<R: SymbolResolver> StaticInterpreter<'_, R> {
    /// Evaluate an object literal.
    ///
    /// Keys are determined statically. Spreads merge in encounter order,
    /// later keys overwriting earlier ones, and a key's value may
    /// independently be `Dynamic` without poisoning the other keys.
    pub(super) fn eval_object(&self, props: PropRange, ctx: &Context) -> ResolveResult {
        let mut entries = OrderedMap::new();
        for &prop in self.arena.get_props(props) {
            match prop {
                Prop::KeyValue { key, value } => {
                    let Some(key) = self.prop_key(key, ctx)? else {
                        // A computed key that isn't statically a string
                        // makes the whole literal unknowable; remaining
                        // properties are not evaluated.
                        return Ok(ResolvedValue::Dynamic);
                    };
                    let value = self.eval(value, ctx)?;
                    entries.insert(key, value);
                }
                Prop::Shorthand { ident } => {
                    let ExprKind::Ident(name) = self.arena.get_expr(ident).kind else {
                        return Ok(ResolvedValue::Dynamic);
                    };
                    let value = match self.resolver.shorthand_value_symbol(ident) {
                        Some(symbol) => self.resolve_symbol(symbol, ctx)?,
                        None => ResolvedValue::Dynamic,
                    };
                    entries.insert(self.interner.lookup(name), value);
                }
                Prop::Spread { expr } => match self.eval(expr, ctx)? {
                    ResolvedValue::Map(spread) => {
                        for (key, value) in spread.iter() {
                            entries.insert(key, value.clone());
                        }
                    }
                    other => return Err(invalid_spread("a map", other.type_name())),
                },
            }
        }
        Ok(ResolvedValue::map(entries))
    }

    /// Statically determine an object property key.
    ///
    /// `None` means a computed key did not evaluate to a string, which
    /// degrades the whole literal.
    fn prop_key(&self, key: PropKey, ctx: &Context) -> Result<Option<String>, ResolutionError> {
        match key {
            PropKey::Ident(name) | PropKey::String(name) => {
                Ok(Some(self.interner.lookup(name).to_owned()))
            }
            PropKey::Number(bits) => Ok(Some(coerce::number_to_string(f64::from_bits(bits)))),
            PropKey::Computed(expr) => match self.eval(expr, ctx)? {
                ResolvedValue::Str(text) => Ok(Some(text.as_ref().clone())),
                _ => Ok(None),
            },
        }
    }

    /// Evaluate an array literal.
    ///
    /// Any element that individually evaluates to `Dynamic` poisons the
    /// whole array; spread elements must be arrays and inline positionally.
    pub(super) fn eval_array(&self, elements: ElementRange, ctx: &Context) -> ResolveResult {
        let mut items = Vec::new();
        for &element in self.arena.get_elements(elements) {
            match element {
                Element::Item(expr) => {
                    let value = self.eval(expr, ctx)?;
                    if value.is_dynamic() {
                        return Ok(ResolvedValue::Dynamic);
                    }
                    items.push(value);
                }
                Element::Spread(expr) => match self.eval(expr, ctx)? {
                    ResolvedValue::Dynamic => return Ok(ResolvedValue::Dynamic),
                    ResolvedValue::Array(spread) => items.extend(spread.iter().cloned()),
                    other => return Err(invalid_spread("an array", other.type_name())),
                },
            }
        }
        Ok(ResolvedValue::array(items))
    }

    /// Evaluate `target.name`.
    pub(super) fn eval_property_access(
        &self,
        target: ExprId,
        name: Name,
        ctx: &Context,
    ) -> ResolveResult {
        let lhs = self.eval(target, ctx)?;
        if lhs.is_dynamic() {
            return Ok(ResolvedValue::Dynamic);
        }
        self.access(&lhs, self.interner.lookup(name), ctx)
    }

    /// Evaluate `target[index]`.
    pub(super) fn eval_index_access(
        &self,
        target: ExprId,
        index: ExprId,
        ctx: &Context,
    ) -> ResolveResult {
        let lhs = self.eval(target, ctx)?;
        let key = self.eval(index, ctx)?;
        if lhs.is_dynamic() || key.is_dynamic() {
            return Ok(ResolvedValue::Dynamic);
        }
        match key_text(&key) {
            Some(text) => self.access(&lhs, &text, ctx),
            // Container and reference keys have no string form.
            None => Ok(ResolvedValue::Dynamic),
        }
    }

    /// Unified access once target and key are known.
    ///
    /// Dotted and bracketed forms meet here; numeric keys arrive already
    /// projected through their canonical string spelling.
    fn access(&self, lhs: &ResolvedValue, key: &str, ctx: &Context) -> ResolveResult {
        match lhs {
            ResolvedValue::Map(entries) => match entries.get(key) {
                Some(value) => Ok(value.clone()),
                None => Err(missing_key(key)),
            },
            ResolvedValue::Array(items) => element_access(items, key),
            ResolvedValue::Ref(reference) => self.static_member(*reference, key, ctx),
            other => Err(invalid_access(other.type_name())),
        }
    }

    /// Static member lookup on a class reference.
    ///
    /// A matching property evaluates its initializer (or is `undefined`
    /// without one); a matching method stays a reference. No match is
    /// `undefined`, like reading an absent property off the class object.
    fn static_member(&self, reference: Reference, key: &str, ctx: &Context) -> ResolveResult {
        let class = *self.arena.get_decl(reference.decl());
        let DeclKind::Class { members } = class.kind else {
            return Err(invalid_access(class.kind.describe()));
        };
        for &member in self.arena.get_members(members) {
            if !member.is_static {
                continue;
            }
            let decl = *self.arena.get_decl(member.decl);
            if self.interner.lookup(decl.name) != key {
                continue;
            }
            match decl.kind {
                DeclKind::Prop { init } if init.is_valid() => return self.eval(init, ctx),
                DeclKind::Prop { .. } => return Ok(ResolvedValue::Undefined),
                // A method is not addressable on its own; the reference
                // stays opaque but remains callable.
                DeclKind::Func { .. } => {
                    return Ok(ResolvedValue::Ref(Reference::Opaque { decl: member.decl }));
                }
                _ => {}
            }
        }
        Ok(ResolvedValue::Undefined)
    }
}

/// String form of an evaluated index key.
///
/// Primitives project the way the host spells them as property keys;
/// containers and references have none.
fn key_text(key: &ResolvedValue) -> Option<String> {
    match key {
        ResolvedValue::Str(text) => Some(text.as_ref().clone()),
        ResolvedValue::Number(n) => Some(coerce::number_to_string(*n)),
        ResolvedValue::Bool(b) => Some(b.to_string()),
        ResolvedValue::Null => Some("null".to_owned()),
        ResolvedValue::Undefined => Some("undefined".to_owned()),
        _ => None,
    }
}

/// Array access: `length`, or an element by integer index.
fn element_access(items: &[ResolvedValue], key: &str) -> ResolveResult {
    if key == "length" {
        return Ok(ResolvedValue::Number(coerce::int_as_f64(items.len() as u64)));
    }
    let Some(index) = integer_key(key) else {
        // Not an element lookup; some runtime property like `push`.
        return Ok(ResolvedValue::Dynamic);
    };
    match usize::try_from(index).ok().and_then(|at| items.get(at)) {
        Some(value) => Ok(value.clone()),
        None => Err(index_out_of_bounds(index, items.len())),
    }
}

/// Parse a key denoting an integer index, in canonical form only.
///
/// `"2"` is an index; `"02"`, `"2.5"`, and `" 2"` are not — those are not
/// how the host spells an element's property key.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the round-trip check keeps the value integral; magnitudes beyond i64 saturate and fail the bounds check"
)]
fn integer_key(key: &str) -> Option<i64> {
    let value = coerce::string_to_number(key);
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if coerce::number_to_string(value) != key {
        return None;
    }
    Some(value as i64)
}
