//! Predicates over an already-named field.
//!
//! ```rust
//! use entgraph_ql::{f, field_contains_fold, field_in, gt};
//!
//! assert_eq!(field_in("org", ["fb", "ent"]).to_string(), r#"org in ["fb","ent"]"#);
//! assert_eq!(field_contains_fold("name", "A8M").to_string(), r#"contains_fold(name, "A8M")"#);
//! assert_eq!(gt(f("updated_at"), f("created_at")).to_string(), "updated_at > created_at");
//! ```

use crate::expr::{Arg, BinaryExpr, CallExpr, Expr, FieldName, FieldRef, Operand};
use crate::op::{Func, Op};
use crate::value::Value;

/// Reference a field by name, for field-to-field comparisons.
pub fn f(name: impl Into<FieldName>) -> FieldRef {
    FieldRef::new(name)
}

fn compare(op: Op, name: impl Into<FieldName>, right: impl Into<Operand>) -> Expr {
    Expr::Binary(BinaryExpr::new(FieldRef::new(name), op, right))
}

macro_rules! comparisons {
    ($($(#[$doc:meta])* $field_fn:ident, $generic_fn:ident => $op:ident;)+) => {
        $(
            $(#[$doc])*
            pub fn $field_fn(name: impl Into<FieldName>, value: impl Into<Value>) -> Expr {
                compare(Op::$op, name, value.into())
            }

            $(#[$doc])*
            ///
            /// Generic form: compares a field against another field or a value.
            pub fn $generic_fn(left: FieldRef, right: impl Into<Operand>) -> Expr {
                Expr::Binary(BinaryExpr::new(left, Op::$op, right))
            }
        )+
    };
}

comparisons! {
    /// `name == value`
    field_eq, eq => Eq;
    /// `name != value`
    field_neq, neq => Neq;
    /// `name > value`
    field_gt, gt => Gt;
    /// `name >= value`
    field_gte, gte => Gte;
    /// `name < value`
    field_lt, lt => Lt;
    /// `name <= value`
    field_lte, lte => Lte;
}

/// `name in [v0,v1,...]`
pub fn field_in<T: Into<Value>>(name: impl Into<FieldName>, values: impl IntoIterator<Item = T>) -> Expr {
    compare(Op::In, name, Value::list(values))
}

/// `name not in [v0,v1,...]`
pub fn field_not_in<T: Into<Value>>(
    name: impl Into<FieldName>,
    values: impl IntoIterator<Item = T>,
) -> Expr {
    compare(Op::NotIn, name, Value::list(values))
}

/// `name == nil`
pub fn field_nil(name: impl Into<FieldName>) -> Expr {
    compare(Op::IsNil, name, Value::Nil)
}

/// `name != nil`
pub fn field_not_nil(name: impl Into<FieldName>) -> Expr {
    compare(Op::IsNotNil, name, Value::Nil)
}

fn string_call(func: Func, name: impl Into<FieldName>, value: impl Into<String>) -> Expr {
    Expr::Call(CallExpr::new(
        func,
        vec![
            Arg::Field(FieldRef::new(name)),
            Arg::Value(Value::String(value.into())),
        ],
    ))
}

/// `contains(name, "v")`
pub fn field_contains(name: impl Into<FieldName>, value: impl Into<String>) -> Expr {
    string_call(Func::Contains, name, value)
}

/// `contains_fold(name, "v")`, case-insensitive containment.
pub fn field_contains_fold(name: impl Into<FieldName>, value: impl Into<String>) -> Expr {
    string_call(Func::ContainsFold, name, value)
}

/// `equal_fold(name, "v")`, case-insensitive equality.
pub fn field_equal_fold(name: impl Into<FieldName>, value: impl Into<String>) -> Expr {
    string_call(Func::EqualFold, name, value)
}

/// `has_prefix(name, "v")`
pub fn field_has_prefix(name: impl Into<FieldName>, value: impl Into<String>) -> Expr {
    string_call(Func::HasPrefix, name, value)
}

/// `has_suffix(name, "v")`
pub fn field_has_suffix(name: impl Into<FieldName>, value: impl Into<String>) -> Expr {
    string_call(Func::HasSuffix, name, value)
}
